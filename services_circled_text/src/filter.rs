//! Key interest predicate

use key_types::KeyCode;

/// Decides whether a key event belongs to this service
///
/// True iff filtering is enabled and the key is one of the 26 letter keys.
/// Both the host's test queries (`on_test_key_down`/`up`) and the offer
/// paths (`on_key_down`/`up`) go through this one predicate, so their
/// verdicts always agree for the same inputs.
pub fn should_consume(enabled: bool, code: KeyCode) -> bool {
    enabled && code.is_letter()
}
