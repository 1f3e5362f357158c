//! Interactive driver for the circled-text filter demo
//!
//! Reads script tokens from stdin (whitespace separated, one or more per
//! line) and prints the simulated document after each event.

use filter_console::{parse_key_token, FilterConsole, Outcome};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let mut console = FilterConsole::new();

    println!("circled-text filter demo");
    println!("tokens: a..z, A..Z, C-f, S-a, on, off  (Ctrl+D to quit)");
    print_state(&console);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match parse_key_token(token) {
                Ok(command) => {
                    let outcome = console.apply(command);
                    let verdict = match outcome {
                        Outcome::Consumed => "consumed",
                        Outcome::PassedThrough => "passed through",
                        Outcome::FilteringSet(true) => "filtering on",
                        Outcome::FilteringSet(false) => "filtering off",
                    };
                    println!("{:>8}: {}", token, verdict);
                }
                Err(reason) => println!("{:>8}: {}", token, reason),
            }
        }
        print_state(&console);
        stdout.flush()?;
    }

    Ok(())
}

fn print_state(console: &FilterConsole) {
    println!(
        "  [{}] \"{}\" caret@{}",
        if console.is_filtering() { "on" } else { "off" },
        console.text(),
        console.caret()
    );
}
