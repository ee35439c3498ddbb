//! Random term generation, for producing batch input that exercises the checker.

use rand::Rng;
use std::process::ExitCode;

/// Entry point of the `gen` subcommand. Accepts either no arguments or a pair `N LENGTH`, where
/// `N` is the (even, positive) number of terms to print and `LENGTH` the approximate length of
/// each.
pub fn run(mut args: impl Iterator<Item = String>) -> ExitCode {
    let (count, length) = match (args.next(), args.next(), args.next()) {
        (None, _, _) => (20, 250),
        (Some(count), Some(length), None) => {
            match (count.parse::<usize>(), length.parse::<usize>()) {
                (Ok(count), Ok(length)) if count > 0 && count % 2 == 0 && length > 0 => {
                    (count, length)
                },
                _ => return usage_error(),
            }
        },
        _ => return usage_error(),
    };

    let mut rng = rand::thread_rng();
    println!("{}", count / 2);
    for _ in 0..count {
        println!("{}", random_term(&mut rng, length));
    }

    ExitCode::SUCCESS
}

fn usage_error() -> ExitCode {
    eprintln!(
        "Usage: termeq gen [N LENGTH]\n\
         where N is the even, positive number of terms to generate and\n\
         LENGTH the approximate length of each generated term"
    );
    ExitCode::FAILURE
}

/// Picks a random atom: one of the letters `a` through `z` (each weighted four times as heavily
/// as any single constant) or a constant between 0 and 100.
fn random_atom(rng: &mut impl Rng) -> String {
    let choice = rng.gen_range(0..205);
    if choice < 104 {
        char::from(b'a' + (choice % 26) as u8).to_string()
    } else {
        (choice - 104).to_string()
    }
}

/// Grows a random term until it reaches approximately the requested length, by repeatedly
/// parenthesizing it or extending it with an operator and a shorter random term.
fn random_term(rng: &mut impl Rng, length: usize) -> String {
    let mut term = random_atom(rng);

    while term.len() < length {
        let budget = length - term.len();
        term = match rng.gen_range(0..102) {
            0..=24 => format!("({})", term),
            choice => {
                let sub_length = rng.gen_range(1..=budget);
                match choice {
                    25..=44 => format!("{}+{}", term, random_term(rng, sub_length)),
                    45..=74 => format!("{}-{}", term, random_term(rng, sub_length)),
                    _ => format!("{}*{}", term, random_term(rng, sub_length)),
                }
            }
        };
    }

    term
}
