mod generate;

use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    env,
    fs::File,
    io::{self, BufReader, IsTerminal, Read},
    process::ExitCode,
};
use termeq_parser::equiv::{self, Side};

const USAGE: &str = "\
Usage: termeq [OPTIONS] [FILE]
       termeq gen [N LENGTH]

Decides whether pairs of algebra terms are equivalent when evaluated
left to right with no operator precedence.

Input (FILE, or stdin when piped) starts with the number of pairs on
its first line, followed by two term lines per pair; termeq prints YES
or NO for each pair. With a terminal on stdin and no FILE, termeq
starts an interactive prompt instead.

Options:
    -v, --verbose   print every intermediate polynomial operation and
                    each term's normal form before the verdict
    -h, --help      print this help text

The gen subcommand prints N random terms of roughly LENGTH characters
each (defaults: 20 and 250), preceded by the pair count N/2, for use
as termeq input. N must be even.
";

fn main() -> ExitCode {
    let mut verbose = false;
    let mut file = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{}", USAGE);
                return ExitCode::SUCCESS;
            },
            "-v" | "--verbose" => verbose = true,
            "gen" => return generate::run(args),
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {}\n\n{}", arg, USAGE);
                return ExitCode::FAILURE;
            },
            _ if file.is_none() => file = Some(arg),
            _ => {
                eprintln!("unexpected argument: {}\n\n{}", arg, USAGE);
                return ExitCode::FAILURE;
            },
        }
    }

    if let Some(path) = file {
        let mut input = String::new();
        let opened = File::open(&path)
            .and_then(|file| BufReader::new(file).read_to_string(&mut input));
        if let Err(err) = opened {
            eprintln!("{}: {}", path, err);
            return ExitCode::FAILURE;
        }
        run_batch(&input, verbose)
    } else if !io::stdin().is_terminal() {
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
        run_batch(&input, verbose)
    } else {
        repl(verbose)
    }
}

/// Runs the batch protocol: a pair count on the first line, then two term lines per pair, with
/// one YES or NO line printed per pair. A malformed term aborts the run with a nonzero exit.
fn run_batch(input: &str, verbose: bool) -> ExitCode {
    let mut lines = input.lines();
    let Some(first) = lines.next() else {
        eprintln!("expected the number of pairs on the first line");
        return ExitCode::FAILURE;
    };
    let Ok(count) = first.trim().parse::<usize>() else {
        eprintln!("invalid pair count: {}", first.trim());
        return ExitCode::FAILURE;
    };

    for _ in 0..count {
        let (Some(left), Some(right)) = (lines.next(), lines.next()) else {
            eprintln!("expected {} pairs of terms", count);
            return ExitCode::FAILURE;
        };
        if check_pair(left, right, verbose).is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Checks one pair of terms, printing the verdict (and the trace in verbose mode). A parse
/// failure is reported to stderr against the term it came from.
fn check_pair(left: &str, right: &str, verbose: bool) -> Result<(), ()> {
    let comparison = if verbose {
        let mut steps = Vec::new();
        let comparison = equiv::check(left, right, &mut steps);
        for step in &steps {
            println!("{}", step);
        }
        comparison
    } else {
        equiv::check(left, right, &mut ())
    };

    match comparison {
        Ok(comparison) => {
            if verbose {
                println!("{} = {}", left.trim(), comparison.left);
                println!("{} = {}", right.trim(), comparison.right);
            }
            println!("{}", if comparison.equivalent() { "YES" } else { "NO" });
            Ok(())
        },
        Err((side, error)) => {
            error.report_to_stderr(match side {
                Side::Left => left,
                Side::Right => right,
            });
            Err(())
        },
    }
}

/// Runs the interactive mode: read a pair of terms, print the verdict, repeat.
fn repl(verbose: bool) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_pair(rl: &mut DefaultEditor, verbose: bool) -> Result<(), ReadlineError> {
        let left = rl.readline("lhs> ")?;
        let right = rl.readline("rhs> ")?;
        if left.trim().is_empty() && right.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&left)?;
        rl.add_history_entry(&right)?;

        let _ = check_pair(&left, &right, verbose);
        Ok(())
    }

    loop {
        if let Err(err) = process_pair(&mut rl, verbose) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}
