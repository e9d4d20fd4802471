//! Solving 24-game hands from the command line.
//!
//! Run with: cargo run --example solve -- 3 3 8 8

use std::env;
use std::process::ExitCode;

use tessera_solve::{find_solutions, DEFAULT_TARGET};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: solve NUMBER NUMBER NUMBER NUMBER");
        return ExitCode::FAILURE;
    }

    let mut numbers = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.parse::<i64>() {
            Ok(n) => numbers.push(n),
            Err(_) => {
                eprintln!("not a whole number: `{arg}`");
                return ExitCode::FAILURE;
            }
        }
    }

    let solutions = find_solutions(&numbers, DEFAULT_TARGET);
    if solutions.is_empty() {
        println!("no way to reach {DEFAULT_TARGET} from {numbers:?}");
    } else {
        println!("{} ways to reach {DEFAULT_TARGET}:", solutions.len());
        for solution in &solutions {
            println!("  {solution}");
        }
    }
    ExitCode::SUCCESS
}
