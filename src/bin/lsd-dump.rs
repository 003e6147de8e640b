//! Thin demo binary: parses a file given on the command line and prints
//! the resulting tree. Not part of the crate's public contract.

use lsd::LSD;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(file) = env::args().nth(1) else {
        eprintln!("usage: lsd-dump <path>");
        return ExitCode::FAILURE;
    };

    print!("Parse file: {file}\n");
    match LSD::parse_file(&file) {
        Ok(tree) => {
            println!("{tree:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("parse error: {err}");
            ExitCode::FAILURE
        }
    }
}
