mod terminal;

use clap::{App, Arg};
use std::process;
use terminal::RawModeGuard;

fn main() {
    let matches = App::new("LC-3 VM")
        .arg(
            Arg::with_name("PROGRAM")
                .help("The program to run.")
                .required(true)
                .index(1),
        )
        .get_matches();

    let args = vec![
        "lc3vm".to_string(),
        matches.value_of("PROGRAM").unwrap().to_string(),
    ];

    let config = lc3vm::Config::with(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let _raw_mode = RawModeGuard::enable().unwrap_or_else(|err| {
        eprintln!("failed to set up terminal: {}", err);
        process::exit(1);
    });

    if let Err(e) = lc3vm::run(config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
