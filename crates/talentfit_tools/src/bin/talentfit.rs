#![forbid(unsafe_code)]

use std::env;

use talentfit_engines::TalentFitConfig;
use talentfit_tools::compare_cli::{execute_compare_command, parse_compare_args};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_compare_args(&args)?;
    let output = execute_compare_command(TalentFitConfig::from_env(), &command)?;
    println!("{output}");
    Ok(())
}
