use std::process;

use clap::Parser;
use colored::Colorize;
use merkov::{cli::Args, run};

fn main() {
    let args = Args::parse();

    if !args.quiet {
        eprintln!("{}: {}", "k-length".bold(), args.k.to_string().blue().bold());
        eprintln!(
            "{}: {}",
            "input".bold(),
            args.input.display().to_string().underline().bold().blue()
        );
        eprintln!(
            "{}: {}",
            "output".bold(),
            args.output.display().to_string().underline().bold().blue()
        );
        eprintln!();
    }

    if let Err(e) = run::run(&args.input, args.k, &args.output, args.format) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
