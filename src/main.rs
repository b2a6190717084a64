use colored::Colorize;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(e) = subcmd::cli::run(args) {
        if !e.is_reported() {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        process::exit(e.exit_code());
    }
}
