use clap::Parser;

mod cli;
mod exit_codes;

use cli::args::Cli;

fn main() {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(cli::args::handle_parse_error(&err)),
    };
    let code = match cli::commands::check::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}
