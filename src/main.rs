use std::{env, process};

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let flags = match cli::parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            eprintln!("Try 'ringpass --help' for more information.");
            process::exit(cli::EXIT_USAGE);
        }
    };

    logging::init(cli::prompts::set_quiet(flags.quiet));

    let code = if args.len() == 1 || flags.interactive {
        tui::run(flags.settings(), flags.fallback)
    } else {
        cli::run(flags)
    };
    process::exit(code);
}
