use clap::Parser;
use colored::Colorize;
use biograph_core::cli::{dispatch, Cli};
use biograph_core::exit::BiographExit;
use tracing::Level;

fn main() -> BiographExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = &cli.command {
        dispatch::execute(&cli, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(BiographExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            BiographExit::Error
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
