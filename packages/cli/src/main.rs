#![doc = include_str!("../README.md")]

mod cli;
mod logging;

pub(crate) use cli::*;

fn main() {
    let args = Cli::parse();
    logging::initialize(&args);

    let result = match args.action {
        Commands::List(opts) => opts.list(),
        Commands::Render(opts) => opts.render(),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("Failed: {err:#}");
            std::process::exit(1);
        }
    }
}
