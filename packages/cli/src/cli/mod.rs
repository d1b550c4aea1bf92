pub mod list;
pub mod render;

pub(crate) use clap::{Parser, Subcommand};

/// Render icons from the Arbor catalog.
#[derive(Parser, Debug)]
#[clap(name = "arbor", version)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub(crate) action: Commands,

    /// Enable verbose logging.
    #[clap(short = 'v', long, global = true)]
    pub(crate) verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the name of every icon in the catalog.
    List(list::List),

    /// Render an icon as SVG markup.
    Render(render::Render),
}
