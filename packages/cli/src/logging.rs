//! Logging for the `arbor` binary.
//!
//! Everything is written to stderr so stdout only carries the rendered markup. `RUST_LOG` takes
//! precedence over the verbosity flag when it is set.

use crate::Cli;
use std::env;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RUST_LOG";

fn default_directives(verbose: bool) -> &'static str {
    match verbose {
        true => "warn,arbor=debug,arbor_core=debug,arbor_dom=debug,arbor_ssr=debug,arbor_icons=debug",
        false => "warn",
    }
}

pub(crate) fn initialize(args: &Cli) {
    let filter = match env::var(LOG_ENV) {
        Ok(_) => EnvFilter::from_env(LOG_ENV),
        Err(_) => EnvFilter::new(default_directives(args.verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(args.verbose)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_directives_parse() {
        for verbose in [true, false] {
            assert!(default_directives(verbose)
                .split(',')
                .all(|directive| directive.parse::<tracing_subscriber::filter::Directive>().is_ok()));
        }
    }
}
