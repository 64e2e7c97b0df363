extern crate anyhow;
extern crate bitvec;
extern crate clap;
extern crate serde;
extern crate serde_json;
extern crate thiserror;

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

use crate::cli::{Cli, Command};
use clap::Parser;

mod algorithms;
mod cli;
mod compressor;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Encode(args) => cli::encode::encode(args)?,
        Command::Decode(args) => cli::decode::decode(args)?,
        Command::Test(args) => cli::test::test(args)?,
        Command::Codes(args) => cli::codes::codes(args)?,
    }

    Ok(())
}
