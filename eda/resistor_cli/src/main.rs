use clap::Parser;
use tracing::trace;

use crate::opts::Opts;

mod core;
mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    trace!("opts: {:?}", opts);

    let outcome = core::execute(opts.command)?;

    println!("{}", core::render(&outcome, opts.output)?);

    Ok(())
}
