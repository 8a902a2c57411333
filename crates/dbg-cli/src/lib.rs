//! Command line front end of the dbglang schema compiler.

mod args;
pub use args::Cli;

pub mod gen;

use anyhow::Result;
use clap::Parser;
use dbg_codegen::Config;

use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or does not parse.
const DEFAULT_LOG_FILTER: &str = "warn,dbg_cli=info";

/// Compile a schema from `dbgc`-style arguments, without the program name:
/// `INPUT OUTPUT [CONFIG_LINE]... [import NAME from MODULE]...`.
pub fn compile<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = std::iter::once(OsString::from("dbgc")).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(args)?;
    run(cli)
}

/// Log filter for the `dbgc` binary. `directives` is the value of
/// `RUST_LOG`, which replaces the defaults entirely.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn run(cli: Cli) -> Result<()> {
    let (lines, imports) = args::split_trailing(&cli.trailing)?;

    tracing::debug!(
        config_lines = lines.len(),
        imports = imports.len(),
        runtime = %cli.runtime,
        "compiling {}",
        cli.input.display()
    );

    let config = imports.into_iter().fold(
        Config::new().runtime(cli.runtime).config_lines(lines),
        |config, import| config.import(import.name, import.module),
    );

    gen::exec(&cli.input, &cli.output, &config, !cli.no_format)
}
