use clap::Parser;
use dbg_cli::Cli;

fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(dbg_cli::log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();

    if let Err(err) = dbg_cli::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
