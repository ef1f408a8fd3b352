use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordseed_cli::cli;
use wordseed_cli::config::WordseedConfig;

fn main() {
    let cli = cli::Cli::parse();

    let config = match WordseedConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level. Logs go to stderr so stdout
    // carries only generated output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    if let Err(e) = cli::run(cli, &config) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
