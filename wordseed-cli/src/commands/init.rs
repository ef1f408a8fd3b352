use crate::config::WordseedConfig;
use crate::error::CliError;
use crate::format::print_success;

pub fn run(dir: &str) -> Result<(), CliError> {
    let path = WordseedConfig::init(dir)?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
