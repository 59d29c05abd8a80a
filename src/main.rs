use anyhow::{Context, Result};
use babelpost::config::Config;
use babelpost::handler::{CapturedForm, TranslationHandler};
use babelpost::interactive::{self, TerminalDisplay};
use babelpost::languages::LANGUAGES;
use babelpost::translate::{Backend, HttpBackend};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "babelpost")]
#[command(version, about = "Send text to a translation backend and print the result")]
#[command(long_about = "Send text to a translation backend and print the result.\n\nWithout TEXT (or with --interactive) an interactive session starts.")]
struct Cli {
    /// Text to translate (may be empty)
    text: Option<String>,

    /// Source language code (e.g., en_XX, hi_IN)
    #[arg(short, long)]
    source: Option<String>,

    /// Target language code (e.g., ta_IN, bn_IN)
    #[arg(short, long)]
    target: Option<String>,

    /// Translation backend URL (overrides BABELPOST_ENDPOINT and the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// List the language codes the backend understands and exit
    #[arg(long)]
    list_languages: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn print_languages() {
    println!("Languages available for translation:");
    for (code, name) in LANGUAGES {
        println!("  {:<10} {}", name, code);
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.list_languages {
        print_languages();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = Some(endpoint);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = Some(timeout);
    }
    if let Some(source) = cli.source {
        config.default_source = source;
    }
    if let Some(target) = cli.target {
        config.default_target = target;
    }

    let text = match cli.text {
        Some(text) if !cli.interactive => text,
        _ => {
            interactive::run_session(config).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    config
        .validate()
        .context("Configuration validation failed")?;

    let backend = HttpBackend::from_config(&config)?;
    debug!("Backend: {} ({})", backend.name(), backend.endpoint());
    info!(
        "Translating {} -> {}",
        config.default_source, config.default_target
    );

    let handler = TranslationHandler::new(backend);
    let form = CapturedForm::new(config.default_source, config.default_target, text);
    let outcome = handler.on_trigger(&form, &TerminalDisplay).await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::parse_from(["babelpost", "-s", "en_XX", "-t", "hi_IN", "hello"]);
        assert_eq!(cli.text.as_deref(), Some("hello"));
        assert_eq!(cli.source.as_deref(), Some("en_XX"));
        assert_eq!(cli.target.as_deref(), Some("hi_IN"));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_parse_empty_text() {
        let cli = Cli::parse_from(["babelpost", "--endpoint", "http://localhost:5000", ""]);
        assert_eq!(cli.text.as_deref(), Some(""));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:5000"));
    }
}
