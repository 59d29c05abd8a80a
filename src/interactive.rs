use crate::config::Config;
use crate::handler::{CapturedForm, OutputDisplay, TranslationHandler};
use crate::languages::{self, LANGUAGES};
use crate::translate::HttpBackend;
use console::style;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const EXIT_WORD: &str = "exit";

/// Writes results to stdout, one line per update.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDisplay;

impl OutputDisplay for TerminalDisplay {
    fn show(&self, text: &str) {
        println!("{}", text);
    }
}

/// Clears a pending spinner before the result is printed.
struct SpinnerDisplay<'a> {
    spinner: &'a ProgressBar,
    inner: &'a dyn OutputDisplay,
}

impl OutputDisplay for SpinnerDisplay<'_> {
    fn show(&self, text: &str) {
        self.spinner.finish_and_clear();
        self.inner.show(text);
    }
}

/// Prompt for languages and text until the user types `exit`.
pub async fn run_session(config: Config) -> anyhow::Result<()> {
    print_header();

    let config = setup_endpoint(config)?;
    let handler = TranslationHandler::new(HttpBackend::from_config(&config)?);
    let display = TerminalDisplay;

    let mut source = config.default_source.clone();
    let mut target = config.default_target.clone();

    loop {
        println!();
        source = select_language("Source language", &source)?;
        target = select_language("Target language", &target)?;

        let text: String = Input::new()
            .with_prompt(format!(
                "Text to translate from {} to {} (type '{}' to quit)",
                languages::display_name(&source),
                languages::display_name(&target),
                EXIT_WORD
            ))
            .allow_empty(true)
            .interact_text()?;

        if is_exit(&text) {
            println!("{}", style("Goodbye!").dim());
            break;
        }

        let spinner = start_spinner();
        let form = CapturedForm::new(source.as_str(), target.as_str(), text);
        let spinner_display = SpinnerDisplay {
            spinner: &spinner,
            inner: &display,
        };

        handler.on_trigger(&form, &spinner_display).await;
    }

    Ok(())
}

fn is_exit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(EXIT_WORD)
}

fn print_header() {
    println!();
    println!(
        "{}",
        style("╔═══════════════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║          babelpost - Translation Client           ║").cyan()
    );
    println!(
        "{}",
        style("╚═══════════════════════════════════════════════════╝").cyan()
    );
    println!();
}

fn setup_endpoint(mut config: Config) -> anyhow::Result<Config> {
    if let Ok(endpoint) = config.endpoint() {
        println!("{} Endpoint: {}", style("✓").green(), endpoint);
        return Ok(config);
    }

    println!("{} Translation endpoint not configured", style("!").yellow());

    let endpoint: String = Input::new()
        .with_prompt("Enter the backend URL (e.g. http://127.0.0.1:5000/translate)")
        .interact_text()?;

    config.endpoint = Some(endpoint.trim().to_string());
    config.validate()?;

    // Offer to save
    if Confirm::new()
        .with_prompt("Save endpoint to config file?")
        .default(true)
        .interact()?
    {
        let path = config.save()?;
        println!("{} Saved to {}", style("✓").green(), path.display());
    }

    Ok(config)
}

fn select_language(prompt: &str, current: &str) -> anyhow::Result<String> {
    let mut options: Vec<String> = LANGUAGES
        .iter()
        .map(|(code, name)| format!("{} ({})", name, code))
        .collect();
    options.push("Other (enter code)...".to_string());

    let default = languages::index_of(current).unwrap_or(LANGUAGES.len());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(default)
        .interact()?;

    if selection == LANGUAGES.len() {
        let code: String = Input::new()
            .with_prompt("Enter language code")
            .with_initial_text(current)
            .interact_text()?;
        Ok(code.trim().to_string())
    } else {
        Ok(LANGUAGES[selection].0.to_string())
    }
}

fn start_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
