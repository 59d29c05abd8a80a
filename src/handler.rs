//! Trigger handling: capture the form, call the backend once, update the display.

use crate::translate::{Backend, TranslationRequest};
use tracing::{debug, info, warn};

/// Text shown whenever a translation cannot be produced.
pub const FAILURE_MESSAGE: &str = "Translation failed.";

/// Current values of the three input controls.
pub trait FormInputs {
    fn source_language(&self) -> String;
    fn target_language(&self) -> String;
    fn input_text(&self) -> String;
}

/// Where the result of a trigger is rendered. Each call replaces what was shown.
pub trait OutputDisplay {
    fn show(&self, text: &str);
}

/// Form values fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedForm {
    pub source: String,
    pub target: String,
    pub text: String,
}

impl CapturedForm {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            text: text.into(),
        }
    }
}

impl FormInputs for CapturedForm {
    fn source_language(&self) -> String {
        self.source.clone()
    }

    fn target_language(&self) -> String {
        self.target.clone()
    }

    fn input_text(&self) -> String {
        self.text.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Translated(String),
    Failed,
}

impl Outcome {
    /// Exactly the text written to the display.
    pub fn display_text(&self) -> &str {
        match self {
            Outcome::Translated(text) => text,
            Outcome::Failed => FAILURE_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Translated(_))
    }
}

pub struct TranslationHandler<B> {
    backend: B,
}

impl<B: Backend> TranslationHandler<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one trigger: one request, one display update.
    ///
    /// Overlapping calls are not serialized; whichever finishes last owns the
    /// display.
    pub async fn on_trigger(
        &self,
        inputs: &dyn FormInputs,
        display: &dyn OutputDisplay,
    ) -> Outcome {
        let request = TranslationRequest {
            text: inputs.input_text(),
            source: inputs.source_language(),
            target: inputs.target_language(),
        };

        let outcome = match self.backend.send(&request).await {
            Ok(response) => match response.translated_text() {
                Some(text) => Outcome::Translated(text.to_string()),
                None => {
                    debug!("Response carried no translation");
                    Outcome::Failed
                }
            },
            Err(e) => {
                warn!("{} backend call failed: {}", self.backend.name(), e);
                Outcome::Failed
            }
        };

        if outcome.is_success() {
            info!("Translated {} -> {}", request.source, request.target);
        }

        display.show(outcome.display_text());
        outcome
    }
}
