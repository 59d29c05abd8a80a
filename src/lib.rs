pub mod config;
pub mod error;
pub mod handler;
pub mod interactive;
pub mod languages;
pub mod translate;

pub use config::Config;
pub use error::{BabelpostError, Result};
pub use handler::{
    CapturedForm, FormInputs, Outcome, OutputDisplay, TranslationHandler, FAILURE_MESSAGE,
};
pub use translate::{Backend, HttpBackend, TranslationRequest, TranslationResponse};
