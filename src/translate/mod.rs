pub mod interface;
pub mod languages;
pub mod mock;
pub mod openrouter;
pub mod service;

pub use interface::{
    CompletionBackend, TranslateError, TranslationPath, TranslationRequest, TranslationResult,
};
pub use openrouter::OpenRouterClient;
pub use service::TranslationService;
