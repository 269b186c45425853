pub mod chunker;
pub mod controller;
pub mod frontend;
pub mod interface;

pub use controller::{PlaybackState, SpeechService};
pub use frontend::{FrontendNotifier, FrontendSpeechEngine};
pub use interface::{
    PlaybackNotifier, SpeakTarget, SpeechEngine, SpeechError, SpeechParams, Utterance,
};

#[cfg(test)]
mod tests;
