//! Core domain layer of the Horus content-generation studio.
//!
//! Holds the domain models (personas, profiles, API keys, fonts, articles),
//! the built-in template catalog, and the protocol composer that assembles
//! the instruction payload for the generative model. No I/O happens here;
//! storage and network seams live in `horus-infrastructure`.

pub mod api_key;
pub mod article;
pub mod composer;
pub mod config;
pub mod error;
pub mod font;
pub mod persona;
pub mod profile;
pub mod settings;
pub mod template;

// Re-export common error type
pub use error::HorusError;
pub use settings::StudioSettings;
