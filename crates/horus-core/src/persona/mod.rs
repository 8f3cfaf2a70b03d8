//! Persona domain module.
//!
//! A persona is a bundle of free-text system instructions plus an HTML
//! content template, used to steer the generative model's output style
//! and structure.

mod model;

pub use model::{PersonaConfig, PersonaScope};
