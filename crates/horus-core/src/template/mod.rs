//! Built-in template catalog.
//!
//! A static, read-only library of named personas, input protocols, and HTML
//! layout templates shipped with the studio. The catalog is defined entirely
//! at build time; there is no runtime creation or deletion.

mod catalog;
mod model;

pub use catalog::{all, find, of_kind};
pub use model::{HorusTemplate, TemplateKind};
