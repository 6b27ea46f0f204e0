//! Extractors for each kind of LLM response the assistant consumes.

pub mod controls;
pub(crate) mod helpers;
pub mod intent;
pub mod matrix;
pub mod risks;
