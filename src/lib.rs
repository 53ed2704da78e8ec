//! PromptLens - reverse-engineer generation prompts from images
//!
//! A desktop tool that takes an image the user picked or dropped, sends it
//! to a multimodal model, and renders the structured breakdown (generation
//! prompt, artistic style, composition, keywords) for reuse.

pub mod ai;
pub mod controller;
pub mod error;
pub mod intake;
pub mod models;
pub mod prompts;
pub mod ui;

pub use error::{Error, Result};
