//! Wire types for the Gemini model catalog.

pub mod http;
pub mod models;
