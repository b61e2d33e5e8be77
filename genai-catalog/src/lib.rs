//! Async client for the Gemini model catalog.

pub mod client;
pub mod error;
mod http_response;
pub mod models;

#[cfg(test)]
mod test_support;

pub use genai_catalog_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, ErrorKind, Result};
