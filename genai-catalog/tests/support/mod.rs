#![allow(dead_code)]

use serde_json::{json, Value};

use genai_catalog::Client;

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn model_json(name: &str, methods: &[&str]) -> Value {
    json!({
        "name": name,
        "supportedGenerationMethods": methods,
    })
}
