use clap::Parser;

use genai_catalog::types::models::{ListModelsConfig, GENERATE_CONTENT};
use genai_catalog::{Client, Result};

/// List the models available to an API key that support a generation method.
#[derive(Parser)]
#[command(name = "list-models", version)]
pub struct Cli {
    /// API key; falls back to `GOOGLE_API_KEY` when unset.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Base URL; falls back to `GEMINI_BASE_URL` when unset or blank.
    #[arg(long, env = "GENAI_BASE_URL")]
    pub base_url: Option<String>,
    #[arg(long, env = "GENAI_API_VERSION")]
    pub api_version: Option<String>,
    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,
    #[arg(long, value_name = "N")]
    pub page_size: Option<i32>,
    /// Capability a model must declare to be printed.
    #[arg(long, default_value = GENERATE_CONTENT)]
    pub method: String,
    /// Exit with status 1 when listing fails.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// 根据命令行参数构建客户端。
    ///
    /// # Errors
    /// 当 API Key 缺失或客户端配置无效时返回错误。
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(api_key) = self
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
        {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = self.resolve_base_url() {
            builder = builder.base_url(base_url);
        }
        if let Some(api_version) = non_blank(self.api_version.as_deref()) {
            builder = builder.api_version(api_version);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.clone());
        }
        builder.build()
    }

    /// `--base-url` / `GENAI_BASE_URL`，其次 `GEMINI_BASE_URL`；空白值忽略。
    fn resolve_base_url(&self) -> Option<String> {
        non_blank(self.base_url.as_deref())
            .map(ToString::to_string)
            .or_else(|| {
                std::env::var("GEMINI_BASE_URL")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
            })
    }

    #[must_use]
    pub fn list_config(&self) -> ListModelsConfig {
        ListModelsConfig {
            page_size: self.page_size,
            ..Default::default()
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
