//! Models API surface.

use std::pin::Pin;
use std::sync::Arc;

use futures_util::stream::{self, Stream, TryStreamExt};
use genai_catalog_types::models::{ListModelsConfig, ListModelsResponse, Model};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::http_response::sdk_http_response_from_headers;

/// 按服务端顺序逐个产出模型的惰性流。
pub type ModelStream = Pin<Box<dyn Stream<Item = Result<Model>> + Send>>;

type Page = (Vec<Model>, Option<ListModelsConfig>);

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单页）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（单页，带配置）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let (mut result, headers) = self.get_json::<ListModelsResponse>(url).await?;
        result.sdk_http_response = Some(sdk_http_response_from_headers(&headers));
        Ok(result)
    }

    /// 以惰性流的形式列出所有模型（自动翻页）。
    #[must_use]
    pub fn stream(&self) -> ModelStream {
        self.stream_with_config(ListModelsConfig::default())
    }

    /// 以惰性流的形式列出所有模型（带配置，自动翻页）。
    ///
    /// 只有在上一页耗尽后才请求下一页；遇到第一个错误时产出该错误并结束。
    #[must_use]
    pub fn stream_with_config(&self, config: ListModelsConfig) -> ModelStream {
        let models = self.clone();
        let pages = stream::try_unfold(Some(config), move |cursor| {
            let models = models.clone();
            async move { models.fetch_page(cursor).await }
        });
        Box::pin(
            pages
                .map_ok(|page| stream::iter(page.into_iter().map(Ok::<Model, Error>)))
                .try_flatten(),
        )
    }

    /// 列出所有模型（自动翻页）。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    pub async fn all_with_config(&self, config: ListModelsConfig) -> Result<Vec<Model>> {
        self.stream_with_config(config).try_collect().await
    }

    /// 获取单个模型信息。
    pub async fn get(&self, model: impl Into<String>) -> Result<Model> {
        let url = build_model_get_url(&self.inner, &model.into())?;
        let (model, _) = self.get_json::<Model>(url).await?;
        Ok(model)
    }

    async fn fetch_page(&self, cursor: Option<ListModelsConfig>) -> Result<Option<Page>> {
        let Some(config) = cursor else {
            return Ok(None);
        };
        let response = self.list_with_config(config.clone()).await?;
        let next = response.next_page().map(|token| ListModelsConfig {
            page_token: Some(token.to_string()),
            ..config
        });
        let page = response.models.unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            models = page.len(),
            has_next_page = next.is_some(),
            "fetched model page"
        );
        Ok(Some((page, next)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<(T, reqwest::header::HeaderMap)> {
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApiError {
                status,
                message: api_error_message(&body),
            });
        }
        let headers = response.headers().clone();
        let body = response.text().await?;
        let value = serde_json::from_str::<T>(&body)?;
        Ok((value, headers))
    }
}

/// 提取 `{"error": {"message": ...}}` 中的消息；否则返回折叠为单行的原始响应体。
fn api_error_message(body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.to_string());
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_model_get_url(inner: &ClientInner, model: &str) -> Result<String> {
    let model = model.trim();
    if model.is_empty() || model == "models/" {
        return Err(Error::InvalidConfig {
            message: "Model name must not be empty".into(),
        });
    }
    let model = transform_model_name(model);
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    Ok(format!("{base}{version}/{model}"))
}

fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    add_list_query_params(format!("{base}{version}/models"), config)
}

fn add_list_query_params(url: String, config: &ListModelsConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(&url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &config.page_token {
            pairs.append_pair("pageToken", page_token);
        }
        if let Some(filter) = &config.filter {
            pairs.append_pair("filter", filter);
        }
        if let Some(query_base) = config.query_base {
            pairs.append_pair("queryBase", if query_base { "true" } else { "false" });
        }
    }
    // query_pairs_mut leaves a dangling `?` when nothing was appended.
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url.to_string())
}
