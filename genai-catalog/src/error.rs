//! Error definitions for the catalog client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// 错误分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 凭据或客户端配置无效。
    Configuration,
    /// 网络不可达、超时或连接失败。
    Transport,
    /// 服务端返回了应用层错误（非 2xx）。
    Service,
    /// 响应体不符合预期结构。
    Shape,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig { .. } => ErrorKind::Configuration,
            Self::HttpClient { .. } => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Service,
            Self::Serialization { .. } => ErrorKind::Shape,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
