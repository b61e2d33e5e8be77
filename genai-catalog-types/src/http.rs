use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 保留的 HTTP 响应信息（SDK 侧填充，不属于 API 响应体）。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// Response headers; repeated headers are joined with `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl HttpResponse {
    /// 按名称读取响应头（大小写不敏感）。
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }
}
