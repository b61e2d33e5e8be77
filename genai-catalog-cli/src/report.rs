//! Filter-and-report over the model catalog.

use std::io::{self, Write};

use futures_util::{Stream, StreamExt};
use genai_catalog::types::models::Model;
use genai_catalog::Error;

use crate::cli::Cli;

/// 首行输出。
pub const HEADER: &str = "Checking available models...";

/// 一次运行的终态。
#[derive(Debug)]
pub enum Outcome {
    /// 列表完整遍历；`printed` 为输出的模型行数。
    Completed { printed: usize },
    /// 已输出 `Error:` 行。
    Failed(Error),
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// 输出首行，配置客户端并报告支持 `cli.method` 的模型。
///
/// 配置、请求与遍历中的任何错误都会以一行 `Error: <message>` 写入 `out`，
/// 已输出的模型行保持不变。
///
/// # Errors
/// 仅在写入 `out` 失败时返回错误。
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "{HEADER}")?;
    let client = match cli.build_client() {
        Ok(client) => client,
        Err(err) => return fail(out, err),
    };
    tracing::debug!(method = %cli.method, "listing models");
    let models = client.models().stream_with_config(cli.list_config());
    report(models, &cli.method, out).await
}

/// 遍历模型流，按服务端顺序为每个支持 `method` 的模型输出 `- <name>`。
///
/// 没有名称的模型会被跳过。遇到第一个错误时输出 `Error:` 行并停止。
///
/// # Errors
/// 仅在写入 `out` 失败时返回错误。
pub async fn report<S, W>(models: S, method: &str, out: &mut W) -> io::Result<Outcome>
where
    S: Stream<Item = genai_catalog::Result<Model>>,
    W: Write,
{
    futures_util::pin_mut!(models);
    let mut printed = 0;
    while let Some(item) = models.next().await {
        let model = match item {
            Ok(model) => model,
            Err(err) => return fail(out, err),
        };
        if !model.supports(method) {
            continue;
        }
        if let Some(name) = model.name.as_deref() {
            writeln!(out, "- {name}")?;
            printed += 1;
        }
    }
    tracing::debug!(printed, "model listing completed");
    Ok(Outcome::Completed { printed })
}

fn fail<W: Write>(out: &mut W, err: Error) -> io::Result<Outcome> {
    tracing::debug!(kind = ?err.kind(), error = %err, "model listing failed");
    writeln!(out, "Error: {err}")?;
    Ok(Outcome::Failed(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use genai_catalog::types::models::GENERATE_CONTENT;

    fn model(name: &str, methods: &[&str]) -> Model {
        Model {
            name: Some(name.to_string()),
            supported_generation_methods: Some(methods.iter().map(ToString::to_string).collect()),
            ..Model::default()
        }
    }

    async fn render(items: Vec<genai_catalog::Result<Model>>, method: &str) -> (String, Outcome) {
        let mut out = Vec::new();
        let outcome = report(stream::iter(items), method, &mut out).await.unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[tokio::test]
    async fn prints_only_models_with_method() {
        let (text, outcome) = render(
            vec![
                Ok(model("model-a", &["generateContent"])),
                Ok(model("model-b", &["embedContent"])),
                Ok(model("model-c", &["generateContent", "countTokens"])),
            ],
            GENERATE_CONTENT,
        )
        .await;
        assert_eq!(text, "- model-a\n- model-c\n");
        assert!(matches!(outcome, Outcome::Completed { printed: 2 }));
    }

    #[tokio::test]
    async fn empty_stream_prints_nothing() {
        let (text, outcome) = render(Vec::new(), GENERATE_CONTENT).await;
        assert!(text.is_empty());
        assert!(matches!(outcome, Outcome::Completed { printed: 0 }));
    }

    #[tokio::test]
    async fn unnamed_and_capability_less_models_are_skipped() {
        let unnamed = Model {
            supported_generation_methods: Some(vec![GENERATE_CONTENT.into()]),
            ..Model::default()
        };
        let bare = Model {
            name: Some("model-x".into()),
            ..Model::default()
        };
        let (text, _) = render(vec![Ok(unnamed), Ok(bare)], GENERATE_CONTENT).await;
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn custom_method_filter() {
        let (text, _) = render(
            vec![
                Ok(model("model-a", &["generateContent"])),
                Ok(model("model-b", &["embedContent"])),
            ],
            "embedContent",
        )
        .await;
        assert_eq!(text, "- model-b\n");
    }

    #[tokio::test]
    async fn error_keeps_earlier_lines_and_stops() {
        let (text, outcome) = render(
            vec![
                Ok(model("model-a", &["generateContent"])),
                Err(Error::ApiError {
                    status: 503,
                    message: "unavailable".into(),
                }),
                Ok(model("model-c", &["generateContent"])),
            ],
            GENERATE_CONTENT,
        )
        .await;
        assert_eq!(
            text,
            "- model-a\nError: API error (status 503): unavailable\n"
        );
        assert!(outcome.is_failure());
    }
}
