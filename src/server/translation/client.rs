use std::future::Future;

use serde_json::Value;

use crate::server::error::translation::TranslationError;

/// External machine-translation capability.
pub trait Translator: Send + Sync + 'static {
    /// Translates `text` from `source` to `target` language.
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl Future<Output = Result<String, TranslationError>> + Send;
}

/// Translator backed by the public Google Translate `translate_a/single` endpoint.
///
/// The endpoint answers with a nested JSON array whose first element lists translated
/// segments; the first item of every segment is the translated text.
pub struct HttpTranslator {
    http_client: reqwest::Client,
    api_url: String,
}

impl HttpTranslator {
    pub fn new(http_client: reqwest::Client, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let body: Value = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
fn parse_response(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse(truncate(body)))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::MalformedResponse(truncate(body)));
    }

    Ok(translated)
}

fn truncate(body: &Value) -> String {
    body.to_string().chars().take(200).collect()
}
