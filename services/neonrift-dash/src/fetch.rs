//! Fetch adapter: GET a device path and normalize the outcome

use std::sync::Arc;

use serde_json::Value;

use crate::io::HttpClient;

/// Normalized outcome of a GET request.
///
/// `ok` reflects the HTTP status alone; whether the body parsed is carried
/// separately in `json`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub ok: bool,
    pub status: u16,
    pub json: Option<Value>,
    pub text: String,
}

impl FetchResult {
    pub fn from_response(status: u16, text: String) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            json: try_parse_json(&text),
            text,
        }
    }

    /// Panel content: pretty JSON when the body parsed, raw text otherwise
    pub fn display_body(&self) -> String {
        match &self.json {
            Some(json) => pretty(json),
            None => self.text.clone(),
        }
    }
}

/// Parse `text` as a JSON document.
///
/// A body that fails to parse, or that is the literal `null`, yields `None`.
pub fn try_parse_json(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            tracing::trace!("Body is not JSON: {}", e);
            None
        }
    }
}

/// Render JSON with two-space indentation.
///
/// Floats with no fractional part print as integers, so `1.0` and `1e2`
/// show as `1` and `100`.
pub fn pretty(value: &Value) -> String {
    let value = integral_floats(value);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Issues GET requests against one device
#[derive(Clone)]
pub struct FetchAdapter {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for FetchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchAdapter")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FetchAdapter {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a device path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// GET `path` and classify the response.
    ///
    /// HTTP error statuses and unparseable bodies come back as data; only a
    /// transport failure is an `Err`.
    pub async fn fetch_json(&self, path: &str) -> crate::Result<FetchResult> {
        let url = self.url_for(path);
        let response = self.http.get(&url).await?;
        let result = FetchResult::from_response(response.status, response.body);
        tracing::debug!(
            "Fetched {}: ok={} status={} json={}",
            path,
            result.ok,
            result.status,
            result.json.is_some()
        );
        Ok(result)
    }
}
