use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::{json, Value};
use std::io::{self, Write};

/// Default endpoint of a locally running delayed-notifier server.
pub const DEFAULT_API_URL: &str = "http://localhost:8099/notify";

/// One-shot request dispatcher for the notify API.
///
/// Each call performs a single HTTP request and renders the outcome into
/// the injected output sink: the response JSON pretty-printed with 2-space
/// indentation on success, or a single `Ошибка: <message>` line when the
/// request could not complete or the body was not JSON. A non-2xx response
/// with a JSON body is not an error; its body is rendered like any other.
pub struct Dispatcher<W: Write> {
    http: reqwest::Client,
    base_url: String,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(base_url: impl Into<String>, out: W) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            out,
        }
    }

    /// Schedule a notification: `POST {base}` with a JSON body built from
    /// the three form fields.
    pub async fn create(&mut self, recipient_id: i64, date: &str, text: &str) -> io::Result<()> {
        let body = json!({
            "recipient_id": recipient_id,
            "date": date,
            "text": text,
        });
        self.dispatch(None, Method::POST, Some(body)).await
    }

    /// Query delivery status: `GET {base}/{id}`. The id is opaque and only
    /// used to build the path segment.
    pub async fn status(&mut self, id: &str) -> io::Result<()> {
        self.dispatch(Some(id), Method::GET, None).await
    }

    /// Cancel a notification: `DELETE {base}/{id}`.
    pub async fn delete(&mut self, id: &str) -> io::Result<()> {
        self.dispatch(Some(id), Method::DELETE, None).await
    }

    /// Performs one request and writes the rendered outcome. Stateless
    /// between calls; failures are terminal for the single request.
    pub async fn dispatch(
        &mut self,
        path: Option<&str>,
        method: Method,
        body: Option<Value>,
    ) -> io::Result<()> {
        let url = match path {
            Some(suffix) => format!("{}/{}", self.base_url, suffix),
            None => self.base_url.clone(),
        };

        match self.perform(&url, method, body).await {
            Ok(rendered) => writeln!(self.out, "{rendered}"),
            Err(message) => writeln!(self.out, "Ошибка: {message}"),
        }
    }

    async fn perform(
        &self,
        url: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<String, String> {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let data: Value = response.json().await.map_err(|e| e.to_string())?;

        serde_json::to_string_pretty(&data).map_err(|e| e.to_string())
    }
}
