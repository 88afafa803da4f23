//! reqwestによるバックエンド呼び出し

use crate::config::Config;
use crate::error::{FreshTechError, Result};
use freshtech_common::{Backend, Endpoint, MultipartPayload};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// HTTPバックエンド
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FreshTechError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config, backend_url: String) -> Result<Self> {
        Self::new(backend_url, Duration::from_secs(config.timeout_seconds))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, endpoint: Endpoint, payload: &MultipartPayload) -> reqwest::Result<String> {
        let form = build_form(payload)?;
        let url = endpoint.url(&self.base_url);
        log::debug!("POST {} fields={:?}", url, payload.field_names());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}

/// リクエストごとにFormを組み立てる（reqwestのFormは使い回せない）
fn build_form(payload: &MultipartPayload) -> reqwest::Result<Form> {
    let mut form = Form::new();
    for part in payload.parts() {
        let file_part = Part::bytes(part.file.bytes.clone())
            .file_name(part.file.file_name.clone())
            .mime_str(&part.file.mime_type)?;
        form = form.part(part.field.clone(), file_part);
    }
    Ok(form)
}

impl Backend for HttpBackend {
    async fn post_multipart(
        &self,
        endpoint: Endpoint,
        payload: &MultipartPayload,
    ) -> freshtech_common::Result<String> {
        self.send(endpoint, payload)
            .await
            .map_err(|e| freshtech_common::Error::Transport(format!("{}: {}", endpoint, e)))
    }
}
