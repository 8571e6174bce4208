//! HTTP backend client built on reqwest

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::client::{interpret_response, AnalysisBackend, HEALTH_ENDPOINT, UPLOAD_ENDPOINT};
use crate::error::{Result, SkillGapError};
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Without a timeout the transport's own defaults apply.
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(SkillGapError::Configuration(
                "Backend base URL is not set".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            SkillGapError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ping the backend's health endpoint and return its reply text.
    pub async fn health(&self) -> Result<String> {
        let url = self.endpoint(HEALTH_ENDPOINT);
        debug!("Checking backend health: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(SkillGapError::HttpStatus {
                status: status.as_u16(),
                detail: None,
            })
        }
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.endpoint(UPLOAD_ENDPOINT);
        let mime = request.file.mime_type();

        let file_part = Part::bytes(request.file.bytes)
            .file_name(request.file.file_name.clone())
            .mime_str(mime)
            .map_err(|e| SkillGapError::InvalidInput(format!("Failed to build upload: {}", e)))?;

        let form = Form::new()
            .part("file", file_part)
            .text("role", request.role.as_str());

        info!(
            "Uploading {} for role '{}' to {}",
            request.file.file_name, request.role, url
        );

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            // A failed body read must not hide the status
            let body = response.bytes().await.unwrap_or_default();
            warn!(
                "Analysis backend returned {}: {}",
                status,
                String::from_utf8_lossy(&body)
            );
            return interpret_response(status.as_u16(), &body);
        }

        let body = response.bytes().await?;
        interpret_response(status.as_u16(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let backend = HttpBackend::new("http://localhost:8080/", None).unwrap();
        assert_eq!(backend.endpoint(UPLOAD_ENDPOINT), "http://localhost:8080/upload");
        assert_eq!(backend.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = HttpBackend::new("   ", Some(5)).err().unwrap();
        assert!(matches!(err, SkillGapError::Configuration(_)));
    }
}
