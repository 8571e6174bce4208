//! Analysis backend access
//! The seam between the upload controller and the remote scoring service

pub mod http;

use crate::analysis::{AnalysisRequest, AnalysisResponse, AnalysisResult};
use crate::error::{Result, SkillGapError};
use std::future::Future;

pub use http::HttpBackend;

pub const UPLOAD_ENDPOINT: &str = "/upload";
pub const HEALTH_ENDPOINT: &str = "/health";

/// Something that can score a resume against a role.
pub trait AnalysisBackend {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

/// Map an `/upload` response to a result or one of the request failure kinds.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<AnalysisResult> {
    if !(200..300).contains(&status) {
        let detail = AnalysisResponse::from_json(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.trim().is_empty());
        return Err(SkillGapError::HttpStatus { status, detail });
    }

    AnalysisResponse::from_json(body)?.into_result()
}
