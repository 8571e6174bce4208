//! Report wrapping a successful analysis with the context it was produced in

use crate::analysis::{AnalysisResult, Role};
use crate::output::render::{render_result, ResultView};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub role: Role,
    pub resume_file: String,
    pub backend_url: String,
    pub generated_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(
        role: Role,
        resume_file: impl Into<String>,
        backend_url: impl Into<String>,
        result: AnalysisResult,
    ) -> Self {
        Self {
            role,
            resume_file: resume_file.into(),
            backend_url: backend_url.into(),
            generated_at: Utc::now(),
            result,
        }
    }

    pub fn view(&self) -> ResultView {
        render_result(&self.result)
    }

    pub fn generated_at_display(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}
