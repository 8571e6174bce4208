//! Outbound analysis request

use crate::analysis::role::Role;
use crate::input::resume_file::ResumeFile;

/// One submission: built fresh by the controller and consumed by the backend.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub role: Role,
    pub file: ResumeFile,
}

impl AnalysisRequest {
    pub fn new(role: Role, file: ResumeFile) -> Self {
        Self { role, file }
    }
}
