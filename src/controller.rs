//! Upload controller: owns the pending role and resume and drives one submission at a time

use crate::analysis::{AnalysisRequest, AnalysisResult, RequestState, Role};
use crate::client::AnalysisBackend;
use crate::error::{Result, SkillGapError};
use crate::input::ResumeFile;
use log::{debug, error, info};

pub const MISSING_FILE_MESSAGE: &str = "Please upload a resume first.";

pub struct UploadController<B: AnalysisBackend> {
    backend: B,
    file: Option<ResumeFile>,
    role: Role,
    state: RequestState,
}

impl<B: AnalysisBackend> UploadController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            file: None,
            role: Role::default(),
            state: RequestState::Idle,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Store the resume to upload. An error from a previous attempt is cleared.
    pub fn select_file(&mut self, file: ResumeFile) {
        debug!("Selected resume {}", file.file_name);
        self.file = Some(file);
        if matches!(self.state, RequestState::Error(_)) {
            self.state = RequestState::Idle;
        }
    }

    pub fn select_role(&mut self, role: Role) {
        debug!("Selected role {}", role);
        self.role = role;
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// First half of a submission.
    ///
    /// Without a file the state becomes the validation error and `None` is
    /// returned. Otherwise the state becomes Loading (dropping any previous
    /// error or result) and the request to send is returned.
    pub fn begin_submit(&mut self) -> Option<AnalysisRequest> {
        let Some(file) = self.file.clone() else {
            let err = SkillGapError::Validation(MISSING_FILE_MESSAGE.to_string());
            self.state = RequestState::Error(err.user_message());
            return None;
        };

        self.state = RequestState::Loading;
        debug!("Request state: {}", self.state.label());
        Some(AnalysisRequest::new(self.role, file))
    }

    /// Second half of a submission: leave Loading with the outcome.
    ///
    /// Overwrites the state unconditionally; the last outcome applied wins.
    pub fn complete(&mut self, outcome: Result<AnalysisResult>) {
        self.state = match outcome {
            Ok(result) => {
                info!(
                    "Analysis complete: skill match {}%, context score {}%",
                    result.skill_match_percentage, result.similarity_score
                );
                RequestState::Success(result)
            }
            Err(err) => {
                error!("Error analyzing resume: {}", err);
                RequestState::Error(err.user_message())
            }
        };
        debug!("Request state: {}", self.state.label());
    }

    /// Validate, send one request and record its outcome.
    pub async fn submit(&mut self) -> &RequestState {
        if let Some(request) = self.begin_submit() {
            let outcome = self.backend.analyze(request).await;
            self.complete(outcome);
        } else {
            debug!("Submission rejected: no resume selected");
        }
        &self.state
    }
}
