//! Request lifecycle

use crate::analysis::result::AnalysisResult;

/// Lifecycle of the most recent submission.
///
/// Loading carries no stale error or result; entering it drops both.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(AnalysisResult),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Error(_) => "error",
            RequestState::Success(_) => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_variant() {
        let err = RequestState::Error("boom".to_string());
        assert_eq!(err.error_message(), Some("boom"));
        assert!(err.result().is_none());
        assert!(!err.is_loading());

        assert!(RequestState::Loading.is_loading());
        assert_eq!(RequestState::default(), RequestState::Idle);
        assert_eq!(err.label(), "error");
        assert_eq!(RequestState::Loading.label(), "loading");
    }
}
