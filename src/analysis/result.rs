//! Analysis results returned by the backend

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};

/// Skill match breakdown for one resume against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Share of the role's required skills found in the resume (0-100)
    pub skill_match_percentage: f64,

    /// Semantic alignment between resume text and role description (0-100)
    pub similarity_score: f64,

    #[serde(default)]
    pub present_skills: Vec<String>,

    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// Wire shape of the `/upload` response body.
///
/// The backend reuses one object for success and failure: either the score
/// fields are filled, or `error` is set. Skill lists may be `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    pub skill_match_percentage: Option<f64>,
    pub similarity_score: Option<f64>,
    pub present_skills: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn from_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| SkillGapError::Decode(e.to_string()))
    }

    /// Resolve a 2xx body into a result, or the application error it carries.
    ///
    /// A blank `error` does not signal a failure.
    pub fn into_result(self) -> Result<AnalysisResult> {
        if let Some(error) = self.error.filter(|e| !e.trim().is_empty()) {
            return Err(SkillGapError::Application(error));
        }

        let skill_match_percentage = self.skill_match_percentage.ok_or_else(|| {
            SkillGapError::Decode("missing field `skill_match_percentage`".to_string())
        })?;
        let similarity_score = self.similarity_score.ok_or_else(|| {
            SkillGapError::Decode("missing field `similarity_score`".to_string())
        })?;

        Ok(AnalysisResult {
            skill_match_percentage,
            similarity_score,
            present_skills: self.present_skills.unwrap_or_default(),
            missing_skills: self.missing_skills.unwrap_or_default(),
        })
    }
}
