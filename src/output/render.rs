//! Pure view model for an analysis result: progress indicators and skill badges

use crate::analysis::AnalysisResult;
use serde::Serialize;

pub const SKILL_MATCH_LABEL: &str = "Skill Match";
pub const CONTEXT_SCORE_LABEL: &str = "Context Score";
pub const PRESENT_SKILLS_TITLE: &str = "Present Skills";
pub const MISSING_SKILLS_TITLE: &str = "Missing Skills";
pub const NONE_DETECTED: &str = "None detected";
pub const NONE_MISSING: &str = "None missing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Match,
    Similarity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressIndicator {
    pub label: &'static str,
    pub kind: IndicatorKind,
    pub value: f64,
    /// Filled width as a percentage of the full bar; equal to `value`.
    pub width_percent: f64,
}

impl ProgressIndicator {
    fn new(label: &'static str, kind: IndicatorKind, value: f64) -> Self {
        Self {
            label,
            kind,
            value,
            width_percent: value,
        }
    }

    /// Number of filled cells in a bar `width` cells wide.
    pub fn filled_cells(&self, width: usize) -> usize {
        let ratio = (self.width_percent / 100.0).clamp(0.0, 1.0);
        if ratio.is_nan() {
            return 0;
        }
        (ratio * width as f64).round() as usize
    }

    /// Value as shown next to the bar: integers without a fraction.
    pub fn display_value(&self) -> String {
        format_percentage(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Present,
    Missing,
}

impl Presence {
    pub fn marker(&self) -> &'static str {
        match self {
            Presence::Present => "✓",
            Presence::Missing => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Badge {
    Skill { name: String, presence: Presence },
    Placeholder { text: &'static str },
}

impl Badge {
    pub fn text(&self) -> &str {
        match self {
            Badge::Skill { name, .. } => name.as_str(),
            Badge::Placeholder { text } => *text,
        }
    }

    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Badge::Skill { presence, .. } => Some(presence.marker()),
            Badge::Placeholder { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub presence: Presence,
    pub badges: Vec<Badge>,
}

impl SkillGroup {
    fn build(title: &'static str, presence: Presence, skills: &[String]) -> Self {
        let badges = if skills.is_empty() {
            let text = match presence {
                Presence::Present => NONE_DETECTED,
                Presence::Missing => NONE_MISSING,
            };
            vec![Badge::Placeholder { text }]
        } else {
            skills
                .iter()
                .map(|name| Badge::Skill {
                    name: name.clone(),
                    presence,
                })
                .collect()
        };

        Self {
            title,
            presence,
            badges,
        }
    }
}

/// Everything a formatter needs to draw one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub indicators: Vec<ProgressIndicator>,
    pub groups: Vec<SkillGroup>,
}

/// Build the view for a result; no result renders nothing.
pub fn render(result: Option<&AnalysisResult>) -> Option<ResultView> {
    result.map(render_result)
}

pub fn render_result(result: &AnalysisResult) -> ResultView {
    ResultView {
        indicators: vec![
            ProgressIndicator::new(
                SKILL_MATCH_LABEL,
                IndicatorKind::Match,
                result.skill_match_percentage,
            ),
            ProgressIndicator::new(
                CONTEXT_SCORE_LABEL,
                IndicatorKind::Similarity,
                result.similarity_score,
            ),
        ],
        groups: vec![
            SkillGroup::build(PRESENT_SKILLS_TITLE, Presence::Present, &result.present_skills),
            SkillGroup::build(MISSING_SKILLS_TITLE, Presence::Missing, &result.missing_skills),
        ],
    }
}

pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let trimmed = format!("{:.2}", value);
        trimmed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(present: &[&str], missing: &[&str]) -> AnalysisResult {
        AnalysisResult {
            skill_match_percentage: 80.0,
            similarity_score: 65.0,
            present_skills: present.iter().map(|s| s.to_string()).collect(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_absent_result_renders_nothing() {
        assert!(render(None).is_none());
    }

    #[test]
    fn test_present_result_matches_direct_view() {
        let r = result(&["Python"], &[]);
        assert_eq!(render(Some(&r)), Some(render_result(&r)));
    }

    #[test]
    fn test_sample_result_layout() {
        let view = render(Some(&result(&["Python"], &["Docker"]))).unwrap();

        assert_eq!(view.indicators.len(), 2);
        assert_eq!(view.indicators[0].label, "Skill Match");
        assert_eq!(view.indicators[0].width_percent, 80.0);
        assert_eq!(view.indicators[1].label, "Context Score");
        assert_eq!(view.indicators[1].width_percent, 65.0);

        assert_eq!(
            view.groups[0].badges,
            vec![Badge::Skill { name: "Python".to_string(), presence: Presence::Present }]
        );
        assert_eq!(
            view.groups[1].badges,
            vec![Badge::Skill { name: "Docker".to_string(), presence: Presence::Missing }]
        );
        assert_eq!(view.groups[0].badges[0].marker(), Some("✓"));
        assert_eq!(view.groups[1].badges[0].marker(), Some("✗"));
    }

    #[test]
    fn test_width_tracks_every_percentage() {
        for p in 0..=100 {
            let mut r = result(&[], &[]);
            r.skill_match_percentage = p as f64;
            r.similarity_score = p as f64 / 2.0;
            let view = render(Some(&r)).unwrap();
            assert_eq!(view.indicators[0].width_percent, p as f64);
            assert_eq!(view.indicators[1].width_percent, p as f64 / 2.0);
        }
    }

    #[test]
    fn test_empty_lists_render_single_placeholder() {
        let view = render(Some(&result(&[], &[]))).unwrap();

        assert_eq!(view.groups[0].badges, vec![Badge::Placeholder { text: "None detected" }]);
        assert_eq!(view.groups[1].badges, vec![Badge::Placeholder { text: "None missing" }]);
        assert_eq!(view.groups[0].badges[0].marker(), None);
    }

    #[test]
    fn test_badges_keep_order() {
        let view = render(Some(&result(&["Java", "Git", "AWS"], &["Docker"]))).unwrap();
        let names: Vec<&str> = view.groups[0].badges.iter().map(|b| b.text()).collect();
        assert_eq!(names, vec!["Java", "Git", "AWS"]);
    }

    #[test]
    fn test_filled_cells_are_clamped() {
        let mut r = result(&[], &[]);
        r.skill_match_percentage = 50.0;
        r.similarity_score = 140.0;
        let view = render(Some(&r)).unwrap();

        assert_eq!(view.indicators[0].filled_cells(40), 20);
        assert_eq!(view.indicators[1].filled_cells(40), 40);
    }

    #[test]
    fn test_display_value_trims_fraction() {
        assert_eq!(format_percentage(80.0), "80");
        assert_eq!(format_percentage(66.67), "66.67");
        assert_eq!(format_percentage(12.5), "12.5");
    }
}
