//! The generated report and its parts.
//!
//! Field names serialize in camelCase because they double as the wire
//! contract with the narrative service.

use celestial_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of recommended actions every luck analysis carries.
pub const ACTIONS_PER_SCOPE: usize = 3;

/// One recommended ritual or activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStory {
    /// Short title.
    pub title: String,
    /// One-line teaser.
    pub short_desc: String,
    /// Multi-paragraph story; paragraphs are separated by `\n`.
    pub full_narrative: String,
    /// Image-like description of the action.
    pub visual_metaphor: String,
    /// How the action shifts the subject's energy.
    pub energy_cost: String,
}

impl ActionStory {
    /// The narrative split into its paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.full_narrative.split('\n')
    }
}

/// Guidance for one time scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckAnalysis {
    /// Scope label as shown to the user.
    pub label: String,
    /// Things that suit the scope.
    pub suit: Vec<String>,
    /// Things to avoid.
    pub avoid: Vec<String>,
    /// Exactly three recommended actions.
    pub actions: Vec<ActionStory>,
    /// Closing affirmation for the scope.
    pub affirmation: String,
    /// Narrative summary for the scope.
    pub narrative: String,
}

/// Relative weights of the five elements, each conceptually a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveElements {
    /// Wood weight.
    pub wood: f64,
    /// Fire weight.
    pub fire: f64,
    /// Earth weight.
    pub earth: f64,
    /// Metal weight.
    pub metal: f64,
    /// Water weight.
    pub water: f64,
}

impl FiveElements {
    fn all(&self) -> [f64; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }
}

/// Inferred local weather and its effect on the element balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherContext {
    /// Temperature text, e.g. "18°C".
    pub temp: String,
    /// Short weather description.
    pub description: String,
    /// How the weather shifts the element balance.
    pub elemental_shift: String,
}

/// Time scope of a luck analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckScope {
    /// Today.
    #[default]
    Day,
    /// This week.
    Week,
    /// This month.
    Month,
}

impl LuckScope {
    /// All scopes in display order.
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "今日",
            Self::Week => "本周",
            Self::Month => "本月",
        }
    }
}

/// The complete report shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Zodiac label.
    pub zodiac: String,
    /// Zodiac narrative.
    pub zodiac_story: String,
    /// Five-element balance.
    pub bazi_elements: FiveElements,
    /// Five-element narrative.
    pub bazi_narrative: String,
    /// Personality archetype label.
    pub human_design: String,
    /// Archetype strategy.
    pub human_strategy: String,
    /// Archetype narrative.
    pub human_design_story: String,
    /// Guidance for today.
    pub daily_luck: LuckAnalysis,
    /// Guidance for this week.
    pub weekly_luck: LuckAnalysis,
    /// Guidance for this month.
    pub monthly_luck: LuckAnalysis,
    /// Affirmation / mission statement.
    pub soul_mission: String,
    /// How the surroundings resonate with the subject.
    pub environmental_resonance: String,
    /// Overall harmony score.
    pub harmony_score: f64,
    /// Weather context.
    pub weather_context: WeatherContext,
}

impl AnalysisResult {
    /// The luck analysis for `scope`.
    #[must_use]
    pub fn luck(&self, scope: LuckScope) -> &LuckAnalysis {
        match scope {
            LuckScope::Day => &self.daily_luck,
            LuckScope::Week => &self.weekly_luck,
            LuckScope::Month => &self.monthly_luck,
        }
    }

    /// Checks the invariants serde cannot express: action counts and
    /// finite numbers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first violation found.
    pub fn validate(&self) -> Result<(), DomainError> {
        for scope in LuckScope::ALL {
            let count = self.luck(scope).actions.len();
            if count != ACTIONS_PER_SCOPE {
                return Err(DomainError::Validation(format!(
                    "{scope:?} luck has {count} actions, expected {ACTIONS_PER_SCOPE}"
                )));
            }
        }
        if !self.harmony_score.is_finite() {
            return Err(DomainError::Validation(
                "harmony score is not finite".to_owned(),
            ));
        }
        if self.bazi_elements.all().iter().any(|w| !w.is_finite()) {
            return Err(DomainError::Validation(
                "element weight is not finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_test_support::valid_report_json;

    fn fixture() -> AnalysisResult {
        serde_json::from_value(valid_report_json()).unwrap()
    }

    #[test]
    fn test_fixture_deserializes_and_validates() {
        let report = fixture();

        assert!(report.validate().is_ok());
        assert_eq!(report.daily_luck.label, "今日");
        assert!((report.harmony_score - 87.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_luck_selects_matching_scope() {
        let report = fixture();

        assert_eq!(report.luck(LuckScope::Day).label, "今日");
        assert_eq!(report.luck(LuckScope::Week).label, "本周");
        assert_eq!(report.luck(LuckScope::Month).label, "本月");
    }

    #[test]
    fn test_validate_rejects_wrong_action_count() {
        let mut report = fixture();
        report.weekly_luck.actions.pop();

        match report.validate() {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("Week")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_score() {
        let mut report = fixture();
        report.harmony_score = f64::NAN;

        assert!(report.validate().is_err());
    }

    #[test]
    fn test_paragraphs_split_on_line_breaks() {
        let report = fixture();
        let paragraphs: Vec<&str> = report.daily_luck.actions[0].paragraphs().collect();

        assert_eq!(paragraphs, vec!["第一段。", "第二段。"]);
    }

    #[test]
    fn test_scope_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(LuckScope::Month).unwrap(),
            serde_json::json!("month")
        );
    }
}
