//! Pure projection of (report, location, UI state) into display content.

use celestial_core::location::Coordinates;
use celestial_oracle::domain::report::{ActionStory, AnalysisResult, LuckScope};
use serde::Serialize;

use super::elements::Element;
use super::presenter::PresenterState;

/// Latitude shown when the reading has no location.
pub const DEFAULT_LATITUDE: f64 = 30.6;
/// Longitude shown when the reading has no location.
pub const DEFAULT_LONGITUDE: f64 = 104.1;

/// Coordinate tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationTile {
    /// Rounded latitude.
    pub latitude: f64,
    /// Rounded longitude.
    pub longitude: f64,
    /// Whether the defaults stand in for a missing location.
    pub is_default: bool,
}

/// Weather tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherTile {
    /// Weather description.
    pub description: String,
    /// Temperature text.
    pub temp: String,
}

/// One bar of the element chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementBar {
    /// Which element.
    pub element: Element,
    /// Single-character label.
    pub label: &'static str,
    /// Weight as reported.
    pub value: f64,
    /// Bar colour.
    pub color: &'static str,
    /// Whether this bar is hovered.
    pub highlighted: bool,
}

/// A titled narrative card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeCard {
    /// Card heading.
    pub title: String,
    /// Optional tag under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Card body.
    pub body: String,
}

/// Action list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSummary {
    /// One-based position.
    pub position: usize,
    /// Action title.
    pub title: String,
    /// Teaser line.
    pub short_desc: String,
}

/// The luck block for the selected tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckBlock {
    /// Selected scope.
    pub scope: LuckScope,
    /// Scope label.
    pub label: String,
    /// Things that suit the scope.
    pub suit: Vec<String>,
    /// Things to avoid.
    pub avoid: Vec<String>,
    /// The recommended actions.
    pub actions: Vec<ActionSummary>,
    /// Closing affirmation.
    pub affirmation: String,
    /// Scope narrative.
    pub narrative: String,
}

/// Detail overlay for one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDetail {
    /// Action title.
    pub title: String,
    /// Energy tag.
    pub energy_cost: String,
    /// Visual metaphor.
    pub visual_metaphor: String,
    /// Narrative paragraphs.
    pub paragraphs: Vec<String>,
}

/// Everything a front end needs to draw the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// Coordinate tile.
    pub location: LocationTile,
    /// Weather tile.
    pub weather: WeatherTile,
    /// Environmental resonance quote.
    pub resonance: String,
    /// Element bars in fixed order.
    pub element_bars: Vec<ElementBar>,
    /// Caption under the bars.
    pub element_caption: String,
    /// Element narrative.
    pub element_narrative: String,
    /// Zodiac card.
    pub zodiac: NarrativeCard,
    /// Archetype card.
    pub archetype: NarrativeCard,
    /// Selected luck block.
    pub luck: LuckBlock,
    /// Open detail overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ActionDetail>,
}

/// Nearest integer, with halves going up: `-33.5` becomes `-33`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn location_tile(location: Option<&Coordinates>) -> LocationTile {
    match location {
        Some(coords) => LocationTile {
            latitude: round_half_up(coords.latitude),
            longitude: round_half_up(coords.longitude),
            is_default: false,
        },
        None => LocationTile {
            latitude: round_half_up(DEFAULT_LATITUDE),
            longitude: round_half_up(DEFAULT_LONGITUDE),
            is_default: true,
        },
    }
}

fn element_caption(report: &AnalysisResult, hovered: Option<Element>) -> String {
    match hovered {
        Some(element) => {
            let detail = element.detail();
            format!("{} {}", detail.icon, detail.description)
        }
        None => report.weather_context.elemental_shift.clone(),
    }
}

fn luck_block(report: &AnalysisResult, scope: LuckScope) -> LuckBlock {
    let luck = report.luck(scope);
    LuckBlock {
        scope,
        label: luck.label.clone(),
        suit: luck.suit.clone(),
        avoid: luck.avoid.clone(),
        actions: luck
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| ActionSummary {
                position: i + 1,
                title: action.title.clone(),
                short_desc: action.short_desc.clone(),
            })
            .collect(),
        affirmation: luck.affirmation.clone(),
        narrative: luck.narrative.clone(),
    }
}

fn action_detail(action: &ActionStory) -> ActionDetail {
    ActionDetail {
        title: action.title.clone(),
        energy_cost: action.energy_cost.clone(),
        visual_metaphor: action.visual_metaphor.clone(),
        paragraphs: action.paragraphs().map(str::to_owned).collect(),
    }
}

/// Projects the report and UI state into display content.
#[must_use]
pub fn render(
    report: &AnalysisResult,
    location: Option<&Coordinates>,
    state: &PresenterState,
) -> ReportView {
    let hovered = state.hovered();
    ReportView {
        location: location_tile(location),
        weather: WeatherTile {
            description: report.weather_context.description.clone(),
            temp: report.weather_context.temp.clone(),
        },
        resonance: report.environmental_resonance.clone(),
        element_bars: Element::ALL
            .iter()
            .map(|&element| {
                let detail = element.detail();
                ElementBar {
                    element,
                    label: detail.label,
                    value: element.weight(&report.bazi_elements),
                    color: detail.color,
                    highlighted: hovered == Some(element),
                }
            })
            .collect(),
        element_caption: element_caption(report, hovered),
        element_narrative: report.bazi_narrative.clone(),
        zodiac: NarrativeCard {
            title: report.zodiac.clone(),
            tag: None,
            body: report.zodiac_story.clone(),
        },
        archetype: NarrativeCard {
            title: report.human_design.clone(),
            tag: Some(format!("策略：{}", report.human_strategy)),
            body: report.human_design_story.clone(),
        },
        luck: luck_block(report, state.tab()),
        detail: state.open_action().map(action_detail),
    }
}
