//! Local UI state of a displayed report.

use celestial_oracle::domain::report::{ActionStory, AnalysisResult, LuckScope};

use super::elements::Element;

/// Tab, hover, and detail-overlay state. Every transition is local; none of
/// them asks for new data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterState {
    tab: LuckScope,
    hovered: Option<Element>,
    open_action: Option<ActionStory>,
}

impl PresenterState {
    /// Day tab, nothing hovered, no overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected time scope.
    #[must_use]
    pub fn tab(&self) -> LuckScope {
        self.tab
    }

    /// Hovered element, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<Element> {
        self.hovered
    }

    /// Action shown in the detail overlay, if any.
    #[must_use]
    pub fn open_action(&self) -> Option<&ActionStory> {
        self.open_action.as_ref()
    }

    /// Shows another time scope.
    pub fn select_tab(&mut self, tab: LuckScope) {
        self.tab = tab;
    }

    /// Marks `element` as hovered.
    pub fn hover(&mut self, element: Element) {
        self.hovered = Some(element);
    }

    /// Clears the hover.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Opens the detail overlay for action `index` of the current tab.
    /// Returns `false` and changes nothing when the index is out of range.
    pub fn open(&mut self, report: &AnalysisResult, index: usize) -> bool {
        match report.luck(self.tab).actions.get(index) {
            Some(action) => {
                self.open_action = Some(action.clone());
                true
            }
            None => false,
        }
    }

    /// Closes the detail overlay.
    pub fn close(&mut self) {
        self.open_action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_test_support::valid_report_json;

    fn report() -> AnalysisResult {
        serde_json::from_value(valid_report_json()).unwrap()
    }

    #[test]
    fn test_new_state_defaults_to_day_with_nothing_open() {
        let state = PresenterState::new();

        assert_eq!(state.tab(), LuckScope::Day);
        assert_eq!(state.hovered(), None);
        assert!(state.open_action().is_none());
    }

    #[test]
    fn test_open_uses_current_tab_actions() {
        let report = report();
        let mut state = PresenterState::new();
        state.select_tab(LuckScope::Week);

        assert!(state.open(&report, 2));

        assert_eq!(state.open_action().unwrap().title, "本周行动三");
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let report = report();
        let mut state = PresenterState::new();

        assert!(!state.open(&report, 3));
        assert!(state.open_action().is_none());
    }

    #[test]
    fn test_hover_and_close_transitions() {
        let report = report();
        let mut state = PresenterState::new();
        state.hover(Element::Metal);
        state.open(&report, 0);

        state.clear_hover();
        state.close();

        assert_eq!(state, PresenterState::new());
    }
}
