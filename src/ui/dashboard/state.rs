//! Dashboard state management
//!
//! Owns the four UI state slices and the transitions that change them

use super::view::{self, GroupView};
use crate::auction::{AuctionStatus, CompanyGroup};
use crate::events::Event;

use std::collections::{BTreeSet, VecDeque};

/// What keystrokes are currently routed to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the search term.
    Search,
}

/// State for the auction dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    /// Status tab currently shown.
    active_tab: AuctionStatus,
    /// Free text filter, kept verbatim.
    search_term: String,
    /// All procurement groups, in display order.
    company_groups: Vec<CompanyGroup>,
    /// Company names checked for bulk actions.
    selected_companies: BTreeSet<String>,

    /// Whether keys go to navigation or the search box
    pub input_mode: InputMode,
    /// Index of the highlighted group among the rendered groups
    pub focused: usize,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        company_groups: Vec<CompanyGroup>,
        active_tab: AuctionStatus,
        with_background_color: bool,
    ) -> Self {
        Self {
            active_tab,
            search_term: String::new(),
            company_groups,
            selected_companies: BTreeSet::new(),
            input_mode: InputMode::Normal,
            focused: 0,
            activity_logs: VecDeque::new(),
            with_background_color,
        }
    }

    pub fn active_tab(&self) -> AuctionStatus {
        self.active_tab
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[cfg(test)]
    pub fn company_groups(&self) -> &[CompanyGroup] {
        &self.company_groups
    }

    pub fn selected_companies(&self) -> &BTreeSet<String> {
        &self.selected_companies
    }

    pub fn is_selected(&self, company_name: &str) -> bool {
        self.selected_companies.contains(company_name)
    }

    /// Switches the visible status tab.
    pub fn set_active_tab(&mut self, tab: AuctionStatus) {
        if self.active_tab != tab {
            log::debug!("Switching tab {} -> {}", self.active_tab, tab);
        }
        self.active_tab = tab;
        self.clamp_focus();
    }

    /// Replaces the search term as typed.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        log::trace!("Search term is now {:?}", self.search_term);
        self.clamp_focus();
    }

    /// Expands or collapses the named group. Unknown names are ignored.
    pub fn toggle_accordion(&mut self, company_name: &str) {
        for group in self
            .company_groups
            .iter_mut()
            .filter(|g| g.company_name == company_name)
        {
            group.is_expanded = !group.is_expanded;
            log::debug!(
                "{} {}",
                if group.is_expanded { "Expanded" } else { "Collapsed" },
                company_name
            );
        }
    }

    /// Adds the company to the selection, or removes it if already selected.
    pub fn toggle_company_selection(&mut self, company_name: &str) {
        if !self.selected_companies.remove(company_name) {
            self.selected_companies.insert(company_name.to_string());
        }
        log::debug!(
            "Selection toggled for {}, {} selected",
            company_name,
            self.selected_companies.len()
        );
    }

    pub fn clear_selection(&mut self) {
        self.selected_companies.clear();
    }

    /// Groups visible under the current tab and search term.
    pub fn filtered_groups(&self) -> Vec<GroupView<'_>> {
        view::filter_groups(&self.company_groups, self.active_tab, &self.search_term)
    }

    /// Tab badge counts over the full data set.
    pub fn tab_counts(&self) -> [(AuctionStatus, usize); 4] {
        view::tab_counts(&self.company_groups)
    }

    /// Keeps the highlighted row inside the rendered group list.
    pub fn clamp_focus(&mut self) {
        let visible = self.filtered_groups().len();
        self.focused = self.focused.min(visible.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn state() -> DashboardState {
        DashboardState::new(seed::company_groups(), AuctionStatus::Upcoming, false)
    }

    fn expanded(state: &DashboardState, name: &str) -> bool {
        state
            .company_groups()
            .iter()
            .find(|g| g.company_name == name)
            .map(|g| g.is_expanded)
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.active_tab(), AuctionStatus::Upcoming);
        assert_eq!(state.search_term(), "");
        assert!(state.selected_companies().is_empty());
        assert_eq!(state.company_groups().len(), 5);
    }

    #[test]
    fn test_toggle_accordion_is_involution() {
        let mut state = state();
        let before: Vec<bool> = state.company_groups().iter().map(|g| g.is_expanded).collect();

        state.toggle_accordion("TheLogisticsNow");
        assert!(expanded(&state, "TheLogisticsNow"));
        assert!(expanded(&state, "LogisticsNow"));
        assert!(!expanded(&state, "THELOGISTICSNOW"));

        state.toggle_accordion("TheLogisticsNow");
        let after: Vec<bool> = state.company_groups().iter().map(|g| g.is_expanded).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_accordion_unknown_name_is_noop() {
        let mut state = state();
        let before = state.company_groups().to_vec();
        state.toggle_accordion("Nobody Logistics");
        assert_eq!(state.company_groups(), before.as_slice());
    }

    #[test]
    fn test_toggle_selection_is_involution() {
        let mut state = state();
        state.toggle_company_selection("GlobalLogistics");
        assert!(state.is_selected("GlobalLogistics"));
        state.toggle_company_selection("GlobalLogistics");
        assert!(!state.is_selected("GlobalLogistics"));
        assert!(state.selected_companies().is_empty());
    }

    #[test]
    fn test_clear_selection_empties_set() {
        let mut state = state();
        state.toggle_company_selection("LogisticsNow");
        state.toggle_company_selection("FastTrack Logistics");
        assert_eq!(state.selected_companies().len(), 2);

        state.clear_selection();
        assert!(state.selected_companies().is_empty());
        state.clear_selection();
        assert!(state.selected_companies().is_empty());
    }

    #[test]
    fn test_tab_counts_ignore_search_term() {
        let mut state = state();
        let before = state.tab_counts();
        state.set_search_term("chennai");
        assert_eq!(state.tab_counts(), before);
        state.set_active_tab(AuctionStatus::Closed);
        assert_eq!(state.tab_counts(), before);
    }

    #[test]
    fn test_search_term_kept_verbatim() {
        let mut state = state();
        state.set_search_term("  Chennai ");
        assert_eq!(state.search_term(), "  Chennai ");
    }

    #[test]
    fn test_filtered_groups_follow_tab_and_search() {
        let mut state = state();
        state.set_active_tab(AuctionStatus::Active);
        let names: Vec<&str> = state
            .filtered_groups()
            .iter()
            .map(|v| v.company_name)
            .collect();
        assert_eq!(names, vec!["LogisticsNow", "GlobalLogistics"]);

        state.set_active_tab(AuctionStatus::Closed);
        state.set_search_term("chennai");
        let views = state.filtered_groups();
        assert_eq!(views[0].company_name, "TheLogisticsNow");
        assert_eq!(views[0].auctions.len(), 1);
        assert_eq!(views[0].auctions[0].id, "445821");
    }

    #[test]
    fn test_focus_clamped_when_list_shrinks() {
        let mut state = state();
        state.focused = 3;
        state.set_active_tab(AuctionStatus::Paused);
        assert_eq!(state.focused, 0);

        state.set_search_term("nothing matches this");
        assert_eq!(state.focused, 0);
    }
}
