//! Dashboard state update logic
//!
//! Focus movement, bulk actions and activity log bookkeeping layered on top of the core transitions

use super::state::DashboardState;
use super::view::{BulkAction, selection_summary};

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;

impl DashboardState {
    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Name of the highlighted group, if any group is rendered.
    pub fn focused_company(&self) -> Option<String> {
        self.filtered_groups()
            .get(self.focused)
            .map(|view| view.company_name.to_string())
    }

    pub fn focus_next(&mut self) {
        let visible = self.filtered_groups().len();
        if self.focused + 1 < visible {
            self.focused += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Expands or collapses the highlighted group.
    pub fn toggle_focused_accordion(&mut self) {
        if let Some(name) = self.focused_company() {
            self.toggle_accordion(&name);
            self.add_to_activity_log(Event::navigation(format!("Toggled {}", name)));
        }
    }

    /// Checks or unchecks the highlighted group.
    pub fn toggle_focused_selection(&mut self) {
        if let Some(name) = self.focused_company() {
            self.toggle_company_selection(&name);
            let verb = if self.is_selected(&name) {
                "Selected"
            } else {
                "Deselected"
            };
            self.add_to_activity_log(Event::selection(format!("{} {}", verb, name)));
        }
    }

    /// Runs a bulk action bar button. Ignored while nothing is selected, since the bar is hidden.
    pub fn trigger_bulk_action(&mut self, action: BulkAction) {
        let selected = self.selected_companies().len();
        if selected == 0 {
            return;
        }
        match action {
            BulkAction::ClearSelection => {
                self.clear_selection();
                self.add_to_activity_log(Event::selection("Selection cleared"));
            }
            other => {
                log::info!("{} requested for {} groups", other.label(), selected);
                self.add_to_activity_log(Event::unavailable(format!(
                    "{} for {} is not available yet",
                    other.label(),
                    selection_summary(selected).trim_end_matches(" selected")
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::AuctionStatus;
    use crate::events::EventType;
    use crate::seed;

    fn state() -> DashboardState {
        DashboardState::new(seed::company_groups(), AuctionStatus::Upcoming, false)
    }

    #[test]
    fn test_focus_stays_within_rendered_groups() {
        let mut state = state();
        assert_eq!(state.focused_company().as_deref(), Some("LogisticsNow"));

        for _ in 0..10 {
            state.focus_next();
        }
        assert_eq!(state.focused, 3);
        assert_eq!(
            state.focused_company().as_deref(),
            Some("FastTrack Logistics")
        );

        for _ in 0..10 {
            state.focus_prev();
        }
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn test_focused_company_none_when_nothing_rendered() {
        let mut state = state();
        state.set_search_term("zzz");
        assert_eq!(state.focused_company(), None);
        state.toggle_focused_accordion();
        state.toggle_focused_selection();
        assert!(state.selected_companies().is_empty());
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn test_toggle_focused_selection_logs_event() {
        let mut state = state();
        state.focus_next();
        state.toggle_focused_selection();
        assert!(state.is_selected("TheLogisticsNow"));
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.msg, "Selected TheLogisticsNow");
    }

    #[test]
    fn test_bulk_actions_need_a_selection() {
        let mut state = state();
        state.trigger_bulk_action(BulkAction::BulkUpload);
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn test_inert_bulk_action_keeps_selection() {
        let mut state = state();
        state.toggle_company_selection("LogisticsNow");
        state.trigger_bulk_action(BulkAction::EditAuctions);

        assert!(state.is_selected("LogisticsNow"));
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Unavailable);
        assert_eq!(last.msg, "Edit Auctions for 1 company group is not available yet");
    }

    #[test]
    fn test_clear_selection_action() {
        let mut state = state();
        state.toggle_company_selection("LogisticsNow");
        state.toggle_company_selection("GlobalLogistics");
        state.trigger_bulk_action(BulkAction::ClearSelection);
        assert!(state.selected_companies().is_empty());
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::navigation(format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
