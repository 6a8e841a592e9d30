//! Dashboard key handling

use super::state::{DashboardState, InputMode};
use super::view::BulkAction;
use crate::auction::AuctionStatus;
use crate::events::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a key press to the dashboard. Returns `true` when the user asked to quit.
pub fn handle_key_event(state: &mut DashboardState, key: KeyEvent) -> bool {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return true;
    }

    match state.input_mode {
        InputMode::Search => handle_search_key(state, key),
        InputMode::Normal => return handle_normal_key(state, key),
    }

    false
}

fn handle_search_key(state: &mut DashboardState, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter, _) => {
            state.input_mode = InputMode::Normal;
            let term = state.search_term().to_string();
            if !term.is_empty() {
                state.add_to_activity_log(Event::navigation(format!("Searching for {:?}", term)));
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.set_search_term(""),
        (KeyCode::Backspace, _) => {
            let mut term = state.search_term().to_string();
            term.pop();
            state.set_search_term(term);
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let mut term = state.search_term().to_string();
            term.push(c);
            state.set_search_term(term);
        }
        _ => {}
    }
}

fn handle_normal_key(state: &mut DashboardState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            select_tab(state, AuctionStatus::ALL[index]);
        }
        KeyCode::Tab => {
            let tab = state.active_tab().next();
            select_tab(state, tab);
        }
        KeyCode::BackTab => {
            let tab = state.active_tab().prev();
            select_tab(state, tab);
        }
        KeyCode::Char('/') => state.input_mode = InputMode::Search,
        KeyCode::Down | KeyCode::Char('j') => state.focus_next(),
        KeyCode::Up | KeyCode::Char('k') => state.focus_prev(),
        KeyCode::Enter => state.toggle_focused_accordion(),
        KeyCode::Char(' ') => state.toggle_focused_selection(),
        KeyCode::Char(c) => {
            if let Some(action) = BulkAction::from_key(c) {
                state.trigger_bulk_action(action);
            }
        }
        _ => {}
    }
    false
}

fn select_tab(state: &mut DashboardState, tab: AuctionStatus) {
    if state.active_tab() != tab {
        state.set_active_tab(tab);
        state.add_to_activity_log(Event::navigation(format!("Showing {} auctions", tab)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn state() -> DashboardState {
        DashboardState::new(seed::company_groups(), AuctionStatus::Upcoming, false)
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut state = state();
        assert!(!press(&mut state, KeyCode::Char('3')));
        assert_eq!(state.active_tab(), AuctionStatus::Paused);
        press(&mut state, KeyCode::Char('1'));
        assert_eq!(state.active_tab(), AuctionStatus::Upcoming);
    }

    #[test]
    fn tab_key_cycles_tabs() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.active_tab(), AuctionStatus::Active);
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.active_tab(), AuctionStatus::Closed);
    }

    #[test]
    fn slash_enters_search_and_typing_filters() {
        let mut state = state();
        press(&mut state, KeyCode::Char('4'));
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.input_mode, InputMode::Search);

        // 'q' and digits are text while searching
        type_text(&mut state, "chennai q");
        assert_eq!(state.search_term(), "chennai q");
        assert_eq!(state.active_tab(), AuctionStatus::Closed);

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.search_term(), "chennai");

        assert!(!press(&mut state, KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_term(), "chennai");
        assert_eq!(state.filtered_groups().len(), 2);
    }

    #[test]
    fn ctrl_u_clears_search() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "pune");
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.search_term(), "");
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn modifier_chords_do_not_type_into_search() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "pune");
        for (c, modifiers) in [
            ('w', KeyModifiers::CONTROL),
            ('b', KeyModifiers::ALT),
            ('x', KeyModifiers::CONTROL | KeyModifiers::SHIFT),
        ] {
            handle_key_event(&mut state, KeyEvent::new(KeyCode::Char(c), modifiers));
        }
        assert_eq!(state.search_term(), "pune");

        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT),
        );
        assert_eq!(state.search_term(), "puneN");
        assert_eq!(state.input_mode, InputMode::Search);
    }

    #[test]
    fn enter_and_space_act_on_focused_group() {
        let mut state = state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char(' '));

        let group = &state.company_groups()[1];
        assert_eq!(group.company_name, "TheLogisticsNow");
        assert!(group.is_expanded);
        assert!(state.is_selected("TheLogisticsNow"));

        press(&mut state, KeyCode::Char('c'));
        assert!(state.selected_companies().is_empty());
    }

    #[test]
    fn quit_keys_exit() {
        let mut state = state();
        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(press(&mut state, KeyCode::Esc));
        assert!(handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ));
    }

    #[test]
    fn esc_leaves_search_without_quitting() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        assert!(!press(&mut state, KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
