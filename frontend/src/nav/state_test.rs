use super::*;

fn scrolled_to(offset: f64) -> NavAction {
    NavAction::Scrolled(ScrollMetrics::at_offset(offset))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_all_closed_on_home() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert!(!state.dialog_open);
    assert_eq!(state.active_section, SectionId::Home);
    assert_eq!(state.scroll_progress, 0.0);
}

// =============================================================
// Scrolling
// =============================================================

#[test]
fn scroll_boundary_is_strict() {
    let mut state = NavState::default();

    state.apply(scrolled_to(0.0));
    assert!(!state.scrolled);

    state.apply(scrolled_to(101.0));
    assert!(state.scrolled);

    state.apply(scrolled_to(100.0));
    assert!(!state.scrolled);
}

#[test]
fn repeated_scroll_events_are_idempotent() {
    let mut once = NavState::default();
    once.apply(scrolled_to(250.0));

    let mut twice = once.clone();
    twice.apply(scrolled_to(250.0));

    assert_eq!(once, twice);
}

#[test]
fn scroll_records_progress() {
    let mut state = NavState::default();
    state.apply(NavAction::Scrolled(ScrollMetrics {
        offset: 1000.0,
        document_height: 5000.0,
        viewport_height: 1000.0,
    }));
    assert_eq!(state.scroll_progress, 0.25);
}

#[test]
fn scrolling_leaves_other_flags_alone() {
    let mut state = NavState {
        menu_open: true,
        dialog_open: true,
        active_section: SectionId::Story,
        ..NavState::default()
    };
    state.apply(scrolled_to(400.0));
    assert!(state.menu_open);
    assert!(state.dialog_open);
    assert_eq!(state.active_section, SectionId::Story);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_twice_restores_original() {
    for start in [false, true] {
        let mut state = NavState {
            menu_open: start,
            ..NavState::default()
        };
        state.apply(NavAction::ToggleMenu);
        assert_eq!(state.menu_open, !start);
        state.apply(NavAction::ToggleMenu);
        assert_eq!(state.menu_open, start);
    }
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = NavState {
        menu_open: true,
        ..NavState::default()
    };
    state.apply(NavAction::CloseMenu);
    assert!(!state.menu_open);
    state.apply(NavAction::CloseMenu);
    assert!(!state.menu_open);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigation_sets_section_and_closes_menu_from_any_state() {
    for section in SectionId::ALL {
        for menu_open in [false, true] {
            let mut state = NavState {
                menu_open,
                active_section: SectionId::Story,
                ..NavState::default()
            };
            state.apply(NavAction::NavigatedTo(section));
            assert_eq!(state.active_section, section);
            assert!(!state.menu_open);
            assert!(state.is_active(section));
        }
    }
}

#[test]
fn navigation_does_not_touch_dialog() {
    let mut state = NavState {
        dialog_open: true,
        ..NavState::default()
    };
    state.apply(NavAction::NavigatedTo(SectionId::Videos));
    assert!(state.dialog_open);
}

// =============================================================
// Dialog
// =============================================================

#[test]
fn open_then_close_dialog_ends_closed() {
    let mut state = NavState::default();
    state.apply(NavAction::OpenDialog);
    assert!(state.dialog_open);
    state.apply(NavAction::CloseDialog);
    assert!(!state.dialog_open);
}

#[test]
fn tier_selection_matches_close_then_navigate_to_contact() {
    let start = NavState {
        menu_open: true,
        dialog_open: true,
        scrolled: true,
        active_section: SectionId::Membership,
        scroll_progress: 0.4,
    };

    let mut composite = start.clone();
    composite.apply(NavAction::TierSelected);

    let mut sequence = start;
    sequence.apply(NavAction::CloseDialog);
    sequence.apply(NavAction::NavigatedTo(SectionId::Contact));

    assert_eq!(composite, sequence);
    assert!(!composite.dialog_open);
    assert_eq!(composite.active_section, SectionId::Contact);
}

// =============================================================
// Reducible
// =============================================================

#[test]
fn reduce_returns_same_rc_when_nothing_changes() {
    let state = Rc::new(NavState::default());
    let next = state.clone().reduce(scrolled_to(10.0));
    assert!(Rc::ptr_eq(&state, &next));
}

#[test]
fn reduce_returns_new_rc_on_change() {
    let state = Rc::new(NavState::default());
    let next = state.clone().reduce(NavAction::ToggleMenu);
    assert!(!Rc::ptr_eq(&state, &next));
    assert!(next.menu_open);
    assert!(!state.menu_open);
}
