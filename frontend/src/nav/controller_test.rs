use std::cell::RefCell;
use std::collections::HashSet;

use super::*;
use crate::nav::state::NavState;
use crate::viewport::ScrollMetrics;

struct FakeViewport {
    anchors: HashSet<&'static str>,
    metrics: ScrollMetrics,
    scroll_requests: RefCell<Vec<String>>,
}

impl FakeViewport {
    fn with_all_sections() -> Self {
        Self::with_anchors(&SectionId::ALL.map(SectionId::anchor))
    }

    fn with_anchors(anchors: &[&'static str]) -> Self {
        Self {
            anchors: anchors.iter().copied().collect(),
            metrics: ScrollMetrics::default(),
            scroll_requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.scroll_requests.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let found = self.anchors.contains(id);
        if found {
            self.scroll_requests.borrow_mut().push(id.to_string());
        }
        found
    }
}

fn dispatcher(state: &RefCell<NavState>) -> impl Fn(NavAction) + '_ {
    move |action: NavAction| state.borrow_mut().apply(action)
}

// =============================================================
// navigate_to
// =============================================================

#[test]
fn navigate_to_every_link_scrolls_and_updates_state() {
    let viewport = FakeViewport::with_all_sections();
    for section in SectionId::ALL {
        let state = RefCell::new(NavState {
            menu_open: true,
            ..NavState::default()
        });

        let result = navigate_to(&viewport, dispatcher(&state), section.anchor());

        assert_eq!(result, Ok(section));
        assert_eq!(state.borrow().active_section, section);
        assert!(!state.borrow().menu_open);
    }
    assert_eq!(
        viewport.requests(),
        vec!["home", "membership", "videos", "story", "contact"]
    );
}

#[test]
fn missing_anchor_still_updates_state_and_reports_not_found() {
    let viewport = FakeViewport::with_anchors(&["home"]);
    let state = RefCell::new(NavState {
        menu_open: true,
        ..NavState::default()
    });

    let result = navigate_to(&viewport, dispatcher(&state), "story");

    assert_eq!(result, Err(NavError::TargetNotFound(SectionId::Story)));
    assert_eq!(state.borrow().active_section, SectionId::Story);
    assert!(!state.borrow().menu_open);
    assert!(viewport.requests().is_empty());
}

#[test]
fn unknown_section_changes_nothing() {
    let viewport = FakeViewport::with_all_sections();
    let state = RefCell::new(NavState {
        menu_open: true,
        active_section: SectionId::Videos,
        ..NavState::default()
    });

    let result = navigate_to(&viewport, dispatcher(&state), "faq");

    assert_eq!(result, Err(NavError::UnknownSection("faq".to_string())));
    assert_eq!(state.borrow().active_section, SectionId::Videos);
    assert!(state.borrow().menu_open);
    assert!(viewport.requests().is_empty());
}

// =============================================================
// select_tier
// =============================================================

#[test]
fn select_tier_closes_dialog_and_goes_to_contact() {
    let viewport = FakeViewport::with_all_sections();
    let state = RefCell::new(NavState {
        dialog_open: true,
        active_section: SectionId::Membership,
        ..NavState::default()
    });

    select_tier(&viewport, dispatcher(&state)).unwrap();

    assert!(!state.borrow().dialog_open);
    assert_eq!(state.borrow().active_section, SectionId::Contact);
    assert_eq!(viewport.requests(), vec!["contact"]);
}

#[test]
fn select_tier_dispatches_a_single_transition() {
    let viewport = FakeViewport::with_all_sections();
    let actions = RefCell::new(Vec::new());

    select_tier(&viewport, |action| actions.borrow_mut().push(action)).unwrap();

    assert_eq!(*actions.borrow(), vec![NavAction::TierSelected]);
}

#[test]
fn select_tier_without_contact_anchor_still_closes_dialog() {
    let viewport = FakeViewport::with_anchors(&[]);
    let state = RefCell::new(NavState {
        dialog_open: true,
        ..NavState::default()
    });

    let result = select_tier(&viewport, dispatcher(&state));

    assert_eq!(result, Err(NavError::TargetNotFound(SectionId::Contact)));
    assert!(!state.borrow().dialog_open);
    assert_eq!(state.borrow().active_section, SectionId::Contact);
}

// =============================================================
// on_scroll
// =============================================================

#[test]
fn on_scroll_reads_viewport_metrics() {
    let mut viewport = FakeViewport::with_all_sections();
    let state = RefCell::new(NavState::default());

    viewport.metrics = ScrollMetrics {
        offset: 150.0,
        document_height: 1600.0,
        viewport_height: 1000.0,
    };
    on_scroll(&viewport, dispatcher(&state));
    assert!(state.borrow().scrolled);
    assert_eq!(state.borrow().scroll_progress, 0.25);

    viewport.metrics.offset = 100.0;
    on_scroll(&viewport, dispatcher(&state));
    assert!(!state.borrow().scrolled);
}
