//! Navigation chrome state: mobile menu, scrolled styling, membership
//! dialog and the highlighted section.
//!
//! The three flags are independent of each other. `active_section` only
//! changes through navigation, never by observing what is on screen.

use std::rc::Rc;

use yew::Reducible;

use super::section::SectionId;
use crate::viewport::ScrollMetrics;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub dialog_open: bool,
    pub active_section: SectionId,
    pub scroll_progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(ScrollMetrics),
    NavigatedTo(SectionId),
    ToggleMenu,
    CloseMenu,
    OpenDialog,
    CloseDialog,
    /// A tier was picked in the membership dialog: close it and move to the
    /// contact form in one step.
    TierSelected,
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(metrics) => {
                self.scrolled = metrics.is_scrolled();
                self.scroll_progress = metrics.progress();
            }
            NavAction::NavigatedTo(section) => {
                self.active_section = section;
                self.menu_open = false;
            }
            NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            NavAction::CloseMenu => self.menu_open = false,
            NavAction::OpenDialog => self.dialog_open = true,
            NavAction::CloseDialog => self.dialog_open = false,
            NavAction::TierSelected => {
                self.dialog_open = false;
                self.apply(NavAction::NavigatedTo(SectionId::Contact));
            }
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        // Same Rc back means no re-render for no-op scroll ticks
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
