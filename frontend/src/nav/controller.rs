//! Navigation operations that touch the page as well as [`NavState`].
//!
//! Each function asks the [`Viewport`] to do its part (read the scroll
//! position, smooth-scroll to an anchor) and then hands the resulting
//! transition to `dispatch`. In the app `dispatch` is the reducer
//! dispatcher; tests pass a closure over a plain `NavState`.

use log::debug;

use super::error::NavError;
use super::section::SectionId;
use super::state::NavAction;
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub fn on_scroll<V>(viewport: &V, dispatch: impl Fn(NavAction))
where
    V: Viewport + ?Sized,
{
    dispatch(NavAction::Scrolled(viewport.scroll_metrics()));
}

/// Navigates to a section given its anchor id.
pub fn navigate_to<V>(
    viewport: &V,
    dispatch: impl Fn(NavAction),
    section_id: &str,
) -> Result<SectionId, NavError>
where
    V: Viewport + ?Sized,
{
    let section = section_id.parse::<SectionId>()?;
    navigate_to_section(viewport, dispatch, section)?;
    Ok(section)
}

/// Scrolls to `section`, marks it active and closes the mobile menu.
///
/// A missing anchor element still updates the state and is reported as
/// [`NavError::TargetNotFound`].
pub fn navigate_to_section<V>(
    viewport: &V,
    dispatch: impl Fn(NavAction),
    section: SectionId,
) -> Result<(), NavError>
where
    V: Viewport + ?Sized,
{
    scroll_then(viewport, dispatch, section, NavAction::NavigatedTo(section))
}

/// Picking a tier in the membership dialog: close the dialog and go to
/// the contact form.
pub fn select_tier<V>(viewport: &V, dispatch: impl Fn(NavAction)) -> Result<(), NavError>
where
    V: Viewport + ?Sized,
{
    scroll_then(viewport, dispatch, SectionId::Contact, NavAction::TierSelected)
}

fn scroll_then<V>(
    viewport: &V,
    dispatch: impl Fn(NavAction),
    section: SectionId,
    action: NavAction,
) -> Result<(), NavError>
where
    V: Viewport + ?Sized,
{
    let found = viewport.scroll_into_view(section.anchor());
    debug!("navigating to #{section} (anchor found: {found})");
    dispatch(action);

    if found {
        Ok(())
    } else {
        Err(NavError::TargetNotFound(section))
    }
}
