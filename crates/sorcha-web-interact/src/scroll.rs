//! Anchor scrolling, scroll-spy matching and navbar scroll direction.

use crate::selectors::{SCROLL_DOWN, SCROLL_UP};

/// Gap kept between the navbar and a scrolled-to section, in pixels.
pub const ANCHOR_MARGIN: f64 = 20.0;

/// Scroll-spy observer root margin.
pub const SPY_ROOT_MARGIN: &str = "-100px 0px -80% 0px";

/// How a click on a same-page link is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorClick<'a> {
    /// A bare `#`: swallow the click
    Bare,
    /// A fragment selector such as `#pricing`
    Fragment(&'a str),
}

/// Classify a link's `href`. Returns `None` for links to other pages.
pub fn classify_anchor(href: &str) -> Option<AnchorClick<'_>> {
    match href {
        "#" => Some(AnchorClick::Bare),
        _ if href.starts_with('#') => Some(AnchorClick::Fragment(href)),
        _ => None,
    }
}

/// Scroll position that puts a section just below the fixed navbar.
pub fn anchor_offset(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height - ANCHOR_MARGIN
}

/// Whether a scroll-spy link points at the section with `section_id`.
pub fn spy_link_matches(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Class changes to apply to the navbar after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarUpdate {
    /// Back at the top of the page
    AtTop,
    /// Started scrolling down
    Hide,
    /// Started scrolling up after scrolling down
    Show,
    Unchanged,
}

impl NavbarUpdate {
    pub fn remove(&self) -> &'static [&'static str] {
        match self {
            NavbarUpdate::AtTop | NavbarUpdate::Hide => &[SCROLL_UP],
            NavbarUpdate::Show => &[SCROLL_DOWN],
            NavbarUpdate::Unchanged => &[],
        }
    }

    pub fn add(&self) -> &'static [&'static str] {
        match self {
            NavbarUpdate::Hide => &[SCROLL_DOWN],
            NavbarUpdate::Show => &[SCROLL_UP],
            NavbarUpdate::AtTop | NavbarUpdate::Unchanged => &[],
        }
    }
}

/// Tracks the last scroll position seen by the navbar listener.
#[derive(Debug, Default, Clone)]
pub struct ScrollTracker {
    last: f64,
}

impl ScrollTracker {
    /// Feed the current vertical scroll position. `scrolling_down` is whether
    /// the navbar currently carries the scroll-down class.
    pub fn update(&mut self, current: f64, scrolling_down: bool) -> NavbarUpdate {
        // The last position is not updated at the top
        if current <= 0.0 {
            return NavbarUpdate::AtTop;
        }

        let update = if current > self.last && !scrolling_down {
            NavbarUpdate::Hide
        } else if current < self.last && scrolling_down {
            NavbarUpdate::Show
        } else {
            NavbarUpdate::Unchanged
        };

        self.last = current;
        update
    }
}
