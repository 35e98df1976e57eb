//! Selectors and class names shared with the site templates and stylesheet.

pub const MOBILE_MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_WRAPPER: &str = ".nav-wrapper";
pub const NAVBAR: &str = ".navbar";

pub const SAME_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;
pub const SPY_SECTIONS: &str = "section[id], article[id]";
pub const SPY_LINKS: &str = r##".docs-nav a[href^="#"]"##;

pub const FADE_TARGETS: &str = ".feature-card, .use-case-card, .benefit-item";

pub const CODE_BLOCK: &str = ".code-block";

pub const STATS_SECTION: &str = ".hero-stats";
pub const STAT_NUMBER: &str = ".stat-number";

pub const EXTERNAL_LINKS: &str = r#"a[target="_blank"]"#;

/// Toggled on the open mobile menu and on the highlighted nav link.
pub const ACTIVE: &str = "active";

pub const SCROLL_DOWN: &str = "scroll-down";
pub const SCROLL_UP: &str = "scroll-up";
