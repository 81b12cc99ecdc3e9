//! Scroll-driven navigation state.
//!
//! Pure math extracted from the page's scroll handlers so the thresholds and
//! the scroll-spy scan can be tested without a browser. The web crate feeds
//! in `window.scrollY` and the measured section offsets on every scroll event
//! and applies the results as presentation classes.

/// Scroll offset at which the navbar switches to its "scrolled" treatment.
pub const NAV_SCROLLED_AT: f64 = 100.0;

/// Scroll offset at which the scroll-to-top button becomes visible.
pub const SCROLL_TOP_VISIBLE_AT: f64 = 300.0;

/// A section is considered active this many pixels before its top edge
/// reaches the top of the viewport.
pub const SECTION_LOOKAHEAD: f64 = 150.0;

/// Height of the fixed navbar; scroll destinations are raised by this much so
/// section headings land below it.
pub const NAV_HEIGHT_OFFSET: f64 = 80.0;

/// A page section's id and its measured document offset, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    pub top: f64,
}

impl SectionPosition {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Whether the navbar should carry its "scrolled" presentation state.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y >= NAV_SCROLLED_AT
}

/// Whether the scroll-to-top affordance should be visible.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_TOP_VISIBLE_AT
}

/// Scroll-spy: pick the section the viewport is currently in.
///
/// Scans `sections` in document order and keeps overwriting the candidate
/// with every section whose top edge (minus [`SECTION_LOOKAHEAD`]) is at or
/// above `scroll_y`. When several sections qualify the *last* one wins; that
/// overwrite-without-early-exit behavior is intentional and relied upon by
/// the nav highlighting. Returns `None` when no section qualifies.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionPosition]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SECTION_LOOKAHEAD {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Document offset to scroll to so `section_top` lands just below the fixed
/// navbar. May be negative for sections near the top of the page; the
/// browser clamps the actual scroll position.
#[must_use]
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAV_HEIGHT_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<SectionPosition> {
        vec![
            SectionPosition::new("hero", 0.0),
            SectionPosition::new("topics", 500.0),
            SectionPosition::new("projects", 1200.0),
        ]
    }

    #[test]
    fn navbar_scrolled_at_and_above_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(99.9));
        assert!(navbar_scrolled(100.0));
        assert!(navbar_scrolled(101.0));
        assert!(navbar_scrolled(5000.0));
    }

    #[test]
    fn scroll_top_button_at_and_above_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(299.0));
        assert!(scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
    }

    #[test]
    fn active_section_picks_last_qualifying_section() {
        let sections = sample_sections();

        // 500 - 150 = 350 <= 400, so "topics" overwrites "hero";
        // 1200 - 150 = 1050 > 400, so "projects" does not qualify.
        assert_eq!(active_section(400.0, &sections), Some("topics"));

        // 1050 <= 1060: the bottom section wins.
        assert_eq!(active_section(1060.0, &sections), Some("projects"));
    }

    #[test]
    fn active_section_at_page_top() {
        let sections = sample_sections();
        assert_eq!(active_section(0.0, &sections), Some("hero"));
    }

    #[test]
    fn active_section_boundary_is_inclusive() {
        let sections = sample_sections();
        assert_eq!(active_section(350.0, &sections), Some("topics"));
        assert_eq!(active_section(349.9, &sections), Some("hero"));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section(400.0, &[]), None);
    }

    #[test]
    fn nothing_qualifies_above_all_sections() {
        let sections = vec![SectionPosition::new("topics", 800.0)];
        assert_eq!(active_section(0.0, &sections), None);
    }

    #[test]
    fn last_match_wins_on_identical_tops() {
        let sections = vec![
            SectionPosition::new("a", 100.0),
            SectionPosition::new("b", 100.0),
        ];
        assert_eq!(active_section(200.0, &sections), Some("b"));
    }

    #[test]
    fn scroll_target_subtracts_navbar_height() {
        assert_eq!(scroll_target(500.0), 420.0);
        assert_eq!(scroll_target(0.0), -80.0);
    }
}
