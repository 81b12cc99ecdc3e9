//! Mobile menu hamburger glyph state.
//!
//! The hamburger button is three stacked bars. When the menu opens the outer
//! bars rotate into an X and the middle bar fades out; closing restores the
//! neutral glyph. Computed here as plain style values so the open/closed
//! mapping is testable, the web crate applies them as inline styles.

/// Inline style values for one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    const NEUTRAL: BarStyle = BarStyle {
        transform: "none",
        opacity: "1",
    };
}

/// Presentation for the three bars, top to bottom, for the given menu state.
#[must_use]
pub fn hamburger_bar_styles(menu_open: bool) -> [BarStyle; 3] {
    if menu_open {
        [
            BarStyle {
                transform: "rotate(45deg) translate(5px, 5px)",
                opacity: "1",
            },
            BarStyle {
                transform: "none",
                opacity: "0",
            },
            BarStyle {
                transform: "rotate(-45deg) translate(7px, -6px)",
                opacity: "1",
            },
        ]
    } else {
        [BarStyle::NEUTRAL; 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_bars_are_neutral() {
        for bar in hamburger_bar_styles(false) {
            assert_eq!(bar.transform, "none");
            assert_eq!(bar.opacity, "1");
        }
    }

    #[test]
    fn open_bars_form_an_x() {
        let [top, middle, bottom] = hamburger_bar_styles(true);
        assert_eq!(top.transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(middle.opacity, "0");
        assert_eq!(bottom.transform, "rotate(-45deg) translate(7px, -6px)");
    }

    #[test]
    fn toggle_twice_restores_glyph() {
        let mut open = false;
        let initial = hamburger_bar_styles(open);
        open = !open;
        open = !open;
        assert_eq!(hamburger_bar_styles(open), initial);
    }
}
