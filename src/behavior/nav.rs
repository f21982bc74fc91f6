//! Navigation bar state: scroll-direction hiding, mobile menu, anchor scrolling.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Shown,
    Hidden,
}

/// Hides the bar while the visitor scrolls down past a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct NavScroll {
    last_offset: f64,
    threshold: f64,
}

impl NavScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            last_offset: 0.0,
            threshold,
        }
    }

    /// Feed the current vertical offset and get the bar's visibility.
    pub fn update(&mut self, offset: f64) -> NavVisibility {
        let visibility = if offset > self.last_offset && offset > self.threshold {
            NavVisibility::Hidden
        } else {
            NavVisibility::Shown
        };
        self.last_offset = offset.max(0.0);
        visibility
    }

    #[cfg(test)]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

/// Inline transforms for the three bars of the burger icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurgerIcon {
    pub top: &'static str,
    pub middle_opacity: &'static str,
    pub bottom: &'static str,
}

const BURGER_CLOSED: BurgerIcon = BurgerIcon {
    top: "none",
    middle_opacity: "1",
    bottom: "none",
};

const BURGER_OPEN: BurgerIcon = BurgerIcon {
    top: "rotate(45deg) translateY(7px)",
    middle_opacity: "0",
    bottom: "rotate(-45deg) translateY(-7px)",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn icon(&self) -> BurgerIcon {
        if self.open {
            BURGER_OPEN
        } else {
            BURGER_CLOSED
        }
    }
}

/// Element id targeted by an in-page link, e.g. `"#contacto"` -> `"contacto"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll destination for an anchor whose top edge sits at `element_page_top`.
pub fn anchor_scroll_top(element_page_top: f64, offset: f64) -> f64 {
    (element_page_top - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_hidden_only_when_scrolling_down_past_threshold() {
        let mut nav = NavScroll::new(100.0);
        assert_eq!(nav.update(50.0), NavVisibility::Shown);
        assert_eq!(nav.update(100.0), NavVisibility::Shown);
        assert_eq!(nav.update(101.0), NavVisibility::Hidden);
        assert_eq!(nav.update(400.0), NavVisibility::Hidden);
        assert_eq!(nav.update(300.0), NavVisibility::Shown);
        assert_eq!(nav.update(300.0), NavVisibility::Shown);
    }

    #[test]
    fn test_nav_rule_over_offset_grid() {
        let offsets = [-40.0, 0.0, 20.0, 99.0, 100.0, 101.0, 150.0, 2_000.0];
        for &previous in &offsets {
            for &current in &offsets {
                let mut nav = NavScroll::new(100.0);
                nav.update(previous);
                let expected_hidden = current > previous.max(0.0) && current > 100.0;
                let hidden = nav.update(current) == NavVisibility::Hidden;
                assert_eq!(hidden, expected_hidden, "{} -> {}", previous, current);
            }
        }
    }

    #[test]
    fn test_negative_offset_clamped() {
        // Elastic overscroll on mobile reports negative offsets.
        let mut nav = NavScroll::new(100.0);
        nav.update(-60.0);
        assert_eq!(nav.last_offset(), 0.0);
    }

    #[test]
    fn test_menu_toggle_and_icon() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon().middle_opacity, "1");

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), BURGER_OPEN);

        let menu = menu.toggled();
        assert_eq!(menu.icon(), BURGER_CLOSED);
        assert_eq!(MobileMenu::closed(), MobileMenu::default());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#servicios"), Some("servicios"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(1_250.0, 100.0), 1_150.0);
        assert_eq!(anchor_scroll_top(40.0, 100.0), 0.0);
    }
}
