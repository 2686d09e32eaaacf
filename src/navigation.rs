#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.is_open
    }

    pub fn toggled(self) -> Self {
        Self {
            is_open: !self.is_open,
        }
    }

    pub fn closed(self) -> Self {
        Self { is_open: false }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.is_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn icon(self) -> &'static str {
        if self.is_open {
            "✕"
        } else {
            "☰"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    MissingTarget,
}

impl ScrollOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scrolled => "scrolled",
            Self::MissingTarget => "missing_target",
        }
    }
}

/// Host capability that brings an element into view with smooth easing.
pub trait ScrollHost {
    fn scroll_smoothly_to(&self, section_id: &str) -> ScrollOutcome;
}

/// Owns the menu flag and the scroll capability used by section links.
pub struct NavigationController<H> {
    menu: MenuState,
    host: H,
}

impl<H: ScrollHost> NavigationController<H> {
    pub fn new(menu: MenuState, host: H) -> Self {
        Self { menu, host }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    /// The menu is closed even when `section_id` names no element.
    pub fn navigate_to(&mut self, section_id: &str) -> ScrollOutcome {
        let outcome = self.host.scroll_smoothly_to(section_id);
        self.menu = self.menu.closed();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingHost {
        known: &'static [&'static str],
        requested: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn new(known: &'static [&'static str]) -> Self {
            Self {
                known,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for &RecordingHost {
        fn scroll_smoothly_to(&self, section_id: &str) -> ScrollOutcome {
            self.requested.borrow_mut().push(section_id.to_string());
            if self.known.iter().any(|known| *known == section_id) {
                ScrollOutcome::Scrolled
            } else {
                ScrollOutcome::MissingTarget
            }
        }
    }

    #[test]
    fn toggle_twice_restores_menu() {
        let host = RecordingHost::new(&[]);
        for start in [MenuState::default(), MenuState::default().toggled()] {
            let mut controller = NavigationController::new(start, &host);
            controller.toggle_menu();
            controller.toggle_menu();
            assert_eq!(controller.menu(), start);
        }
    }

    #[test]
    fn navigation_scrolls_and_closes_menu() {
        let host = RecordingHost::new(&["about", "contact"]);
        let mut controller = NavigationController::new(MenuState::default(), &host);
        assert!(controller.toggle_menu().is_open());

        assert_eq!(controller.navigate_to("contact"), ScrollOutcome::Scrolled);
        assert!(!controller.menu().is_open());
        assert_eq!(*host.requested.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn missing_target_is_absorbed_and_still_closes_menu() {
        let host = RecordingHost::new(&["about"]);
        let mut controller = NavigationController::new(MenuState::default().toggled(), &host);

        assert_eq!(controller.navigate_to("nonexistent-id"), ScrollOutcome::MissingTarget);
        assert!(!controller.menu().is_open());
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        let host = RecordingHost::new(&["projects"]);
        let mut controller = NavigationController::new(MenuState::default(), &host);
        controller.navigate_to("projects");
        assert!(!controller.menu().is_open());
    }

    #[test]
    fn labels_follow_menu_state() {
        let closed = MenuState::default();
        assert_eq!(closed.toggle_label(), "Open menu");
        assert_eq!(closed.toggled().toggle_label(), "Close menu");
        assert_ne!(closed.icon(), closed.toggled().icon());
    }
}
