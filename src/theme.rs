#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class applied to the page root; the stylesheet scopes dark colors under it.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Short button text naming the theme a click switches to.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        let controller = ThemeController::default();
        assert!(!controller.theme().is_dark());
        assert_eq!(controller.theme().root_class(), None);
    }

    #[test]
    fn toggle_switches_to_dark_class() {
        let mut controller = ThemeController::default();
        let theme = controller.toggle_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.root_class(), Some("dark"));
        assert!(theme.pressed());
    }

    #[test]
    fn double_toggle_is_identity() {
        for start in [Theme::Light, Theme::Dark] {
            let mut controller = ThemeController::new(start);
            controller.toggle_theme();
            controller.toggle_theme();
            assert_eq!(controller.theme(), start);
        }
    }

    #[test]
    fn labels_name_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.label(), "Dark");
        assert_eq!(Theme::Dark.label(), "Light");
    }
}
