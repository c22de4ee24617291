/// Storage key for the persisted theme preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Body class that switches the stylesheet to light colors.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The literal string written to local storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Resolve a raw stored value. Absent or unrecognized values fall back
    /// to dark, the site's default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            Some("dark") | None => Theme::Dark,
            Some(_) => Theme::Dark,
        }
    }

    /// True when a stored value is neither of the two legal literals.
    pub fn is_unrecognized(value: &str) -> bool {
        value != "dark" && value != "light"
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon class for the theme toggle button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fa-moon",
            Theme::Light => "fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_stored_literals_round_trip() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_value_falls_back_to_dark() {
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert!(Theme::is_unrecognized("solarized"));
        assert!(!Theme::is_unrecognized("light"));
        assert!(!Theme::is_unrecognized("dark"));
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Theme::Dark.icon_class(), "fa-moon");
        assert_eq!(Theme::Light.icon_class(), "fa-sun");
    }
}
