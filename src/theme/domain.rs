//! The theme values and their string forms.

use std::{fmt::Display, str::FromStr};

/// The colour scheme of the UI.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The name of the theme, which doubles as the CSS class applied to the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was neither "dark" nor "light".
#[derive(Debug, PartialEq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, UnknownTheme};

    #[test]
    fn theme_string_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse(), Ok(theme));
        }
    }

    #[test]
    fn parse_rejects_unknown_theme() {
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(UnknownTheme("Dark".to_owned()))
        );
    }

    #[test]
    fn toggled_alternates() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
