//! Site-wide dark/light theme flag.
//!
//! The whole site shares exactly one piece of UI state: whether dark mode is
//! on. [`ThemeContext`] holds that flag and its single mutator, and every
//! themed class string is derived from it by a pure function.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cookie carrying the visitor's theme choice between requests.
pub const THEME_COOKIE: &str = "theme";

/// The shared theme flag with its toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContext {
    pub is_dark_mode: bool,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeContext {
    pub const fn dark() -> Self {
        Self { is_dark_mode: true }
    }

    pub const fn light() -> Self {
        Self {
            is_dark_mode: false,
        }
    }

    /// Flips the flag. Toggling twice restores the original value.
    pub fn toggle_theme(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    /// Returns the flipped theme without mutating `self`.
    #[must_use]
    pub fn toggled(self) -> Self {
        let mut next = self;
        next.toggle_theme();
        next
    }

    pub fn as_str(&self) -> &'static str {
        if self.is_dark_mode { "dark" } else { "light" }
    }

    /// `Set-Cookie` value persisting this theme for a year.
    pub fn cookie(&self) -> String {
        format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            THEME_COOKIE,
            self.as_str()
        )
    }

    pub fn page_class(&self) -> &'static str {
        if self.is_dark_mode {
            "page bg-slate-950 text-slate-100"
        } else {
            "page bg-white text-slate-900"
        }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.is_dark_mode {
            "nav bg-slate-900/80 border-slate-800 text-slate-100"
        } else {
            "nav bg-white/80 border-slate-200 text-slate-900"
        }
    }

    pub fn menu_panel_class(&self) -> &'static str {
        if self.is_dark_mode {
            "mega-menu bg-slate-900 border-slate-700 shadow-cyan"
        } else {
            "mega-menu bg-white border-slate-200 shadow-slate"
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.is_dark_mode {
            "card bg-slate-900/60 border-cyan-500/20 hover:border-cyan-400"
        } else {
            "card bg-white border-slate-200 hover:border-blue-500"
        }
    }

    pub fn input_class(&self) -> &'static str {
        if self.is_dark_mode {
            "input bg-slate-800 border-slate-600 text-white placeholder-slate-400"
        } else {
            "input bg-white border-slate-300 text-slate-900 placeholder-slate-500"
        }
    }

    pub fn muted_class(&self) -> &'static str {
        if self.is_dark_mode {
            "text-slate-400"
        } else {
            "text-slate-600"
        }
    }

    pub fn logo_path(&self) -> &'static str {
        if self.is_dark_mode {
            "/static/img/logo-light.svg"
        } else {
            "/static/img/logo-dark.svg"
        }
    }

    /// Label of the toggle button, naming the theme it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        }
    }
}

impl fmt::Display for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name is neither `dark` nor `light`.
#[derive(Debug, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeContext {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [ThemeContext::dark(), ThemeContext::light()] {
            let mut theme = start;
            theme.toggle_theme();
            assert_ne!(theme, start);
            theme.toggle_theme();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn test_classes_are_pure_functions_of_flag() {
        let a = ThemeContext::light();
        let b = ThemeContext::dark().toggled();

        assert_eq!(a.page_class(), b.page_class());
        assert_eq!(a.card_class(), b.card_class());
        assert_eq!(a.nav_class(), b.nav_class());
        assert_eq!(a.input_class(), b.input_class());
        assert_eq!(a.logo_path(), b.logo_path());

        assert_ne!(
            ThemeContext::dark().page_class(),
            ThemeContext::light().page_class()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ThemeContext>().unwrap(), ThemeContext::dark());
        assert_eq!(
            " Light ".parse::<ThemeContext>().unwrap(),
            ThemeContext::light()
        );
        assert!("blue".parse::<ThemeContext>().is_err());
    }

    #[test]
    fn test_cookie_value() {
        assert_eq!(
            ThemeContext::light().cookie(),
            "theme=light; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }
}
