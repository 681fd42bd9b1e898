//! DTOs for the theme endpoint.

use serde::Serialize;

use crate::domain::theme::ThemeContext;

/// Current theme flag with the derived logo.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: &'static str,
    pub is_dark_mode: bool,
    pub logo_path: &'static str,
}

impl From<ThemeContext> for ThemeResponse {
    fn from(theme: ThemeContext) -> Self {
        Self {
            theme: theme.as_str(),
            is_dark_mode: theme.is_dark_mode,
            logo_path: theme.logo_path(),
        }
    }
}
