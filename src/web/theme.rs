//! Theme cookie extraction and the toggle endpoint.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, LOCATION, REFERER, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::theme::{THEME_COOKIE, ThemeContext};
use crate::state::AppState;

/// The visitor's theme, read from the `theme` cookie.
///
/// Missing or unreadable cookies fall back to [`AppState::default_theme`],
/// so extraction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTheme(pub ThemeContext);

impl FromRequestParts<AppState> for CurrentTheme {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let theme = theme_from_headers(&parts.headers).unwrap_or(state.default_theme);
        Ok(CurrentTheme(theme))
    }
}

/// Parses the theme cookie out of a `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring every
/// cookie but `theme`.
pub fn theme_from_headers(headers: &HeaderMap) -> Option<ThemeContext> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(THEME_COOKIE), Some(value)) => value.trim().parse().ok(),
                _ => None,
            }
        })
}

/// Flips the theme and sends the visitor back where they came from.
///
/// # Endpoint
///
/// `POST /theme/toggle`
///
/// Responds `303 See Other` with a `Set-Cookie` carrying the new theme. The
/// redirect target is the path of the `Referer` header when it points at
/// this site, otherwise `/`.
pub async fn toggle_theme_handler(
    CurrentTheme(theme): CurrentTheme,
    headers: HeaderMap,
) -> Response {
    let next = theme.toggled();
    let target = redirect_target(&headers);
    debug!(from = %theme, to = %next, %target, "Theme toggled");

    let mut response = StatusCode::SEE_OTHER.into_response();
    let response_headers = response.headers_mut();
    if let Ok(cookie) = HeaderValue::from_str(&next.cookie()) {
        response_headers.insert(SET_COOKIE, cookie);
    }
    if let Ok(location) = HeaderValue::from_str(&target) {
        response_headers.insert(LOCATION, location);
    }
    response
}

/// Local path to return to after a toggle. Only same-site paths are honored.
fn redirect_target(headers: &HeaderMap) -> String {
    let Some(referer) = headers.get(REFERER).and_then(|v| v.to_str().ok()) else {
        return "/".to_string();
    };

    let path = match referer.find("://") {
        Some(scheme_end) => {
            let rest = &referer[scheme_end + 3..];
            match rest.find('/') {
                Some(idx) => &rest[idx..],
                None => "/",
            }
        }
        None => referer,
    };

    if path.starts_with('/') && !path.starts_with("//") {
        path.to_string()
    } else {
        "/".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(name: axum::http::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_theme_cookie_among_others() {
        let h = headers(COOKIE, "session=abc; theme=light; other=1");
        assert_eq!(theme_from_headers(&h), Some(ThemeContext::light()));
    }

    #[test]
    fn test_missing_or_bad_cookie() {
        assert_eq!(theme_from_headers(&HeaderMap::new()), None);

        let h = headers(COOKIE, "theme=sepia");
        assert_eq!(theme_from_headers(&h), None);
    }

    #[test]
    fn test_redirect_uses_referer_path() {
        let h = headers(REFERER, "https://example.com/services/tprm?x=1");
        assert_eq!(redirect_target(&h), "/services/tprm?x=1");

        let h = headers(REFERER, "https://example.com");
        assert_eq!(redirect_target(&h), "/");
    }

    #[test]
    fn test_redirect_rejects_protocol_relative() {
        let h = headers(REFERER, "//evil.example/phish");
        assert_eq!(redirect_target(&h), "/");

        assert_eq!(redirect_target(&HeaderMap::new()), "/");
    }
}
