//! Service category and service detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::domain::backdrop::PagePreset;
use crate::domain::entities::{ServiceCategory, ServiceEntry};
use crate::domain::theme::ThemeContext;
use crate::state::AppState;
use crate::web::handlers::contact::{ContactFormView, submit_contact_form};
use crate::web::handlers::not_found::not_found_page;
use crate::web::theme::CurrentTheme;
use crate::web::view::Layout;

/// Template for a category landing page.
///
/// Renders `templates/service_category.html` with one card per service,
/// over the category's own backdrop preset.
#[derive(Template, WebTemplate)]
#[template(path = "service_category.html")]
pub struct CategoryTemplate {
    pub layout: Layout,
    pub category: &'static ServiceCategory,
}

impl CategoryTemplate {
    pub fn entry_href(&self, entry: &ServiceEntry) -> String {
        self.category.entry_href(entry)
    }
}

/// Template for a single service with its contact form.
#[derive(Template, WebTemplate)]
#[template(path = "service_detail.html")]
pub struct ServiceTemplate {
    pub layout: Layout,
    pub category: &'static ServiceCategory,
    pub entry: &'static ServiceEntry,
    pub contact: ContactFormView,
}

/// Renders a category page.
///
/// # Endpoint
///
/// `GET /services/{category}`
///
/// Unknown categories render the 404 page.
pub async fn category_page_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    Path(category): Path<String>,
) -> Response {
    let path = format!("/services/{category}");
    let Ok(category) = state.catalog_service.category(&category) else {
        return not_found_page(&state, theme, &path);
    };

    CategoryTemplate {
        layout: Layout::for_page(
            &state,
            theme,
            category.title,
            PagePreset::for_category(category.slug),
            path,
        ),
        category,
    }
    .into_response()
}

fn service_page(
    state: &AppState,
    theme: ThemeContext,
    category: &'static ServiceCategory,
    entry: &'static ServiceEntry,
    contact: ContactFormView,
) -> ServiceTemplate {
    ServiceTemplate {
        layout: Layout::for_page(
            state,
            theme,
            entry.title,
            PagePreset::Service,
            category.entry_href(entry),
        ),
        category,
        entry,
        contact,
    }
}

/// Renders a service page; its contact form is pre-set to the service.
///
/// # Endpoint
///
/// `GET /services/{category}/{service}`
pub async fn service_page_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    Path((category, service)): Path<(String, String)>,
) -> Response {
    let Ok((category, entry)) = state.catalog_service.entry(&category, &service) else {
        return not_found_page(&state, theme, &format!("/services/{category}/{service}"));
    };

    let contact = ContactFormView::empty(category.entry_href(entry), entry.title);
    service_page(&state, theme, category, entry, contact).into_response()
}

/// Handles a service page's contact form.
///
/// # Endpoint
///
/// `POST /services/{category}/{service}`
///
/// The inquiry's service is always the page's service title.
pub async fn service_contact_handler(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    Path((category, service)): Path<(String, String)>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let Ok((category, entry)) = state.catalog_service.entry(&category, &service) else {
        return not_found_page(&state, theme, &format!("/services/{category}/{service}"));
    };

    let (status, contact) =
        submit_contact_form(&state, &category.entry_href(entry), entry.title, &pairs);
    (status, service_page(&state, theme, category, entry, contact)).into_response()
}
