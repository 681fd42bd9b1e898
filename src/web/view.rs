//! View models shared by every page template.

use crate::domain::backdrop::PagePreset;
use crate::domain::entities::ServiceCategory;
use crate::domain::theme::ThemeContext;
use crate::state::AppState;

/// A link inside a mega-menu column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub title: &'static str,
    pub href: String,
}

/// One category column of the mega-menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuColumn {
    pub title: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub links: Vec<MenuLink>,
}

/// Navigation built from the service catalog.
///
/// One model feeds both the desktop mega-menu and the mobile accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub columns: Vec<MenuColumn>,
}

impl NavMenu {
    pub fn from_catalog(categories: &'static [ServiceCategory]) -> Self {
        let columns = categories
            .iter()
            .map(|category| MenuColumn {
                title: category.title,
                icon: category.icon,
                href: category.href(),
                links: category
                    .entries
                    .iter()
                    .map(|entry| MenuLink {
                        title: entry.title,
                        href: category.entry_href(entry),
                    })
                    .collect(),
            })
            .collect();

        Self { columns }
    }
}

/// Everything the base layout needs: title, theme, menu and backdrop key.
#[derive(Debug, Clone)]
pub struct Layout {
    pub title: String,
    pub theme: ThemeContext,
    pub menu: NavMenu,
    pub backdrop: PagePreset,
    /// Current path, used to highlight the active nav item.
    pub path: String,
}

impl Layout {
    pub fn new(
        title: impl Into<String>,
        theme: ThemeContext,
        menu: NavMenu,
        backdrop: PagePreset,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            theme,
            menu,
            backdrop,
            path: path.into(),
        }
    }

    /// Layout for a page, with the menu built from the live catalog.
    pub fn for_page(
        state: &AppState,
        theme: ThemeContext,
        title: impl Into<String>,
        backdrop: PagePreset,
        path: impl Into<String>,
    ) -> Self {
        let menu = NavMenu::from_catalog(state.catalog_service.categories());
        Self::new(title, theme, menu, backdrop, path)
    }

    pub fn backdrop_key(&self) -> &'static str {
        self.backdrop.slug()
    }

    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.path == "/"
        } else {
            self.path.starts_with(prefix)
        }
    }
}
