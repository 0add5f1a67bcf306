//! # Routes
//!
//! Path resolution, access gating and the header navigation.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path             Route          Signed out        Non-admin           │
//! │  ────             ─────          ──────────        ─────────           │
//! │  /                Home           render            render              │
//! │  /login           Login          render            render              │
//! │  /book            Booking        render            render              │
//! │  /menu            Menu           render            render              │
//! │  /confirmation    Confirmation   render            render              │
//! │  /reservations    Reservations   → /login          render              │
//! │  /admin           Admin          → /login          access denied       │
//! │  anything else    NotFound       404               404                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use reservease_store::AuthStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Login,
    Booking,
    Menu,
    Confirmation,
    Reservations,
    Admin,
    NotFound,
}

impl Route {
    /// Maps a path to its route. A trailing slash and query string are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/book" => Route::Booking,
            "/menu" => Route::Menu,
            "/confirmation" => Route::Confirmation,
            "/reservations" => Route::Reservations,
            "/admin" => Route::Admin,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Booking => "/book",
            Route::Menu => "/menu",
            Route::Confirmation => "/confirmation",
            Route::Reservations => "/reservations",
            Route::Admin => "/admin",
            Route::NotFound => "/404",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Reservations | Route::Admin)
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, Route::Admin)
    }
}

/// What the shell should do for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Navigation {
    Render { route: Route },
    Redirect { to: String },
    AccessDenied { title: String, message: String },
    NotFound { title: String, message: String },
}

impl Navigation {
    pub fn redirect(route: Route) -> Self {
        Navigation::Redirect {
            to: route.path().to_string(),
        }
    }
}

/// Resolves `path` and applies the route guards.
pub fn navigate(path: &str, auth: &AuthStore) -> Navigation {
    let route = Route::resolve(path);

    let outcome = if route == Route::NotFound {
        Navigation::NotFound {
            title: "Page Not Found".to_string(),
            message: "We couldn't find the page you were looking for. Perhaps you took a wrong turn?".to_string(),
        }
    } else if route.requires_auth() && !auth.is_authenticated() {
        Navigation::redirect(Route::Login)
    } else if route.admin_only() && !auth.is_admin() {
        Navigation::AccessDenied {
            title: "Access Denied".to_string(),
            message: "You need administrator privileges to access this page.".to_string(),
        }
    } else {
        Navigation::Render { route }
    };

    debug!(path, ?outcome, "Navigation resolved");
    outcome
}

// =============================================================================
// Header Navigation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    fn to(label: &str, route: Route) -> Self {
        NavLink {
            label: label.to_string(),
            path: route.path().to_string(),
        }
    }
}

/// Header links for the signed-in user. Empty when signed out.
pub fn nav_links(auth: &AuthStore) -> Vec<NavLink> {
    if !auth.is_authenticated() {
        return Vec::new();
    }

    let mut links = vec![
        NavLink::to("Home", Route::Home),
        NavLink::to("Reservations", Route::Reservations),
    ];
    if auth.is_admin() {
        links.push(NavLink::to("Admin", Route::Admin));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservease_core::Role;

    #[test]
    fn test_resolve() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/book/"), Route::Booking);
        assert_eq!(Route::resolve("/admin?tab=all"), Route::Admin);
        assert_eq!(Route::resolve("/menu/"), Route::Menu);
        assert_eq!(Route::resolve("/menus"), Route::NotFound);
        assert_eq!(Route::resolve("/book/extra"), Route::NotFound);
    }

    #[test]
    fn test_guards_signed_out() {
        let auth = AuthStore::demo();
        assert_eq!(
            navigate("/reservations", &auth),
            Navigation::Redirect {
                to: "/login".to_string()
            }
        );
        assert_eq!(navigate("/admin", &auth), Navigation::redirect(Route::Login));
        assert_eq!(
            navigate("/book", &auth),
            Navigation::Render {
                route: Route::Booking
            }
        );
        assert_eq!(navigate("/menu", &auth), Navigation::Render { route: Route::Menu });
        assert!(matches!(navigate("/nope", &auth), Navigation::NotFound { .. }));
    }

    #[test]
    fn test_admin_guard() {
        let mut auth = AuthStore::demo();
        auth.login(Role::Staff);
        assert!(matches!(navigate("/admin", &auth), Navigation::AccessDenied { .. }));
        assert_eq!(
            navigate("/reservations", &auth),
            Navigation::Render {
                route: Route::Reservations
            }
        );

        auth.login(Role::Admin);
        assert_eq!(
            navigate("/admin", &auth),
            Navigation::Render { route: Route::Admin }
        );
    }

    #[test]
    fn test_nav_links_per_role() {
        let mut auth = AuthStore::demo();
        assert!(nav_links(&auth).is_empty());

        auth.login(Role::Customer);
        let labels: Vec<String> = nav_links(&auth).into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Reservations"]);

        auth.login(Role::Admin);
        let links = nav_links(&auth);
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].path, "/admin");
    }
}
