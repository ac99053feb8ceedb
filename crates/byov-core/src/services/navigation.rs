//! Navigation bar: identity-aware links, search dispatch, theme toggle.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use super::theme::Theme;
use crate::domain::AuthState;

pub const BRAND: &str = "BYOV";

/// Where logging out lands.
pub const AFTER_LOGOUT: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    Link(NavLink),
    /// Opens the search box.
    Search,
    ThemeToggle { current: Theme, next: Theme },
    Logout { redirect: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLayout {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    pub brand: &'static str,
    pub home: &'static str,
    /// False while auth is resolving; the bar renders empty.
    pub ready: bool,
    pub items: Vec<NavItem>,
}

/// Build the navigation bar for `auth`.
pub fn nav_menu(auth: &AuthState, theme: Theme, layout: NavLayout) -> NavMenu {
    if auth.loading {
        return NavMenu {
            brand: BRAND,
            home: "/",
            ready: false,
            items: Vec::new(),
        };
    }

    let toggle = NavItem::ThemeToggle {
        current: theme,
        next: theme.toggled(),
    };
    let mut items = Vec::new();
    if layout == NavLayout::Mobile {
        items.push(toggle.clone());
    }
    items.push(NavItem::Link(NavLink::new("Home", "/")));
    items.push(NavItem::Search);

    match &auth.identity {
        Some(identity) => {
            let private = match layout {
                NavLayout::Desktop => "Private",
                NavLayout::Mobile => "Private Verses",
            };
            items.push(NavItem::Link(NavLink::new("Create", "/create")));
            items.push(NavItem::Link(NavLink::new(private, "/private-verses")));
            items.push(NavItem::Link(NavLink::new(
                "Profile",
                profile_href(&identity.uid),
            )));
            if layout == NavLayout::Desktop {
                items.push(toggle);
            }
            items.push(NavItem::Logout {
                redirect: AFTER_LOGOUT,
            });
        }
        None => {
            items.push(NavItem::Link(NavLink::new("Login", "/login")));
            if layout == NavLayout::Desktop {
                items.push(toggle);
            }
            items.push(NavItem::Link(NavLink::new("Sign Up", "/signup")));
        }
    }

    NavMenu {
        brand: BRAND,
        home: "/",
        ready: true,
        items,
    }
}

pub fn profile_href(uid: &str) -> String {
    format!("/profile/{uid}")
}

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, so a space
/// becomes `%20`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Location for a search, or `None` when the query is blank.
pub fn search_location(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let encoded = utf8_percent_encode(query, QUERY_COMPONENT);
    Some(format!("/search?q={encoded}"))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::Identity;

    fn ada() -> AuthState {
        AuthState::signed_in(Identity {
            uid: "u-ada".to_string(),
            email: "ada@example.com".to_string(),
            roles: vec!["user".to_string()],
            token_id: "t1".to_string(),
            expires_at: Utc::now(),
        })
    }

    fn hrefs(menu: &NavMenu) -> Vec<&str> {
        menu.items
            .iter()
            .filter_map(|item| match item {
                NavItem::Link(link) => Some(link.href.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_resolving_auth_renders_empty_bar() {
        let menu = nav_menu(&AuthState::resolving(), Theme::System, NavLayout::Desktop);
        assert!(!menu.ready);
        assert!(menu.items.is_empty());
    }

    #[test]
    fn test_signed_in_links() {
        let menu = nav_menu(&ada(), Theme::Dark, NavLayout::Desktop);

        assert_eq!(
            hrefs(&menu),
            vec!["/", "/create", "/private-verses", "/profile/u-ada"]
        );
        assert!(menu.items.contains(&NavItem::Logout { redirect: "/login" }));
        assert!(menu.items.contains(&NavItem::ThemeToggle {
            current: Theme::Dark,
            next: Theme::Light,
        }));
    }

    #[test]
    fn test_anonymous_links() {
        let menu = nav_menu(&AuthState::anonymous(), Theme::Light, NavLayout::Desktop);

        assert_eq!(hrefs(&menu), vec!["/", "/login", "/signup"]);
        assert!(
            !menu
                .items
                .iter()
                .any(|i| matches!(i, NavItem::Logout { .. }))
        );
    }

    #[test]
    fn test_mobile_labels() {
        let menu = nav_menu(&ada(), Theme::System, NavLayout::Mobile);

        assert!(matches!(menu.items[0], NavItem::ThemeToggle { .. }));
        assert!(menu.items.contains(&NavItem::Link(NavLink::new(
            "Private Verses",
            "/private-verses"
        ))));
    }

    #[test]
    fn test_search_location() {
        assert_eq!(search_location("   "), None);
        assert_eq!(search_location(""), None);
        assert_eq!(search_location("  ada  ").as_deref(), Some("/search?q=ada"));
        assert_eq!(
            search_location("rain & moss").as_deref(),
            Some("/search?q=rain%20%26%20moss")
        );
        assert_eq!(
            search_location("(wild) ferns!").as_deref(),
            Some("/search?q=(wild)%20ferns!")
        );
        assert_eq!(
            search_location("café+tea").as_deref(),
            Some("/search?q=caf%C3%A9%2Btea")
        );
    }
}
