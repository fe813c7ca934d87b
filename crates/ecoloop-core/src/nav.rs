//! Navigation tables and the navigation collaborator seam.

use serde::Serialize;

/// Where a signed-out player lands (the login page).
pub const ANONYMOUS_LANDING: &str = "/";

/// Home for a signed-in player.
pub const AUTHENTICATED_HOME: &str = "/dashboard";

/// Player profile. Rendered as the avatar rather than a tool icon.
pub const PROFILE_PATH: &str = "/profile";

/// A static link in the header.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// Primary navigation shown to signed-in players.
pub const PRIMARY_NAV: [NavItem; 4] = [
    NavItem::new("/dashboard", "Play"),
    NavItem::new("/community", "Community"),
    NavItem::new("/about", "About"),
    NavItem::new("/contact", "Contact"),
];

/// Links shown to anonymous visitors, login last.
pub const ANONYMOUS_LINKS: [NavItem; 3] = [
    NavItem::new("/about", "About"),
    NavItem::new("/contact", "Contact"),
    NavItem::new(ANONYMOUS_LANDING, "Login"),
];

/// Route-backed tool icons next to the overlay triggers.
pub const TOOL_LINKS: [NavItem; 3] = [
    NavItem::new("/leaderboard", "Leaderboard"),
    NavItem::new("/store", "Store"),
    NavItem::new(PROFILE_PATH, "Profile"),
];

/// Router access, supplied by the host application.
pub trait Navigator {
    fn current_path(&self) -> String;

    /// Fire-and-forget navigation.
    fn navigate_to(&mut self, path: &str);
}

/// Whether `item_path` is the page currently shown. Trailing slashes are
/// ignored except for the root.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    normalize(item_path) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_the_last_tool_link() {
        let profile = TOOL_LINKS.iter().find(|t| t.path == PROFILE_PATH).unwrap();
        assert_eq!(profile.label, "Profile");
        assert_eq!(TOOL_LINKS.last().map(|t| t.path), Some(PROFILE_PATH));
    }

    #[test]
    fn exact_match_is_active() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(!is_active("/dashboard", "/community"));
    }

    #[test]
    fn trailing_slash_and_query_ignored() {
        assert!(is_active("/about", "/about/"));
        assert!(is_active("/store", "/store?tab=seeds"));
        assert!(is_active("/", ""));
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn prefix_is_not_active() {
        assert!(!is_active("/dashboard", "/dashboard-old"));
        assert!(!is_active("/store", "/store/items"));
    }

    #[test]
    fn tables_match_header_layout() {
        let labels: Vec<_> = PRIMARY_NAV.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Play", "Community", "About", "Contact"]);
        assert_eq!(PRIMARY_NAV[0].path, AUTHENTICATED_HOME);
        assert_eq!(ANONYMOUS_LINKS[2].label, "Login");
        assert_eq!(ANONYMOUS_LINKS[2].path, ANONYMOUS_LANDING);
    }
}
