use crate::models::Admin;
use crate::services::session::{AuthState, AuthStatus};

/// Permission keys assigned to sub admins.
pub mod keys {
    pub const PROMOTIONS: &str = "promotions";
    pub const SLIDERS: &str = "sliders";
    pub const NOTICE: &str = "notice";
    pub const BANNERS: &str = "banners";
    pub const DOWNLOADS: &str = "downloads";
    pub const FOOTER: &str = "footer";
    pub const FLOATING_SOCIAL: &str = "floating-social";
    pub const SITE_BRANDING: &str = "site-branding";
    pub const AFF_COMMISSION: &str = "aff-commission";
    pub const AFF_CONTENT: &str = "aff-content";
    pub const AFF_NOTICE: &str = "aff-notice";
    pub const AFF_SLIDER: &str = "aff-slider";
    pub const AFF_FOOTER: &str = "aff-footer";
    pub const AFF_SITE_META: &str = "aff-site-meta";
    pub const AFF_FLOATING_SOCIAL: &str = "aff-floating-social";

    /// Every key, in the order the admin-management form lists them.
    pub const ALL: [&str; 15] = [
        PROMOTIONS,
        SLIDERS,
        NOTICE,
        BANNERS,
        DOWNLOADS,
        FOOTER,
        FLOATING_SOCIAL,
        SITE_BRANDING,
        AFF_COMMISSION,
        AFF_CONTENT,
        AFF_NOTICE,
        AFF_SLIDER,
        AFF_FOOTER,
        AFF_SITE_META,
        AFF_FLOATING_SOCIAL,
    ];
}

/// `mother` can do anything; `sub` only what its list names.
pub fn can(admin: Option<&Admin>, key: &str) -> bool {
    match admin {
        Some(a) if a.is_mother() => true,
        Some(a) => a.permissions.iter().any(|p| p == key),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RouteRule {
    pub path: &'static str,
    pub label: &'static str,
    pub permission: Option<&'static str>,
    pub mother_only: bool,
}

impl RouteRule {
    pub const fn open(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            permission: None,
            mother_only: false,
        }
    }

    pub const fn gated(path: &'static str, label: &'static str, key: &'static str) -> Self {
        Self {
            path,
            label,
            permission: Some(key),
            mother_only: false,
        }
    }

    pub const fn mother(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            permission: None,
            mother_only: true,
        }
    }

    /// Role and permission check only; authentication is the guard's job.
    pub fn allows(&self, admin: Option<&Admin>) -> bool {
        if self.mother_only {
            return admin.is_some_and(Admin::is_mother);
        }
        match self.permission {
            Some(key) => can(admin, key),
            None => admin.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GuardDecision {
    /// Session not rehydrated yet: render a neutral placeholder.
    Pending,
    RedirectToLogin,
    Forbidden,
    Allow,
}

pub fn guard(state: &AuthState, rule: &RouteRule) -> GuardDecision {
    match state.status() {
        AuthStatus::Loading => GuardDecision::Pending,
        AuthStatus::Unauthenticated => GuardDecision::RedirectToLogin,
        AuthStatus::Authenticated if rule.allows(state.admin.as_ref()) => GuardDecision::Allow,
        AuthStatus::Authenticated => GuardDecision::Forbidden,
    }
}

/// Routes of the admin app; the sidebar lists them in this order.
pub const ADMIN_ROUTES: &[RouteRule] = &[
    RouteRule::open("/", "Dashboard"),
    RouteRule::open("/profile", "Profile"),
    RouteRule::mother("/admins", "Admins"),
    RouteRule::gated("/promotions", "Promotions", keys::PROMOTIONS),
    RouteRule::gated("/sliders", "Sliders", keys::SLIDERS),
    RouteRule::gated("/notice", "Notice", keys::NOTICE),
    RouteRule::gated("/single-banner", "Single banner", keys::BANNERS),
    RouteRule::gated("/two-banner", "Two banners", keys::BANNERS),
    RouteRule::gated("/banner-videos", "Banner videos", keys::BANNERS),
    RouteRule::gated("/download-header", "Download header", keys::DOWNLOADS),
    RouteRule::gated("/download-banner", "Download banner", keys::DOWNLOADS),
    RouteRule::gated("/footer", "Footer", keys::FOOTER),
    RouteRule::gated("/floating-social", "Floating social", keys::FLOATING_SOCIAL),
    RouteRule::gated("/site-branding", "Site branding", keys::SITE_BRANDING),
    RouteRule::gated("/aff-commission", "Affiliate commission", keys::AFF_COMMISSION),
    RouteRule::gated("/aff-commission-color", "Commission colors", keys::AFF_COMMISSION),
    RouteRule::gated("/aff-agent", "Affiliate agent", keys::AFF_CONTENT),
    RouteRule::gated("/aff-whyus", "Affiliate why us", keys::AFF_CONTENT),
    RouteRule::gated("/aff-notice", "Affiliate notice", keys::AFF_NOTICE),
    RouteRule::gated("/aff-slider", "Affiliate slider", keys::AFF_SLIDER),
    RouteRule::gated("/aff-footer", "Affiliate footer", keys::AFF_FOOTER),
    RouteRule::gated("/aff-site-meta", "Affiliate site meta", keys::AFF_SITE_META),
    RouteRule::gated("/aff-floating-social", "Affiliate floating social", keys::AFF_FLOATING_SOCIAL),
];

pub fn route_rule(path: &str) -> Option<&'static RouteRule> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    ADMIN_ROUTES.iter().find(|r| r.path == path)
}

/// Sidebar entries the admin may open.
pub fn visible_menu(admin: Option<&Admin>) -> Vec<&'static RouteRule> {
    ADMIN_ROUTES.iter().filter(|r| r.allows(admin)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sub(perms: &[&str]) -> Admin {
        Admin {
            email: "sub@brand.io".into(),
            role: Role::Sub,
            permissions: perms.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn route_rule_lookup_ignores_trailing_slash() {
        assert_eq!(route_rule("/aff-notice/").map(|r| r.label), Some("Affiliate notice"));
        assert_eq!(route_rule("").map(|r| r.path), Some("/"));
        assert!(route_rule("/nope").is_none());
    }

    #[test]
    fn sub_menu_shows_open_and_granted_entries_only() {
        let admin = sub(&[keys::AFF_NOTICE]);
        let paths: Vec<_> = visible_menu(Some(&admin)).iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/profile", "/aff-notice"]);
        assert!(visible_menu(None).is_empty());
    }

    #[test]
    fn every_gated_route_uses_a_known_key() {
        for rule in ADMIN_ROUTES {
            if let Some(key) = rule.permission {
                assert!(keys::ALL.contains(&key), "{} uses unknown key {}", rule.path, key);
            }
        }
    }
}
