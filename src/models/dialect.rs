//! Per-platform manifest dialect table
//!
//! Chromium and Firefox describe the same extension with two dialects of the
//! same document. Every platform difference the compiler knows about lives in
//! this file; the compiler itself never branches on the platform.

use super::config::{FeatureKind, PermissionKind, TargetPlatform};

/// Key under which the toolbar button is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKey {
    /// `action` (Manifest V3)
    Action,
    /// `browser_action` (Manifest V2)
    BrowserAction,
}

/// How the background page is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// `background.service_worker` + `type: "module"`
    ServiceWorker,
    /// `background.scripts`
    Scripts,
}

/// Where content-script match patterns are granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostGrant {
    /// Appended to `permissions`.
    InPermissions,
    /// Granted through `host_permissions`, which is only written when the
    /// caller opts in (see `ManifestOptions::chromium_host_permissions`).
    HostPermissions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub platform: TargetPlatform,
    pub manifest_version: u8,
    pub action_key: ActionKey,
    pub background: BackgroundStyle,
    pub options_browser_style: bool,
    pub host_grant: HostGrant,
    pub gecko_id: bool,
}

pub const CHROMIUM: Dialect = Dialect {
    platform: TargetPlatform::Chromium,
    manifest_version: 3,
    action_key: ActionKey::Action,
    background: BackgroundStyle::ServiceWorker,
    options_browser_style: false,
    host_grant: HostGrant::HostPermissions,
    gecko_id: false,
};

pub const FIREFOX: Dialect = Dialect {
    platform: TargetPlatform::Firefox,
    manifest_version: 2,
    action_key: ActionKey::BrowserAction,
    background: BackgroundStyle::Scripts,
    options_browser_style: true,
    host_grant: HostGrant::InPermissions,
    gecko_id: true,
};

/// Permission strings one toggle contributes, per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionRule {
    pub chromium: &'static [&'static str],
    pub firefox: &'static [&'static str],
}

impl PermissionRule {
    pub fn entries(&self, platform: TargetPlatform) -> &'static [&'static str] {
        match platform {
            TargetPlatform::Chromium => self.chromium,
            TargetPlatform::Firefox => self.firefox,
        }
    }
}

/// Chromium takes the toggle name verbatim; Firefox gets an explicit list.
pub fn permission_rule(permission: PermissionKind) -> PermissionRule {
    match permission {
        PermissionKind::Storage => same(&["storage"]),
        PermissionKind::Tabs => same(&["tabs"]),
        PermissionKind::ActiveTab => same(&["activeTab"]),
        PermissionKind::Notifications => same(&["notifications"]),
        PermissionKind::WebRequest => PermissionRule {
            chromium: &["webRequest"],
            firefox: &["webRequest", "webRequestBlocking"],
        },
        PermissionKind::Cookies => same(&["cookies"]),
        PermissionKind::Downloads => same(&["downloads"]),
        PermissionKind::History => same(&["history"]),
        PermissionKind::Bookmarks => same(&["bookmarks"]),
        PermissionKind::Proxy => same(&["proxy"]),
    }
}

/// Permissions implied by a feature rather than a permission toggle.
pub fn feature_permission_rule(feature: FeatureKind) -> Option<PermissionRule> {
    match feature {
        FeatureKind::ContextMenu => Some(PermissionRule {
            chromium: &["contextMenus"],
            firefox: &["menus"],
        }),
        _ => None,
    }
}

const fn same(entries: &'static [&'static str]) -> PermissionRule {
    PermissionRule {
        chromium: entries,
        firefox: entries,
    }
}
