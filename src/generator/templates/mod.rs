//! Boilerplate file templates, one group per feature
//!
//! Each template is a pure function of the configuration. Pages carry exactly
//! the element ids their companion script looks up; scripts look every id up
//! defensively because sections come and go with the feature toggles.

pub mod popup;
pub mod options;
pub mod background;
pub mod content;
pub mod devtools;
pub mod context_menu;
pub mod omnibox;

use crate::models::{Configuration, FeatureKind};

pub const ICON_FILE: &str = "icon128.png";

pub struct Template {
    pub path: &'static str,
    pub render: fn(&Configuration) -> String,
}

const POPUP: &[Template] = &[
    Template { path: "popup.html", render: popup::html },
    Template { path: "popup.css", render: popup::css },
    Template { path: "popup.js", render: popup::js },
];

const OPTIONS: &[Template] = &[
    Template { path: "options.html", render: options::html },
    Template { path: "options.css", render: options::css },
    Template { path: "options.js", render: options::js },
];

const BACKGROUND: &[Template] = &[Template { path: "background.js", render: background::js }];

const CONTENT_SCRIPT: &[Template] = &[
    Template { path: "content.js", render: content::js },
    Template { path: "content-styles.css", render: content::css },
];

const DEVTOOLS: &[Template] = &[
    Template { path: "devtools.html", render: devtools::html },
    Template { path: "devtools.js", render: devtools::js },
];

const CONTEXT_MENU: &[Template] = &[Template { path: "contextMenu.js", render: context_menu::js }];

const OMNIBOX: &[Template] = &[Template { path: "omnibox.js", render: omnibox::js }];

/// Files a feature contributes. Commands only touch the manifest.
pub fn templates_for(feature: FeatureKind) -> &'static [Template] {
    match feature {
        FeatureKind::Popup => POPUP,
        FeatureKind::Options => OPTIONS,
        FeatureKind::Background => BACKGROUND,
        FeatureKind::ContentScript => CONTENT_SCRIPT,
        FeatureKind::Devtools => DEVTOOLS,
        FeatureKind::ContextMenu => CONTEXT_MENU,
        FeatureKind::Commands => &[],
        FeatureKind::Omnibox => OMNIBOX,
    }
}

pub fn all_template_paths() -> impl Iterator<Item = &'static str> {
    FeatureKind::ALL
        .iter()
        .flat_map(|feature| templates_for(*feature).iter().map(|template| template.path))
}

/// Include an optional markup section.
pub(crate) fn when(enabled: bool, section: &str) -> &str {
    if enabled {
        section
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_paths_are_unique() {
        let paths: Vec<_> = all_template_paths().collect();
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(paths.len(), unique.len());
        assert_eq!(paths.len(), 13);
    }

    #[test]
    fn test_commands_has_no_files() {
        assert!(templates_for(FeatureKind::Commands).is_empty());
    }
}
