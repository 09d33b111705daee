//! `contextMenu.js`

use crate::models::Configuration;

pub fn js(_config: &Configuration) -> String {
    CONTEXT_MENU_JS.to_string()
}

const CONTEXT_MENU_JS: &str = r#"// Add your context menu JavaScript code here
if (chrome.contextMenus) {
  chrome.contextMenus.create({
    id: 'context-menu',
    title: 'Context menu',
    contexts: ['all']
  });

  chrome.contextMenus.onClicked.addListener(function(info, tab) {
    // Handle context menu click
  });
}
"#;
