//! `omnibox.js`

use crate::models::Configuration;

pub fn js(_config: &Configuration) -> String {
    OMNIBOX_JS.to_string()
}

const OMNIBOX_JS: &str = r#"// Add your omnibox JavaScript code here
if (chrome.omnibox) {
  chrome.omnibox.onInputChanged.addListener(function(text, suggest) {
    // Handle omnibox input change
  });

  chrome.omnibox.onInputEntered.addListener(function(text) {
    // Handle omnibox input enter
  });
}
"#;
