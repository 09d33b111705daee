//! DevTools page: `devtools.html` and `devtools.js`

use crate::models::Configuration;
use crate::utils::escape_html;

pub fn html(config: &Configuration) -> String {
    let name = escape_html(&config.name);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{name} DevTools</title>
</head>
<body>
  <div class="devtools-container">
    <h1>{name} DevTools</h1>
    <div class="devtools-content">
      <!-- Add your devtools content here -->
    </div>
  </div>
  <script src="devtools.js"></script>
</body>
</html>
"#,
        name = name
    )
}

pub fn js(_config: &Configuration) -> String {
    DEVTOOLS_JS.to_string()
}

const DEVTOOLS_JS: &str = r#"// Add your devtools JavaScript code here
document.addEventListener('DOMContentLoaded', function() {
  // Initialize devtools functionality
});
"#;
