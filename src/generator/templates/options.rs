//! Options page: `options.html`, `options.css`, `options.js`

use super::when;
use crate::models::{Configuration, FeatureKind, PermissionKind};
use crate::utils::escape_html;

const CONTEXT_MENU_CARD: &str = r#"
        <div class="settings-card">
          <h2>Context Menu</h2>
          <div class="settings-content">
            <div class="setting-item">
              <label>
                Enable Context Menu
                <input type="checkbox" id="contextMenuEnabled" checked>
              </label>
              <p class="setting-description">Show options when right-clicking on pages</p>
            </div>
            <div class="setting-item">
              <label>Custom Menu Text</label>
              <input type="text" id="contextMenuText" placeholder="Right-click menu text">
            </div>
          </div>
        </div>
"#;

const NOTIFICATIONS_CARD: &str = r#"
        <div class="settings-card">
          <h2>Notifications</h2>
          <div class="settings-content">
            <div class="setting-item">
              <label>
                Enable Notifications
                <input type="checkbox" id="notificationsEnabled" checked>
              </label>
              <p class="setting-description">Show desktop notifications</p>
            </div>
            <div class="setting-item">
              <label>Notification Duration (seconds)</label>
              <input type="number" id="notificationDuration" min="1" max="60" value="5">
            </div>
          </div>
        </div>
"#;

const SHORTCUTS_CARD: &str = r#"
        <div class="settings-card">
          <h2>Keyboard Shortcuts</h2>
          <div class="settings-content">
            <div class="setting-item">
              <button id="configureShortcuts" class="primary-btn">Configure Shortcuts</button>
              <p class="setting-description">Set up custom keyboard shortcuts</p>
            </div>
          </div>
        </div>
"#;

const DATA_CARD: &str = r#"
        <div class="settings-card">
          <h2>Data Management</h2>
          <div class="settings-content">
            <div class="setting-item">
              <button id="exportData" class="secondary-btn">Export Data</button>
              <button id="importData" class="secondary-btn">Import Data</button>
              <input type="file" id="importFile" accept="application/json" style="display: none;">
            </div>
            <div class="setting-item">
              <button id="clearData" class="danger-btn">Clear All Data</button>
              <p class="setting-description">Warning: This will reset all settings</p>
            </div>
          </div>
        </div>
"#;

const PROXY_CARD: &str = r#"
        <div class="settings-card">
          <h2>Proxy Settings</h2>
          <div class="settings-content">
            <div class="setting-item">
              <label>Proxy Server</label>
              <input type="text" id="proxyServer" placeholder="proxy.example.com">
            </div>
            <div class="setting-item">
              <label>Port</label>
              <input type="number" id="proxyPort" placeholder="8080">
            </div>
          </div>
        </div>
"#;

pub fn html(config: &Configuration) -> String {
    let name = escape_html(&config.name);
    let homepage = if config.homepage.is_empty() {
        String::new()
    } else {
        format!(
            "\n        <p><a href=\"{}\" target=\"_blank\">Visit Website</a></p>",
            escape_html(&config.homepage)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{name} Options</title>
  <link rel="stylesheet" href="options.css">
</head>
<body>
  <div class="options-container">
    <header>
      <h1>{name} Settings</h1>
      <p class="version">Version {version}</p>
    </header>

    <main>
      <div class="settings-grid">{context_menu}{notifications}{shortcuts}{data}{proxy}      </div>

      <div class="about-section">
        <h2>About</h2>
        <p>{description}</p>{homepage}
        <p>Created by {author}</p>
      </div>
    </main>

    <footer>
      <button id="saveSettings" class="primary-btn">Save Changes</button>
      <button id="resetSettings" class="secondary-btn">Reset to Defaults</button>
    </footer>
  </div>
  <script src="options.js"></script>
</body>
</html>
"#,
        name = name,
        version = escape_html(&config.version),
        description = escape_html(&config.description),
        author = escape_html(&config.author),
        homepage = homepage,
        context_menu = when(config.has_feature(FeatureKind::ContextMenu), CONTEXT_MENU_CARD),
        notifications = when(config.has_permission(PermissionKind::Notifications), NOTIFICATIONS_CARD),
        shortcuts = when(config.has_feature(FeatureKind::Commands), SHORTCUTS_CARD),
        data = when(config.has_permission(PermissionKind::Storage), DATA_CARD),
        proxy = when(config.has_permission(PermissionKind::Proxy), PROXY_CARD),
    )
}

pub fn css(_config: &Configuration) -> String {
    OPTIONS_CSS.to_string()
}

pub fn js(_config: &Configuration) -> String {
    OPTIONS_JS.to_string()
}

const OPTIONS_CSS: &str = r#"body {
  margin: 0;
  padding: 20px;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: #f8fafc;
  color: #1e293b;
  line-height: 1.5;
}

.options-container {
  max-width: 1000px;
  margin: 0 auto;
  background: white;
  border-radius: 12px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  padding: 24px;
}

header {
  margin-bottom: 32px;
  padding-bottom: 16px;
  border-bottom: 1px solid #e2e8f0;
}

h1 {
  margin: 0;
  font-size: 24px;
  color: #1e293b;
}

.version {
  margin: 4px 0 0;
  color: #64748b;
  font-size: 14px;
}

.settings-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 24px;
  margin-bottom: 32px;
}

.settings-card {
  background: #f8fafc;
  border-radius: 8px;
  padding: 20px;
}

.settings-card h2 {
  margin: 0 0 16px;
  font-size: 18px;
  color: #334155;
}

.settings-content {
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.setting-item {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.setting-item label {
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-weight: 500;
}

.setting-description {
  margin: 0;
  font-size: 14px;
  color: #64748b;
}

input[type="text"],
input[type="number"] {
  padding: 8px 12px;
  border: 1px solid #e2e8f0;
  border-radius: 6px;
  font-size: 14px;
}

input[type="checkbox"] {
  width: 20px;
  height: 20px;
  border-radius: 4px;
  border: 2px solid #cbd5e1;
  appearance: none;
  -webkit-appearance: none;
  outline: none;
  cursor: pointer;
  position: relative;
}

input[type="checkbox"]:checked {
  background-color: #6366f1;
  border-color: #6366f1;
}

input[type="checkbox"]:checked::after {
  content: "✓";
  color: white;
  position: absolute;
  left: 50%;
  top: 50%;
  transform: translate(-50%, -50%);
  font-size: 12px;
}

.about-section {
  background: #f8fafc;
  border-radius: 8px;
  padding: 20px;
  margin-bottom: 32px;
}

.about-section h2 {
  margin: 0 0 16px;
  font-size: 18px;
  color: #334155;
}

.about-section p {
  margin: 8px 0;
  color: #475569;
}

.about-section a {
  color: #6366f1;
  text-decoration: none;
}

.about-section a:hover {
  text-decoration: underline;
}

footer {
  display: flex;
  gap: 12px;
  justify-content: flex-end;
  padding-top: 20px;
  border-top: 1px solid #e2e8f0;
}

.primary-btn,
.secondary-btn,
.danger-btn {
  padding: 8px 16px;
  border: none;
  border-radius: 6px;
  font-size: 14px;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.2s;
}

.primary-btn {
  background: #6366f1;
  color: white;
}

.primary-btn:hover {
  background: #4f46e5;
}

.secondary-btn {
  background: #e2e8f0;
  color: #475569;
}

.secondary-btn:hover {
  background: #cbd5e1;
}

.danger-btn {
  background: #fee2e2;
  color: #ef4444;
}

.danger-btn:hover {
  background: #fecaca;
}

.toast {
  position: fixed;
  bottom: 20px;
  right: 20px;
  padding: 12px 16px;
  border-radius: 6px;
  color: white;
  font-size: 14px;
}

.toast-success {
  background: #16a34a;
}

.toast-error {
  background: #dc2626;
}

@media (max-width: 768px) {
  .options-container {
    padding: 16px;
  }

  .settings-grid {
    grid-template-columns: 1fr;
  }
}
"#;

const OPTIONS_JS: &str = r#"// Options page functionality
document.addEventListener('DOMContentLoaded', function() {
  loadSettings();
  addEventListeners();
});

function loadSettings() {
  if (!chrome.storage) return;

  chrome.storage.sync.get(null, (data) => {
    // Only inputs present on this page are updated
    Object.keys(data).forEach(key => {
      const element = document.getElementById(key);
      if (element) {
        if (element.type === 'checkbox') {
          element.checked = data[key];
        } else {
          element.value = data[key];
        }
      }
    });
  });
}

function addEventListeners() {
  const saveBtn = document.getElementById('saveSettings');
  if (saveBtn) {
    saveBtn.addEventListener('click', saveSettings);
  }

  const resetBtn = document.getElementById('resetSettings');
  if (resetBtn) {
    resetBtn.addEventListener('click', resetSettings);
  }

  const shortcutsBtn = document.getElementById('configureShortcuts');
  if (shortcutsBtn) {
    shortcutsBtn.addEventListener('click', () => {
      chrome.tabs.create({ url: 'chrome://extensions/shortcuts' });
    });
  }

  const exportBtn = document.getElementById('exportData');
  if (exportBtn) {
    exportBtn.addEventListener('click', exportData);
  }

  const importBtn = document.getElementById('importData');
  const importFile = document.getElementById('importFile');
  if (importBtn && importFile) {
    importBtn.addEventListener('click', () => importFile.click());
    importFile.addEventListener('change', importData);
  }

  const clearBtn = document.getElementById('clearData');
  if (clearBtn) {
    clearBtn.addEventListener('click', clearData);
  }
}

function saveSettings() {
  const settings = {};

  document.querySelectorAll('input').forEach(input => {
    if (input.id && input.type !== 'file') {
      settings[input.id] = input.type === 'checkbox' ? input.checked : input.value;
    }
  });

  if (!chrome.storage) {
    showMessage('Storage is not available', 'error');
    return;
  }

  chrome.storage.sync.set(settings, () => {
    showMessage('Settings saved successfully!');
  });
}

function resetSettings() {
  if (!chrome.storage) return;

  if (confirm('Are you sure you want to reset all settings to defaults?')) {
    chrome.storage.sync.clear(() => {
      loadSettings();
      showMessage('Settings reset to defaults');
    });
  }
}

function exportData() {
  chrome.storage.sync.get(null, (data) => {
    const blob = new Blob([JSON.stringify(data, null, 2)], { type: 'application/json' });
    const url = URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = 'extension-settings.json';
    a.click();
    URL.revokeObjectURL(url);
  });
}

function importData(event) {
  const file = event.target.files[0];
  if (file) {
    const reader = new FileReader();
    reader.onload = (e) => {
      try {
        const settings = JSON.parse(e.target.result);
        chrome.storage.sync.set(settings, () => {
          loadSettings();
          showMessage('Settings imported successfully!');
        });
      } catch (error) {
        showMessage('Error importing settings: Invalid file format', 'error');
      }
    };
    reader.readAsText(file);
  }
}

function clearData() {
  if (confirm('Are you sure you want to clear all data? This cannot be undone.')) {
    chrome.storage.sync.clear(() => {
      showMessage('All data cleared successfully');
      loadSettings();
    });
  }
}

function showMessage(message, type = 'success') {
  const toast = document.createElement('div');
  toast.className = `toast toast-${type}`;
  toast.textContent = message;
  document.body.appendChild(toast);

  setTimeout(() => {
    toast.remove();
  }, 3000);
}
"#;
