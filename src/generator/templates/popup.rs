//! Browser-action popup: `popup.html`, `popup.css`, `popup.js`

use super::when;
use crate::models::{Configuration, FeatureKind, PermissionKind};
use crate::utils::escape_html;

const SETTINGS_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor">
          <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z"/>
          <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>
        </svg>"#;

const CONTEXT_MENU_TOGGLE: &str = r#"
        <div class="feature-item">
          <h3>Context Menu</h3>
          <label class="switch">
            <input type="checkbox" id="contextMenuToggle">
            <span class="slider"></span>
          </label>
        </div>
"#;

const NOTIFICATIONS_TOGGLE: &str = r#"
        <div class="feature-item">
          <h3>Notifications</h3>
          <label class="switch">
            <input type="checkbox" id="notificationsToggle">
            <span class="slider"></span>
          </label>
        </div>
"#;

const SHORTCUTS_ITEM: &str = r#"
        <div class="feature-item">
          <h3>Keyboard Shortcuts</h3>
          <button id="shortcutsBtn" class="secondary-btn">Configure</button>
        </div>
"#;

const TABS_SECTION: &str = r#"
      <div class="tabs-section">
        <h3>Active Tabs</h3>
        <div id="tabsList" class="tabs-list">
          <!-- Tabs will be populated here -->
        </div>
      </div>
"#;

const HISTORY_SECTION: &str = r#"
      <div class="recent-history">
        <h3>Recent History</h3>
        <div id="historyList" class="history-list">
          <!-- History will be populated here -->
        </div>
      </div>
"#;

const BOOKMARKS_SECTION: &str = r#"
      <div class="bookmarks-section">
        <h3>Quick Bookmarks</h3>
        <div id="bookmarksList" class="bookmarks-list">
          <!-- Bookmarks will be populated here -->
        </div>
      </div>
"#;

const OPTIONS_BUTTON: &str = r#"
        <button id="openOptions" class="secondary-btn">
          <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6V4m0 2a2 2 0 100 4m0-4a2 2 0 110 4m-6 8a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4m6 6v10m6-2a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4"/>
          </svg>
          Options
        </button>
"#;

const REFRESH_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
          </svg>"#;

pub fn html(config: &Configuration) -> String {
    let name = escape_html(&config.name);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{name} Popup</title>
  <link rel="stylesheet" href="popup.css">
</head>
<body>
  <div class="popup-container">
    <header>
      <h1>{name}</h1>
      <button id="settingsBtn" title="Settings">
        {settings_icon}
      </button>
    </header>

    <div class="content">
      <div class="features-list">{context_menu}{notifications}{shortcuts}      </div>
{tabs}{history}{bookmarks}
      <div class="action-buttons">{options}
        <button id="refreshData" class="primary-btn">
          {refresh_icon}
          Refresh
        </button>
      </div>
    </div>
  </div>
  <script src="popup.js"></script>
</body>
</html>
"#,
        name = name,
        settings_icon = SETTINGS_ICON,
        context_menu = when(config.has_feature(FeatureKind::ContextMenu), CONTEXT_MENU_TOGGLE),
        notifications = when(config.has_permission(PermissionKind::Notifications), NOTIFICATIONS_TOGGLE),
        shortcuts = when(config.has_feature(FeatureKind::Commands), SHORTCUTS_ITEM),
        tabs = when(config.has_permission(PermissionKind::Tabs), TABS_SECTION),
        history = when(config.has_permission(PermissionKind::History), HISTORY_SECTION),
        bookmarks = when(config.has_permission(PermissionKind::Bookmarks), BOOKMARKS_SECTION),
        options = when(config.has_feature(FeatureKind::Options), OPTIONS_BUTTON),
        refresh_icon = REFRESH_ICON,
    )
}

pub fn css(_config: &Configuration) -> String {
    POPUP_CSS.to_string()
}

pub fn js(_config: &Configuration) -> String {
    POPUP_JS.to_string()
}

const POPUP_CSS: &str = r#"body {
  width: 350px;
  min-height: 400px;
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: #f8fafc;
}

.popup-container {
  padding: 16px;
}

header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 20px;
  padding-bottom: 12px;
  border-bottom: 1px solid #e2e8f0;
}

h1 {
  font-size: 18px;
  margin: 0;
  color: #1e293b;
}

#settingsBtn {
  background: none;
  border: none;
  color: #64748b;
  cursor: pointer;
}

.content {
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.features-list {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.feature-item {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 8px 12px;
  background: white;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.feature-item h3 {
  margin: 0;
  font-size: 14px;
  color: #334155;
}

/* Switch styles */
.switch {
  position: relative;
  display: inline-block;
  width: 40px;
  height: 24px;
}

.switch input {
  opacity: 0;
  width: 0;
  height: 0;
}

.slider {
  position: absolute;
  cursor: pointer;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background-color: #cbd5e1;
  transition: .4s;
  border-radius: 34px;
}

.slider:before {
  position: absolute;
  content: "";
  height: 18px;
  width: 18px;
  left: 3px;
  bottom: 3px;
  background-color: white;
  transition: .4s;
  border-radius: 50%;
}

input:checked + .slider {
  background-color: #6366f1;
}

input:checked + .slider:before {
  transform: translateX(16px);
}

/* Buttons */
.action-buttons {
  display: flex;
  gap: 8px;
  margin-top: 12px;
}

.primary-btn,
.secondary-btn {
  display: inline-flex;
  align-items: center;
  gap: 6px;
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

/* Lists */
.tabs-list,
.history-list,
.bookmarks-list {
  background: white;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  max-height: 200px;
  overflow-y: auto;
}

.list-item {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 8px 12px;
  border-bottom: 1px solid #e2e8f0;
  font-size: 13px;
  color: #334155;
}

.list-item:last-child {
  border-bottom: none;
}

.list-item img {
  width: 16px;
  height: 16px;
}

/* Scrollbar */
::-webkit-scrollbar {
  width: 8px;
}

::-webkit-scrollbar-track {
  background: #f1f1f1;
}

::-webkit-scrollbar-thumb {
  background: #cbd5e1;
  border-radius: 4px;
}

::-webkit-scrollbar-thumb:hover {
  background: #94a3b8;
}
"#;

const POPUP_JS: &str = r#"// Popup functionality
document.addEventListener('DOMContentLoaded', function() {
  initializeUI();
  loadSettings();
  loadDynamicContent();
  addEventListeners();
});

function initializeUI() {
  const settingsBtn = document.getElementById('settingsBtn');
  if (settingsBtn) {
    settingsBtn.addEventListener('click', () => {
      chrome.runtime.openOptionsPage();
    });
  }
}

function loadSettings() {
  if (!chrome.storage) return;

  chrome.storage.sync.get(null, (data) => {
    const contextMenuToggle = document.getElementById('contextMenuToggle');
    if (contextMenuToggle) {
      contextMenuToggle.checked = data.contextMenuEnabled ?? true;
    }

    const notificationsToggle = document.getElementById('notificationsToggle');
    if (notificationsToggle) {
      notificationsToggle.checked = data.notificationsEnabled ?? true;
    }
  });
}

function escapeText(text) {
  const span = document.createElement('span');
  span.textContent = text || '';
  return span.innerHTML;
}

function loadDynamicContent() {
  // Each list only exists when the matching permission was requested
  const tabsList = document.getElementById('tabsList');
  if (tabsList && chrome.tabs) {
    chrome.tabs.query({ currentWindow: true }, (tabs) => {
      tabsList.innerHTML = tabs.map(tab => `
        <div class="list-item">
          <img src="${tab.favIconUrl || 'icon128.png'}" alt="Tab icon">
          <span>${escapeText(tab.title)}</span>
        </div>
      `).join('');
    });
  }

  const historyList = document.getElementById('historyList');
  if (historyList && chrome.history) {
    chrome.history.search({ text: '', maxResults: 5 }, (results) => {
      historyList.innerHTML = results.map(item => `
        <div class="list-item">
          <span>${escapeText(item.title)}</span>
        </div>
      `).join('');
    });
  }

  const bookmarksList = document.getElementById('bookmarksList');
  if (bookmarksList && chrome.bookmarks) {
    chrome.bookmarks.getRecent(5, (bookmarks) => {
      bookmarksList.innerHTML = bookmarks.map(bookmark => `
        <div class="list-item">
          <span>${escapeText(bookmark.title)}</span>
        </div>
      `).join('');
    });
  }
}

function addEventListeners() {
  const contextMenuToggle = document.getElementById('contextMenuToggle');
  if (contextMenuToggle) {
    contextMenuToggle.addEventListener('change', (e) => {
      if (chrome.storage) {
        chrome.storage.sync.set({ contextMenuEnabled: e.target.checked });
      }
      chrome.runtime.sendMessage({
        action: 'updateContextMenu',
        enabled: e.target.checked
      });
    });
  }

  const notificationsToggle = document.getElementById('notificationsToggle');
  if (notificationsToggle) {
    notificationsToggle.addEventListener('change', (e) => {
      if (chrome.storage) {
        chrome.storage.sync.set({ notificationsEnabled: e.target.checked });
      }
    });
  }

  const refreshData = document.getElementById('refreshData');
  if (refreshData) {
    refreshData.addEventListener('click', () => {
      loadDynamicContent();
    });
  }

  const openOptions = document.getElementById('openOptions');
  if (openOptions) {
    openOptions.addEventListener('click', () => {
      chrome.runtime.openOptionsPage();
    });
  }

  const shortcutsBtn = document.getElementById('shortcutsBtn');
  if (shortcutsBtn) {
    shortcutsBtn.addEventListener('click', () => {
      chrome.tabs.create({ url: 'chrome://extensions/shortcuts' });
    });
  }
}
"#;
