//! `background.js`: settings cache, context menu, notifications, popup messages
//!
//! The only declared command is `_execute_action`, which the browser handles
//! itself, so the script registers no command listener.

use crate::models::Configuration;

pub fn js(_config: &Configuration) -> String {
    BACKGROUND_JS.to_string()
}

// Platform APIs are probed before use; a missing permission leaves that
// part of the script inert instead of throwing at load time.
const BACKGROUND_JS: &str = r#"// Background script functionality
let settings = {};

chrome.runtime.onInstalled.addListener(function() {
  loadSettings();
});

chrome.runtime.onStartup?.addListener(function() {
  loadSettings();
});

// Listen for messages from popup and content scripts
chrome.runtime.onMessage.addListener(function(message, sender, sendResponse) {
  switch (message.action) {
    case 'updateContextMenu':
      updateSettings({ contextMenuEnabled: message.enabled });
      break;
    case 'getSettings':
      sendResponse(settings);
      break;
    case 'updateSettings':
      updateSettings(message.settings || {});
      break;
  }
});

function loadSettings() {
  if (!chrome.storage) {
    settings = { contextMenuEnabled: true, notificationsEnabled: true };
    setupContextMenu();
    return;
  }

  chrome.storage.sync.get(null, (data) => {
    settings = data || {};

    if (typeof settings.contextMenuEnabled === 'undefined') {
      settings.contextMenuEnabled = true;
    }
    if (typeof settings.notificationsEnabled === 'undefined') {
      settings.notificationsEnabled = true;
    }

    chrome.storage.sync.set(settings);
    setupContextMenu();
  });
}

function setupContextMenu() {
  if (!chrome.contextMenus) return;

  chrome.contextMenus.removeAll(() => {
    if (!settings.contextMenuEnabled) return;

    chrome.contextMenus.create({
      id: 'mainContext',
      title: settings.contextMenuText || 'Extension Action',
      contexts: ['all']
    });

    chrome.contextMenus.create({
      id: 'subAction1',
      parentId: 'mainContext',
      title: 'Action 1',
      contexts: ['all']
    });

    chrome.contextMenus.create({
      id: 'subAction2',
      parentId: 'mainContext',
      title: 'Action 2',
      contexts: ['all']
    });
  });
}

if (chrome.contextMenus) {
  chrome.contextMenus.onClicked.addListener(function(info, tab) {
    switch (info.menuItemId) {
      case 'subAction1':
        notify('Action 1', 'Action 1 was performed');
        break;
      case 'subAction2':
        notify('Action 2', 'Action 2 was performed');
        break;
    }
  });
}

function notify(title, message) {
  if (!chrome.notifications || !settings.notificationsEnabled) return;

  chrome.notifications.create({
    type: 'basic',
    iconUrl: 'icon128.png',
    title: title,
    message: message
  });
}

function updateSettings(newSettings) {
  settings = { ...settings, ...newSettings };
  if (chrome.storage) {
    chrome.storage.sync.set(settings);
  }

  if (typeof newSettings.contextMenuEnabled !== 'undefined' ||
      typeof newSettings.contextMenuText !== 'undefined') {
    setupContextMenu();
  }
}
"#;
