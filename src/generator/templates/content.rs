//! Page integration: `content.js` and `content-styles.css`

use crate::models::Configuration;

pub fn js(_config: &Configuration) -> String {
    CONTENT_JS.to_string()
}

pub fn css(_config: &Configuration) -> String {
    CONTENT_CSS.to_string()
}

const CONTENT_JS: &str = r#"// Content script for webpage integration
const EXTENSION_UI = {
  sidebar: null,
  overlay: null,
  floatingPanel: null,
  initialized: false
};

function initializeUI() {
  if (EXTENSION_UI.initialized || !document.body) return;

  EXTENSION_UI.sidebar = createSidebar();
  EXTENSION_UI.overlay = createOverlay();
  EXTENSION_UI.floatingPanel = createFloatingPanel();
  setupKeyboardShortcuts();

  EXTENSION_UI.initialized = true;
}

function createSidebar() {
  const sidebar = document.createElement('div');
  sidebar.className = 'extension-sidebar';
  sidebar.innerHTML = `
    <div class="sidebar-header">
      <h3>Extension Sidebar</h3>
      <button class="close-btn">&times;</button>
    </div>
    <div class="sidebar-content">
      <!-- Content will be dynamically populated -->
    </div>
    <div class="sidebar-footer">
      <button class="action-btn">Action</button>
    </div>
  `;

  sidebar.querySelector('.close-btn').addEventListener('click', () => toggleSidebar(false));
  document.body.appendChild(sidebar);
  return sidebar;
}

function createOverlay() {
  const overlay = document.createElement('div');
  overlay.className = 'extension-overlay';
  overlay.innerHTML = `
    <div class="overlay-content">
      <div class="overlay-header">
        <h3>Extension Overlay</h3>
        <button class="close-btn">&times;</button>
      </div>
      <div class="overlay-body">
        <!-- Content will be dynamically populated -->
      </div>
      <div class="overlay-footer">
        <button class="action-btn">Confirm</button>
        <button class="cancel-btn">Cancel</button>
      </div>
    </div>
  `;

  overlay.querySelector('.close-btn').addEventListener('click', () => toggleOverlay(false));
  overlay.querySelector('.cancel-btn').addEventListener('click', () => toggleOverlay(false));
  document.body.appendChild(overlay);
  return overlay;
}

function createFloatingPanel() {
  const panel = document.createElement('div');
  panel.className = 'extension-floating-panel';
  panel.innerHTML = `
    <div class="panel-header">
      <span class="drag-handle">⋮⋮</span>
      <h4>Quick Access</h4>
      <button class="minimize-btn">_</button>
    </div>
    <div class="panel-content">
      <!-- Content will be dynamically populated -->
    </div>
  `;

  makeElementDraggable(panel);
  panel.querySelector('.minimize-btn').addEventListener('click', toggleFloatingPanel);
  document.body.appendChild(panel);
  return panel;
}

function makeElementDraggable(element) {
  const handle = element.querySelector('.drag-handle');
  let isDragging = false;
  let currentX;
  let currentY;
  let initialX;
  let initialY;
  let xOffset = 0;
  let yOffset = 0;

  handle.addEventListener('mousedown', dragStart);
  document.addEventListener('mousemove', drag);
  document.addEventListener('mouseup', dragEnd);

  function dragStart(e) {
    initialX = e.clientX - xOffset;
    initialY = e.clientY - yOffset;

    if (e.target === handle) {
      isDragging = true;
    }
  }

  function drag(e) {
    if (isDragging) {
      e.preventDefault();
      currentX = e.clientX - initialX;
      currentY = e.clientY - initialY;
      xOffset = currentX;
      yOffset = currentY;

      element.style.transform = `translate3d(${currentX}px, ${currentY}px, 0)`;
    }
  }

  function dragEnd() {
    initialX = currentX;
    initialY = currentY;
    isDragging = false;
  }
}

function toggleSidebar(show = true) {
  if (!EXTENSION_UI.sidebar) return;
  EXTENSION_UI.sidebar.classList.toggle('active', show);
  updateSidebarContent();
}

function toggleOverlay(show = true) {
  if (!EXTENSION_UI.overlay) return;
  EXTENSION_UI.overlay.classList.toggle('active', show);
  updateOverlayContent();
}

function toggleFloatingPanel() {
  if (!EXTENSION_UI.floatingPanel) return;
  EXTENSION_UI.floatingPanel.classList.toggle('minimized');
  updateFloatingPanelContent();
}

function updateSidebarContent() {
  const content = EXTENSION_UI.sidebar.querySelector('.sidebar-content');
  content.innerHTML = `
    <div class="sidebar-section">
      <h4>Recent Activity</h4>
      <ul class="activity-list">
        <li>Item 1</li>
        <li>Item 2</li>
        <li>Item 3</li>
      </ul>
    </div>
  `;
}

function updateOverlayContent() {
  const content = EXTENSION_UI.overlay.querySelector('.overlay-body');
  content.innerHTML = `
    <div class="overlay-section">
      <h4>Options</h4>
      <div class="options-grid">
        <div class="option-item">Option 1</div>
        <div class="option-item">Option 2</div>
        <div class="option-item">Option 3</div>
      </div>
    </div>
  `;
}

function updateFloatingPanelContent() {
  const content = EXTENSION_UI.floatingPanel.querySelector('.panel-content');
  content.innerHTML = `
    <div class="quick-actions">
      <button class="action-item">Action 1</button>
      <button class="action-item">Action 2</button>
    </div>
  `;
}

function setupKeyboardShortcuts() {
  document.addEventListener('keydown', (e) => {
    // Alt + S / O / P toggle sidebar, overlay and floating panel
    if (e.altKey && e.key === 's') {
      toggleSidebar();
    }
    if (e.altKey && e.key === 'o') {
      toggleOverlay();
    }
    if (e.altKey && e.key === 'p') {
      toggleFloatingPanel();
    }
  });
}

// Scripts injected at document_start run before <body> exists
if (document.body) {
  initializeUI();
} else {
  document.addEventListener('DOMContentLoaded', initializeUI);
}

chrome.runtime.onMessage.addListener((message, sender, sendResponse) => {
  switch (message.action) {
    case 'toggleSidebar':
      toggleSidebar(message.show);
      break;
    case 'toggleOverlay':
      toggleOverlay(message.show);
      break;
    case 'togglePanel':
      toggleFloatingPanel();
      break;
  }
});
"#;

const CONTENT_CSS: &str = r#"/* Extension UI Styles */
.extension-sidebar {
  position: fixed;
  top: 0;
  right: -350px;
  width: 350px;
  height: 100vh;
  background: #ffffff;
  box-shadow: -2px 0 5px rgba(0, 0, 0, 0.1);
  z-index: 999999;
  transition: right 0.3s ease;
}

.extension-sidebar.active {
  right: 0;
}

.sidebar-header {
  padding: 16px;
  border-bottom: 1px solid #e2e8f0;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.sidebar-content {
  padding: 16px;
  height: calc(100% - 120px);
  overflow-y: auto;
}

.sidebar-footer {
  padding: 16px;
  border-top: 1px solid #e2e8f0;
}

.extension-overlay {
  position: fixed;
  top: 0;
  left: 0;
  width: 100vw;
  height: 100vh;
  background: rgba(0, 0, 0, 0.5);
  display: none;
  justify-content: center;
  align-items: center;
  z-index: 999999;
}

.extension-overlay.active {
  display: flex;
}

.overlay-content {
  background: #ffffff;
  border-radius: 8px;
  width: 90%;
  max-width: 600px;
  max-height: 80vh;
  overflow-y: auto;
}

.overlay-header {
  padding: 16px;
  border-bottom: 1px solid #e2e8f0;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.overlay-body {
  padding: 16px;
}

.overlay-footer {
  padding: 16px;
  border-top: 1px solid #e2e8f0;
  display: flex;
  justify-content: flex-end;
  gap: 8px;
}

.extension-floating-panel {
  position: fixed;
  bottom: 20px;
  right: 20px;
  width: 300px;
  background: #ffffff;
  border-radius: 8px;
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
  z-index: 999999;
  transition: transform 0.3s ease;
}

.extension-floating-panel.minimized {
  transform: translateY(calc(100% - 40px));
}

.panel-header {
  padding: 8px 16px;
  background: #f8fafc;
  border-radius: 8px 8px 0 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
  cursor: move;
}

.drag-handle {
  cursor: move;
  user-select: none;
}

.panel-content {
  padding: 16px;
}

.close-btn,
.minimize-btn {
  background: none;
  border: none;
  font-size: 18px;
  cursor: pointer;
  color: #64748b;
}

.close-btn:hover,
.minimize-btn:hover {
  color: #334155;
}

.action-btn {
  padding: 8px 16px;
  background: #6366f1;
  color: white;
  border: none;
  border-radius: 4px;
  cursor: pointer;
  transition: background 0.2s ease;
}

.action-btn:hover {
  background: #4f46e5;
}

.cancel-btn {
  padding: 8px 16px;
  background: #e2e8f0;
  color: #475569;
  border: none;
  border-radius: 4px;
  cursor: pointer;
  transition: background 0.2s ease;
}

.cancel-btn:hover {
  background: #cbd5e1;
}

.activity-list {
  list-style: none;
  padding: 0;
  margin: 0;
}

.activity-list li {
  padding: 8px 0;
  border-bottom: 1px solid #e2e8f0;
}

.options-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
  gap: 16px;
  margin-top: 16px;
}

.option-item {
  padding: 16px;
  background: #f8fafc;
  border-radius: 4px;
  text-align: center;
  cursor: pointer;
  transition: background 0.2s ease;
}

.option-item:hover {
  background: #e2e8f0;
}

.quick-actions {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.action-item {
  padding: 8px;
  background: #f8fafc;
  border: none;
  border-radius: 4px;
  cursor: pointer;
  transition: background 0.2s ease;
}

.action-item:hover {
  background: #e2e8f0;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_script_waits_for_body() {
        let script = js(&Configuration::default());
        assert!(script.contains("document.addEventListener('DOMContentLoaded', initializeUI)"));
    }

    #[test]
    fn test_stylesheet_covers_injected_classes() {
        let styles = css(&Configuration::default());
        let script = js(&Configuration::default());
        for class in ["extension-sidebar", "extension-overlay", "extension-floating-panel"] {
            assert!(script.contains(class));
            assert!(styles.contains(&format!(".{}", class)));
        }
    }
}
