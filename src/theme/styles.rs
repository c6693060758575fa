//! Global CSS styles for Avatar Kit.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-primary: #0a0a0a;
  --surface: #0a0e0f;
  --border: #1a1a1a;

  /* Accent */
  --accent: #00d4aa;
  --accent-glow: rgba(0, 212, 170, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --danger: #ff3366;
  --danger-bg: rgba(255, 51, 102, 0.1);
  --danger-border: rgba(255, 51, 102, 0.3);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg-primary);
  color: var(--text-primary);
  font-family: var(--font-mono);
}

/* === Settings Page === */
.settings-page {
  max-width: 480px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.settings-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 400;
}

.settings-section {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.settings-section--avatar {
  align-items: center;
}

.settings-hint {
  color: var(--text-muted);
  font-size: 0.75rem;
}

.settings-toggle {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.input-label {
  color: var(--text-secondary);
  font-size: 0.75rem;
  text-transform: lowercase;
}

.input-field {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--accent);
  font-family: var(--font-mono);
  padding: 0.5rem 0.75rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 8px var(--accent-glow);
}

/* === Avatar === */
.avatar {
  border-radius: 50%;
  border: 2px solid var(--accent);
  display: flex;
  align-items: center;
  justify-content: center;
}

.avatar--image {
  object-fit: cover;
}

.avatar--initials {
  background: var(--accent);
  color: var(--bg-primary);
  font-weight: 700;
}

.avatar--small { width: 3rem; height: 3rem; font-size: 0.875rem; }
.avatar--medium { width: 5rem; height: 5rem; font-size: 1rem; }
.avatar--large { width: 8rem; height: 8rem; font-size: 2rem; }

.avatar-upload {
  position: relative;
  display: inline-flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.avatar-upload__face {
  position: relative;
}

/* === Icon Buttons === */
.icon-btn {
  position: absolute;
  border-radius: 50%;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.icon-btn:hover {
  transform: scale(1.1);
}

.avatar-upload__change {
  bottom: 0;
  right: 0;
  padding: 0.4rem;
  background: var(--surface);
  border: 2px solid var(--border);
  color: var(--text-primary);
}

.avatar-upload__remove {
  top: 0;
  right: 0;
  width: 1.5rem;
  height: 1.5rem;
  background: var(--danger-bg);
  border: 1px solid var(--danger-border);
  color: var(--danger);
}

/* === Inline Error === */
.inline-error {
  padding: 0.25rem 0.75rem;
  background: var(--danger-bg);
  border: 1px solid var(--danger-border);
  border-radius: 4px;
  color: var(--danger);
  font-size: 0.75rem;
  white-space: nowrap;
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  flex: 1;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 6px;
  font-family: var(--font-mono);
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: var(--bg-primary);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-primary);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Preview Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.avatar-preview-modal {
  width: 100%;
  max-width: 24rem;
  margin: 0 1rem;
  padding: 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.modal-title {
  font-size: 1.125rem;
  font-weight: 500;
}

.avatar-preview-modal__image {
  display: flex;
  justify-content: center;
}

.avatar-preview-modal__file {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.75rem;
}

.modal-description {
  text-align: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid currentColor;
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
