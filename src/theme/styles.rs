//! Global CSS styles for the guide reader.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --paper: #fbfaf7;
  --paper-edge: #ece8df;
  --ink: #1f2326;
  --ink-muted: rgba(31, 35, 38, 0.6);
  --accent: #8a1538;
  --accent-soft: rgba(138, 21, 56, 0.12);
  --star: #d4a017;

  --font-serif: 'Source Serif Pro', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --sidebar-width: 260px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-serif);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.7;
}

a { color: var(--accent); }

/* === Library === */
.library {
  max-width: 720px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.page-title {
  font-size: 2.25rem;
  margin-bottom: 1.5rem;
}

.guide-list { list-style: none; }

.guide-list-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--paper-edge);
}

.guide-badge {
  font-family: var(--font-sans);
  font-size: 0.75rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
}

.empty-state { color: var(--ink-muted); }

/* === Reading Progress === */
.reading-progress {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background: var(--paper-edge);
  z-index: 20;
}

.reading-progress__fill {
  height: 100%;
  background: var(--accent);
  transition: width var(--transition-fast);
}

/* === Guide Layout === */
.guide-layout {
  display: flex;
  gap: 2.5rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.guide-main {
  flex: 1;
  min-width: 0;
}

.guide-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
  font-family: var(--font-sans);
}

.guide-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.guide-article h1 { font-size: 2.25rem; margin-bottom: 1rem; }
.guide-article h2 { font-size: 1.5rem; margin: 2.5rem 0 0.75rem; }
.guide-article h3 { font-size: 1.2rem; margin: 1.75rem 0 0.5rem; }
.guide-article p, .guide-article ul, .guide-article ol { margin-bottom: 1rem; }
.guide-article ul, .guide-article ol { padding-left: 1.5rem; }

/* === Outline === */
.outline-nav { font-family: var(--font-sans); font-size: 0.9rem; }

.outline-nav--sidebar {
  position: sticky;
  top: 1.5rem;
  align-self: flex-start;
  width: var(--sidebar-width);
  max-height: calc(100vh - 3rem);
  overflow-y: auto;
}

.outline-nav--drawer { display: none; margin-bottom: 1rem; }

.outline-drawer-toggle {
  width: 100%;
  text-align: left;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--paper-edge);
  background: white;
  font: inherit;
  cursor: pointer;
}

.outline-list { list-style: none; }

.outline-item a {
  display: block;
  padding: 0.3rem 0.75rem;
  border-left: 2px solid transparent;
  color: var(--ink-muted);
  text-decoration: none;
}

.outline-item--minor a { padding-left: 1.75rem; }

.outline-item--active a {
  color: var(--accent);
  border-left-color: var(--accent);
  background: var(--accent-soft);
}

/* === Preferences === */
.save-toggle {
  font: inherit;
  padding: 0.35rem 0.9rem;
  border: 1px solid var(--accent);
  border-radius: 999px;
  background: transparent;
  color: var(--accent);
  cursor: pointer;
}

.save-toggle--on {
  background: var(--accent);
  color: white;
}

.star-rating { display: flex; gap: 0.15rem; }

.star {
  font-size: 1.25rem;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--ink-muted);
}

.star--filled { color: var(--star); }

/* === Narrow Screens === */
@media (max-width: 800px) {
  .outline-nav--sidebar { display: none; }
  .outline-nav--drawer { display: block; }
  .guide-layout { padding: 1.5rem 1rem; }
}
"#;
