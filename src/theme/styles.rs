//! Global CSS styles for the portfolio site.
//!
//! Class names are shared with the state machines in `portfolio-core`
//! (`tab-pane active slide-right`, `modal-tabs-sidebar show`, ...).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0d0f14;
  --bg-raised: #161a22;
  --bg-overlay: rgba(5, 6, 10, 0.85);
  --border: #262c38;

  --accent: #ff7a3d;
  --accent-soft: rgba(255, 122, 61, 0.25);
  --pixel: #7fd1ff;

  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);

  --font-display: 'Press Start 2P', 'Courier New', monospace;
  --font-body: 'Inter', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
}

img {
  max-width: 100%;
  display: block;
}

/* === Navigation === */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  display: flex;
  justify-content: center;
  gap: 2rem;
  padding: 1rem;
  background: rgba(13, 15, 20, 0.9);
  border-bottom: 1px solid var(--border);
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

/* === Sections === */
.hero, .projects, .contact {
  position: relative;
  overflow: hidden;
  padding: 6rem 2rem;
}

.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.hero-content {
  position: relative;
  z-index: 1;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

.hero-subtitle {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.section-title {
  position: relative;
  z-index: 1;
  font-family: var(--font-display);
  text-align: center;
  margin-bottom: 3rem;
}

.contact {
  text-align: center;
}

.contact-link {
  color: var(--accent);
}

/* === Particles === */
.particles {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.pixel-particle, .project-particle, .contact-particle {
  position: absolute;
  width: 4px;
  height: 4px;
  background: var(--pixel);
  opacity: 0.6;
}

.project-particle {
  width: 3px;
  height: 3px;
  opacity: 0.35;
}

.contact-particle {
  background: var(--accent);
}

@keyframes floatPixel {
  0%, 100% { transform: translateY(0); opacity: 0.6; }
  50% { transform: translateY(-30px); opacity: 1; }
}

@keyframes floatProjectParticle {
  0%, 100% { transform: translate(0, 0); }
  50% { transform: translate(10px, -20px); }
}

/* === Project Cards === */
.projects-grid {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.project-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  overflow: hidden;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--accent);
}

.project-image {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
}

.project-info {
  padding: 1.25rem;
}

.project-title-row, .modal-title-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.project-summary {
  color: var(--text-secondary);
  margin: 0.75rem 0 1rem;
}

.project-link {
  color: var(--accent);
  text-decoration: none;
  font-weight: 600;
}

.engine-badge, .engine-badge-modal {
  display: inline-block;
  width: 28px;
  height: 28px;
  background-size: contain;
  background-repeat: no-repeat;
  background-position: center;
  flex-shrink: 0;
}

.engine-badge-modal {
  width: 40px;
  height: 40px;
}

/* === Project Modal === */
.modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 1000;
  background: var(--bg-overlay);
}

.modal.show {
  display: flex;
  align-items: flex-start;
  justify-content: center;
}

.modal-content {
  position: relative;
  width: min(1100px, 94vw);
  max-height: 92vh;
  margin-top: 4vh;
  overflow-y: auto;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 10px;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 2rem;
  line-height: 1;
}

.close-modal {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  z-index: 2;
}

.modal-banner {
  width: 100%;
  max-height: 360px;
  object-fit: cover;
}

.modal-title-row {
  padding: 1.25rem 1.5rem 0;
}

.modal-body {
  padding: 1.5rem;
}

/* === Tabs === */
.tab-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  border-bottom: 1px solid var(--border);
  margin-bottom: 1.5rem;
}

.tab-button {
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 0.6rem 1rem;
  font: inherit;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.tab-button.active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

.tab-pane {
  display: none;
}

.tab-pane.active {
  display: block;
}

.tab-pane.slide-right {
  animation: slideFromRight var(--transition-normal);
}

.tab-pane.slide-left {
  animation: slideFromLeft var(--transition-normal);
}

@keyframes slideFromRight {
  from { opacity: 0; transform: translateX(30px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slideFromLeft {
  from { opacity: 0; transform: translateX(-30px); }
  to { opacity: 1; transform: translateX(0); }
}

.section-content p {
  margin-bottom: 1rem;
}

/* === Floating Tab Sidebar === */
.modal-tabs-sidebar {
  position: fixed;
  z-index: 1001;
  width: 180px;
  padding: 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.modal-tabs-sidebar.show {
  opacity: 1;
  pointer-events: auto;
}

.modal-tabs-sidebar.is-disabled {
  display: none;
}

.modal-tabs-sidebar h4 {
  font-size: 0.8rem;
  text-transform: uppercase;
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

.modal-tab-sidebar-button {
  display: block;
  width: 100%;
  text-align: left;
  background: none;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 0.35rem 0.5rem;
  font: inherit;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.modal-tab-sidebar-button.active {
  color: var(--accent);
  background: var(--accent-soft);
  border-radius: 4px;
}

/* === Screenshots === */
.modal-screenshots h3 {
  margin: 2rem 0 1rem;
}

.screenshot-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.screenshot-item img {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
  border-radius: 6px;
  cursor: zoom-in;
}

/* === Lightbox === */
.lightbox-modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 2000;
  background: rgba(0, 0, 0, 0.92);
}

.lightbox-modal.show {
  display: flex;
  align-items: center;
  justify-content: center;
}

.lightbox-content {
  max-width: 90vw;
  max-height: 90vh;
  text-align: center;
}

.lightbox-content img {
  max-height: 82vh;
  margin: 0 auto;
}

.lightbox-caption {
  color: var(--text-secondary);
  margin-top: 0.75rem;
}

.close-lightbox {
  position: absolute;
  top: 1rem;
  right: 1.5rem;
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  font-size: 3rem;
  padding: 0 1rem;
}

.lightbox-prev {
  left: 1rem;
}

.lightbox-next {
  right: 1rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .hero-title {
    font-size: 1.5rem;
  }

  .site-nav {
    gap: 1rem;
  }

  .modal-content {
    width: 100vw;
    max-height: 100vh;
    margin-top: 0;
    border-radius: 0;
  }
}
"#;
