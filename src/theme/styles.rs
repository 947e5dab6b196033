//! Global CSS styles for Velcross Chronicles.
//!
//! Candle-lit imperial court at night: slate surfaces, amber titles, and a
//! per-character accent supplied through `--theme-*` custom properties.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cinzel:wght@400;700&family=Cormorant+Garamond:ital,wght@0,400;0,600;1,400&display=swap');

/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds, Surfaces) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --slate-700: #334155;
  --slate-500: #64748b;
  --slate-400: #94a3b8;
  --slate-300: #cbd5e1;
  --slate-200: #e2e8f0;

  /* AMBER (Titles, Icons, Active state) */
  --amber-50: #fffbeb;
  --amber-100: #fef3c7;
  --amber-200: #fde68a;
  --amber-400: #fbbf24;
  --amber-500: #f59e0b;
  --amber-900: #78350f;
  --amber-950: #451a03;

  /* Per-character accent (overridden inline) */
  --theme-text: var(--amber-400);
  --theme-accent: var(--amber-500);
  --theme-border: var(--amber-900);
  --theme-deep: var(--amber-950);

  /* Typography */
  --font-display: 'Cinzel', Georgia, serif;
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-950);
  color: var(--slate-200);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

::selection {
  background: var(--amber-900);
  color: var(--amber-100);
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.desktop-only { display: none; }

@media (min-width: 768px) {
  .desktop-only { display: inline; }
}

/* === Entrance Animations === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes reveal-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes reveal-scale {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes panel-in {
  from { opacity: 0; transform: scale(0.9) translateY(20px); }
  to { opacity: 1; transform: scale(1) translateY(0); }
}

@keyframes menu-open {
  from { opacity: 0; max-height: 0; }
  to { opacity: 1; max-height: 20rem; }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

.reveal-up { animation: reveal-up 1s ease-out both; }
.reveal-scale { animation: reveal-scale 600ms ease-out both; }
.reveal-fade { animation: fade-in 800ms ease-out 800ms both; }
.bounce { animation: bounce 1s infinite; }

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 1ms !important;
    animation-delay: 0ms !important;
    transition-duration: 1ms !important;
  }
  html { scroll-behavior: auto; }
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  position: relative;
}

.ambience {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.ambience-gradient {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 600px;
  background: linear-gradient(to bottom, rgba(15, 23, 42, 0.5), var(--slate-950));
  opacity: 0.8;
}

.page-main {
  position: relative;
  z-index: 10;
  padding-top: 4rem;
}

.page-section {
  position: relative;
  padding: 5rem 0;
}

.page-section--world { background: var(--slate-950); }
.page-section--characters { background: rgba(15, 23, 42, 0.5); }

.section-divider {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 1px;
  background: linear-gradient(to right, transparent, rgba(120, 53, 15, 0.5), transparent);
}

.page-footer {
  padding: 2rem 0;
  background: var(--slate-950);
  border-top: 1px solid var(--slate-900);
  text-align: center;
  color: var(--slate-500);
  font-size: 0.875rem;
}

.page-footer__title { font-family: var(--font-display); }
.page-footer__tagline { margin-top: 0.5rem; font-size: 0.75rem; }

/* === Section Heading === */
.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--amber-100);
  margin-bottom: 1rem;
}

.section-subtitle {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--slate-400);
}

.section-rule {
  width: 6rem;
  height: 4px;
  margin: 0 auto;
  border-radius: 9999px;
  background: rgba(245, 158, 11, 0.5);
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(15, 23, 42, 0.8);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid rgba(30, 41, 59, 0.5);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.nav-brand-icon { color: var(--amber-500); }

.nav-brand-title {
  font-family: var(--font-display);
  font-weight: 700;
  font-size: 1.25rem;
  letter-spacing: 0.05em;
  color: var(--amber-50);
}

.nav-links {
  display: none;
  gap: 2rem;
}

.nav-toggle { display: block; }

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .nav-toggle { display: none; }
  .mobile-nav { display: none; }
}

.btn-nav {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--slate-400);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.btn-nav:hover {
  color: var(--amber-200);
  background: rgba(30, 41, 59, 0.5);
}

.btn-nav.active {
  color: var(--amber-400);
  background: var(--slate-800);
}

.mobile-nav {
  background: var(--slate-900);
  border-bottom: 1px solid var(--slate-800);
  overflow: hidden;
  animation: menu-open var(--transition-normal) both;
}

.mobile-nav-items {
  padding: 0.5rem 0.5rem 0.75rem;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.btn-mobile-nav {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  font-size: 1rem;
  font-weight: 500;
  color: var(--slate-300);
  text-align: left;
}

.btn-mobile-nav:hover {
  color: var(--amber-400);
  background: var(--slate-800);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border-radius: 0.375rem;
  color: var(--slate-400);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.icon-btn:hover {
  color: #fff;
  background: var(--slate-700);
}

/* === Hero === */
.hero {
  position: relative;
  height: calc(100vh - 4rem);
  min-height: 600px;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero-bg {
  position: absolute;
  inset: 0;
  background: var(--slate-950);
}

.hero-bg-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top right, var(--slate-950), var(--slate-900), rgba(69, 26, 3, 0.2));
}

.hero-bg-glow {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at center, rgba(120, 53, 15, 0.1), var(--slate-950) 70%);
}

.hero-content {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 0 1rem;
  max-width: 56rem;
  margin: 0 auto;
}

.hero-era {
  display: block;
  font-family: var(--font-display);
  font-size: 1.25rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: rgba(245, 158, 11, 0.8);
  margin-bottom: 1rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 9vw, 6rem);
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: 1.5rem;
  background: linear-gradient(to bottom, var(--amber-100), var(--amber-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  filter: drop-shadow(0 4px 6px rgba(0, 0, 0, 0.5));
}

.hero-tagline {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.25rem;
  color: var(--slate-400);
  max-width: 42rem;
  margin: 0 auto 2.5rem;
  line-height: 1.7;
}

.btn-explore {
  position: relative;
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2rem;
  border: 1px solid rgba(245, 158, 11, 0.3);
  border-radius: 2px;
  color: var(--amber-100);
  transition: border-color var(--transition-normal), background var(--transition-normal);
}

.btn-explore:hover {
  border-color: var(--amber-500);
  background: rgba(69, 26, 3, 0.3);
}

.btn-explore:hover .lucide { color: var(--amber-400); }

.btn-explore-label {
  font-family: var(--font-display);
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.hero-fade-bottom {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 8rem;
  background: linear-gradient(to top, var(--slate-950), transparent);
  pointer-events: none;
}

.hero-rule {
  display: none;
  position: absolute;
  top: 50%;
  width: 1px;
  height: 8rem;
  background: linear-gradient(to bottom, transparent, rgba(245, 158, 11, 0.2), transparent);
}

.hero-rule--left { left: 1rem; }
.hero-rule--right { right: 1rem; }

@media (min-width: 768px) {
  .hero-rule { display: block; }
}

/* === Lore Guide === */
.lore-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 768px) {
  .lore-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .lore-grid { gap: 3rem; }
}

.lore-panel {
  position: relative;
  overflow: hidden;
  padding: 2rem;
  background: rgba(15, 23, 42, 0.5);
  border: 1px solid var(--slate-800);
  border-radius: 2px;
  transition: border-color var(--transition-normal);
}

.lore-panel:hover { border-color: rgba(120, 53, 15, 0.5); }

.lore-watermark {
  position: absolute;
  right: -1.5rem;
  top: -1.5rem;
  color: rgba(30, 41, 59, 0.2);
  transition: color var(--transition-normal);
}

.lore-panel:hover .lore-watermark { color: rgba(120, 53, 15, 0.1); }

.lore-body {
  position: relative;
  z-index: 10;
}

.lore-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 400;
  color: var(--amber-200);
  margin-bottom: 1.5rem;
}

.lore-title-icon { color: var(--amber-500); }

.lore-lines {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.lore-line {
  color: var(--slate-400);
  line-height: 1.7;
  padding-left: 1rem;
  border-left: 1px solid var(--slate-700);
}

/* === Character Gallery === */
.character-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

@media (min-width: 640px) {
  .character-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .character-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1280px) {
  .character-grid { grid-template-columns: repeat(4, 1fr); }
}

.character-card {
  cursor: pointer;
  overflow: hidden;
  background: rgba(30, 41, 59, 0.4);
  border: 1px solid rgba(51, 65, 85, 0.5);
  border-radius: 0.5rem;
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal), transform var(--transition-normal);
}

.character-card:hover {
  border-color: rgba(245, 158, 11, 0.5);
  box-shadow: 0 0 20px rgba(245, 158, 11, 0.1);
  transform: translateY(-4px);
}

.character-card__portrait {
  position: relative;
  height: 12rem;
  overflow: hidden;
  background: var(--slate-900);
}

.character-card__img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.7;
  filter: grayscale(1);
  transition: all var(--transition-slow);
}

.character-card:hover .character-card__img {
  opacity: 1;
  filter: grayscale(0);
  transform: scale(1.1);
}

.character-card__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--slate-900), transparent);
}

.character-card__accent {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 4px;
  background: linear-gradient(to right, transparent, var(--theme-accent), transparent);
  opacity: 0.5;
}

.character-card__body { padding: 1.25rem; }

.role-badge {
  display: inline-block;
  margin-bottom: 0.5rem;
  padding: 0.25rem 0.5rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--theme-text);
  background: color-mix(in srgb, var(--theme-deep) 50%, transparent);
  border: 1px solid var(--theme-border);
  border-radius: 2px;
}

.character-card__name {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--slate-200);
  transition: color var(--transition-fast);
}

.character-card:hover .character-card__name { color: var(--amber-100); }

.character-card__age {
  color: var(--slate-500);
  font-size: 0.875rem;
  margin: 0.25rem 0 1rem;
}

.character-card__traits {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.trait-tag {
  font-size: 0.75rem;
  color: var(--slate-400);
  background: rgba(15, 23, 42, 0.5);
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
}

/* === Character Modal === */
.modal-root {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(2, 6, 23, 0.9);
  backdrop-filter: blur(4px);
  animation: fade-in var(--transition-normal) ease-out;
}

.modal-panel {
  position: relative;
  width: 100%;
  max-width: 56rem;
  max-height: 90vh;
  overflow-y: auto;
  overflow-x: hidden;
  background: var(--slate-900);
  border: 1px solid var(--slate-700);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
  animation: panel-in var(--transition-normal) ease-out;
  scrollbar-width: thin;
  scrollbar-color: rgba(245, 158, 11, 0.3) transparent;
}

.modal-banner {
  position: relative;
  height: 8rem;
  background: linear-gradient(to right, var(--slate-900), color-mix(in srgb, var(--theme-deep) 50%, transparent));
  border-bottom: 1px solid var(--slate-800);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 10;
  border-radius: 9999px;
  background: rgba(15, 23, 42, 0.5);
}

.modal-identity {
  position: absolute;
  bottom: -2.5rem;
  left: 2rem;
  display: flex;
  align-items: flex-end;
}

.modal-portrait {
  width: 6rem;
  height: 6rem;
  overflow: hidden;
  background: var(--slate-800);
  border: 4px solid var(--slate-900);
  border-radius: 0.5rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.5);
}

.modal-portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.modal-heading { margin: 0 0 3rem 1.5rem; }

.modal-name {
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 700;
  color: #fff;
  text-shadow: 0 2px 4px rgba(0, 0, 0, 0.5);
}

.modal-role {
  color: var(--theme-text);
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
}

@media (min-width: 768px) {
  .modal-identity { left: 3rem; }
  .modal-portrait { width: 8rem; height: 8rem; }
  .modal-heading { margin-bottom: 3.5rem; }
  .modal-name { font-size: 2.25rem; }
}

.modal-body {
  margin-top: 3rem;
  padding: 0 2rem 2.5rem;
  display: grid;
  grid-template-columns: 1fr;
  gap: 2.5rem;
}

@media (min-width: 1024px) {
  .modal-body { grid-template-columns: 2fr 1fr; }
}

.modal-details {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.modal-section-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 400;
  color: var(--slate-200);
  margin-bottom: 0.75rem;
}

.modal-section-icon { color: var(--amber-500); }

.modal-description {
  font-family: var(--font-serif);
  font-size: 1.125rem;
  line-height: 1.7;
  color: var(--slate-400);
}

.profile-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

@media (min-width: 640px) {
  .profile-grid { grid-template-columns: repeat(3, 1fr); }
}

.profile-item {
  padding: 0.75rem;
  background: rgba(30, 41, 59, 0.5);
  border: 1px solid rgba(51, 65, 85, 0.5);
  border-radius: 0.25rem;
}

.profile-item--wide { grid-column: 1 / -1; }

.profile-item__label {
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--slate-500);
  margin-bottom: 0.25rem;
}

.profile-item__value {
  font-weight: 500;
  color: var(--slate-200);
}

.modal-traits-title {
  font-size: 0.875rem;
  font-weight: 400;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--slate-500);
  margin-bottom: 0.75rem;
}

.modal-traits {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.trait-chip {
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  color: var(--theme-text);
  background: color-mix(in srgb, var(--theme-deep) 30%, transparent);
  border: 1px solid color-mix(in srgb, var(--theme-border) 50%, transparent);
  border-radius: 9999px;
}

.modal-chart {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1.5rem;
  background: rgba(2, 6, 23, 0.5);
  border: 1px solid var(--slate-800);
  border-radius: 0.75rem;
}

.modal-chart-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  width: 100%;
  font-family: var(--font-display);
  font-size: 1.125rem;
  font-weight: 400;
  color: var(--slate-300);
  margin-bottom: 1.5rem;
}

.modal-chart-note {
  margin-top: 1rem;
  text-align: center;
  font-size: 0.75rem;
  font-style: italic;
  color: var(--slate-500);
}

/* === Radar Chart === */
.radar {
  position: relative;
  width: 100%;
  max-width: 300px;
  aspect-ratio: 1;
  margin: 0 auto;
  font-size: 0.75rem;
}

.radar-svg { overflow: visible; }

.radar-vertex {
  cursor: help;
  transition: r var(--transition-fast);
}

.radar-vertex:hover { r: 5; }

.radar-tooltip {
  position: absolute;
  transform: translate(-50%, calc(-100% - 10px));
  padding: 0.25rem 0.5rem;
  white-space: nowrap;
  pointer-events: none;
  border: 1px solid var(--slate-700);
  border-radius: 0.375rem;
  background: var(--slate-900);
  color: var(--amber-400);
  font-size: 0.75rem;
}

.radar-empty {
  padding: 3rem 0;
  font-style: italic;
  color: var(--slate-500);
}
"#;
