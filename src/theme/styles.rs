//! Global CSS styles for EcoLoop.
//!
//! Light, rounded surfaces with a leaf-green accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LEAF (Brand, primary actions) */
  --leaf: #16a34a;
  --leaf-dark: #15803d;
  --leaf-soft: #dcfce7;
  --leaf-wash: #f0fdf4;

  /* METRICS */
  --flame: #f97316;
  --coin: #eab308;
  --sky: #2563eb;
  --sky-soft: #eff6ff;
  --alert: #ef4444;

  /* SLATE (Text, borders) */
  --slate-900: #1e293b;
  --slate-700: #334155;
  --slate-500: #64748b;
  --slate-300: #cbd5e1;
  --slate-100: #f1f5f9;
  --slate-50: #f8fafc;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --radius: 0.75rem;
  --shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--slate-900);
  background: var(--leaf-wash);
}

a { color: inherit; text-decoration: none; }

/* === Header === */
.app-header {
  position: sticky;
  top: 0;
  z-index: 50;
  width: 100%;
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--slate-100);
  box-shadow: var(--shadow);
}

.app-header-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.header-left, .header-right, .tools-group, .stats-group, .anon-links, .primary-nav {
  display: flex;
  align-items: center;
}

.header-left { gap: 2rem; }
.header-right { gap: 0.75rem; }
.tools-group { gap: 0.5rem; }
.primary-nav { gap: 0.25rem; }
.anon-links { gap: 1rem; }

.brand { display: flex; align-items: center; gap: 0.5rem; }

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--leaf);
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 0.2s;
}

.brand:hover .brand-mark { transform: rotate(6deg); }

.brand-name { font-weight: 900; font-size: 1.25rem; letter-spacing: -0.02em; }

.nav-link {
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  font-weight: 700;
  font-size: 0.875rem;
  color: var(--slate-500);
}

.nav-link:hover { color: var(--leaf); background: var(--slate-50); }
.nav-link.active { color: var(--leaf); background: var(--leaf-soft); }

.anon-link { font-size: 0.875rem; font-weight: 700; color: var(--slate-500); }
.anon-link:hover { color: var(--leaf); }

.stats-group {
  gap: 0.75rem;
  background: var(--slate-50);
  padding: 0.375rem 0.75rem;
  border-radius: var(--radius);
  border: 1px solid var(--slate-100);
}

.stats-divider, .tools-divider { width: 1px; background: var(--slate-300); }
.stats-divider { height: 1rem; }
.tools-divider { height: 2rem; margin: 0 0.25rem; }

.stat-badge { display: flex; align-items: center; gap: 0.375rem; font-weight: 800; font-size: 0.875rem; }
.stat-badge.clickable { cursor: pointer; }
.stat-badge.clickable:hover { opacity: 0.8; }
.stat-streak .stat-icon { color: var(--flame); animation: pulse 2s infinite; }
.stat-coins .stat-icon { color: var(--coin); }

.profile-link .avatar {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 9999px;
  background: var(--leaf-soft);
  border: 2px solid var(--leaf);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.125rem;
}

/* === Buttons === */
.btn-primary {
  background: var(--leaf);
  color: white;
  border: none;
  border-radius: 9999px;
  padding: 0.5rem 1.25rem;
  font-weight: 700;
  font-size: 0.875rem;
  cursor: pointer;
  box-shadow: 0 10px 15px -3px rgba(22, 163, 74, 0.25);
  transition: background 0.2s;
}

.btn-primary:hover { background: var(--leaf-dark); }
.btn-primary:disabled { opacity: 0.6; cursor: wait; }

.btn-ghost { background: none; border: none; color: var(--slate-500); cursor: pointer; }
.btn-ghost:hover { color: var(--slate-900); }

.icon-btn {
  position: relative;
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
}

.btn-tool {
  border: none;
  border-radius: var(--radius);
  background: var(--slate-50);
  color: var(--slate-500);
  transition: all 0.2s;
}

.btn-tool:hover, .btn-tool.active { background: white; color: var(--leaf); box-shadow: var(--shadow); }
.tool-scanner { border-radius: 9999px; background: var(--sky-soft); color: var(--sky); }

.btn-danger { border: none; background: none; color: var(--slate-300); }
.btn-danger:hover { color: var(--alert); }

.indicator { position: absolute; border-radius: 9999px; border: 2px solid white; }
.indicator-pulse { top: -0.25rem; right: -0.25rem; width: 0.75rem; height: 0.75rem; background: var(--sky); animation: pulse 2s infinite; }
.indicator-alert { top: 0.5rem; right: 0.5rem; width: 0.5rem; height: 0.5rem; background: var(--alert); border-width: 1px; }

/* === Overlays === */
.overlay-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(15, 23, 42, 0.4);
  backdrop-filter: blur(2px);
}

.overlay-panel {
  position: fixed;
  z-index: 61;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: min(32rem, calc(100vw - 2rem));
  max-height: calc(100vh - 4rem);
  overflow-y: auto;
  background: white;
  border-radius: 1.5rem;
  box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.25);
  animation: rise 0.2s ease-out;
}

.overlay-header { display: flex; justify-content: space-between; align-items: flex-start; padding: 1.25rem 1.5rem 0.5rem; }
.overlay-title { margin: 0; font-size: 1.25rem; font-weight: 900; }
.overlay-subtitle { margin: 0.25rem 0 0; color: var(--slate-500); font-size: 0.875rem; }
.overlay-body { padding: 0.5rem 1.5rem 1.5rem; }
.close-btn { font-size: 1.5rem; }

.scanner-dropzone {
  border: 2px dashed var(--slate-300);
  border-radius: var(--radius);
  padding: 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  color: var(--slate-500);
}

.scanner-preview { width: 100%; border-radius: var(--radius); }
.scanner-error { color: var(--alert); font-size: 0.875rem; }
.scanner-actions { display: flex; justify-content: flex-end; margin-top: 1rem; }

.challenge-list { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.challenge-item { display: flex; gap: 0.75rem; padding: 0.75rem; border-radius: var(--radius); background: var(--slate-50); }
.challenge-category { font-size: 0.75rem; font-weight: 800; text-transform: uppercase; color: var(--leaf); min-width: 3.5rem; }
.category-water { color: var(--sky); }
.category-carbon { color: var(--flame); }
.challenge-title { margin: 0; font-size: 0.95rem; }
.challenge-detail { margin: 0.25rem 0 0; color: var(--slate-500); font-size: 0.85rem; }

.streak-strip { display: grid; grid-template-columns: repeat(7, 1fr); gap: 0.5rem; }
.streak-day {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0.5rem 0;
  border-radius: var(--radius);
  background: var(--slate-50);
  color: var(--slate-500);
}
.streak-day.lit { background: #ffedd5; color: var(--flame); font-weight: 800; }
.streak-day.today { outline: 2px solid var(--leaf); }
.streak-weekday { font-size: 0.7rem; text-transform: uppercase; }
.streak-date { font-size: 1.1rem; }

/* === Pages === */
.landing, .section-page { max-width: 64rem; margin: 0 auto; padding: 3rem 1rem; }
.landing-hero { text-align: center; }
.landing-title { font-size: 3.5rem; font-weight: 900; color: var(--leaf-dark); margin: 0; }
.tagline { color: var(--slate-700); font-size: 1.125rem; }
.landing-cta { margin-top: 1.5rem; font-size: 1rem; padding: 0.75rem 2rem; }
.landing-steps { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 3rem; }
.landing-step { background: white; border-radius: var(--radius); padding: 1.25rem; box-shadow: var(--shadow); }

.dashboard { min-height: 100vh; padding-bottom: 5rem; overflow-x: hidden; }
.dashboard-main { width: 100%; padding: 0 1rem; display: flex; flex-direction: column; align-items: center; }
.dashboard-intro { text-align: center; margin: 1rem 0 2.5rem; }
.dashboard-heading { display: flex; align-items: center; justify-content: center; gap: 0.5rem; color: var(--leaf); }
.dashboard-title { font-size: 3rem; font-weight: 900; color: #14532d; margin: 0; }
.dashboard-tagline {
  display: inline-block;
  color: var(--leaf-dark);
  font-weight: 700;
  background: rgba(220, 252, 231, 0.5);
  padding: 0.5rem 1.5rem;
  border-radius: 9999px;
}
.dashboard-stage { position: relative; width: 100%; flex: 1; }
.glow { position: absolute; border-radius: 9999px; filter: blur(64px); z-index: -1; }
.glow-green { top: 0; left: 0; width: 16rem; height: 16rem; background: rgba(187, 247, 208, 0.3); }
.glow-blue { bottom: 0; right: 0; width: 24rem; height: 24rem; background: rgba(219, 234, 254, 0.3); }

.game-map-canvas {
  min-height: 28rem;
  border-radius: 1.5rem;
  background: linear-gradient(160deg, #bbf7d0, #a7f3d0 40%, #bae6fd);
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  place-items: center;
  box-shadow: var(--shadow);
}
.game-map-region { display: flex; align-items: center; gap: 0.5rem; font-weight: 800; color: #14532d; }
.region-pin { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: var(--leaf); }

.section-title { font-size: 2.25rem; font-weight: 900; margin: 0 0 0.5rem; }
.section-blurb { color: var(--slate-700); }

/* === Animation === */
@keyframes pulse { 50% { opacity: 0.5; } }
@keyframes rise { from { opacity: 0; transform: translate(-50%, -46%); } }
.spin-slow { display: inline-flex; animation: spin 8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

@media (max-width: 768px) {
  .primary-nav, .stats-group { display: none; }
  .landing-steps { grid-template-columns: 1fr; }
}
"#;
