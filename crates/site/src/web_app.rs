use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

/// Shell stylesheet. Pixel values match `DesktopLayoutConfig::default()`: 32px taskbar, 28px
/// title bar, 80x75 icon cells with 10px row and 5px column gaps inside 5px padding.
const DESKTOP_CSS: &str = r#"
html, body { margin: 0; height: 100%; overflow: hidden; font-family: sans-serif; }
.site-root { height: 100%; }
.desktop-shell { position: relative; display: flex; flex-direction: column; height: 100vh; user-select: none; background: #008080; }
.ui-desktop-icon-grid {
  flex: 1; box-sizing: border-box; padding: 5px; display: grid;
  grid-template-columns: repeat(auto-fill, 80px); grid-template-rows: repeat(auto-fill, 75px);
  grid-auto-columns: 80px; grid-auto-rows: 75px; gap: 10px 5px; justify-content: space-between; align-content: space-between;
}
.ui-desktop-icon-button { display: flex; flex-direction: column; align-items: center; background: none; border: 1px dotted transparent; color: #fff; }
.ui-desktop-icon-button[data-ui-selected="true"] { background: rgba(0, 0, 128, 0.5); border-color: #fff; }
.ui-desktop-icon-button[data-ui-dragging="true"] { opacity: 0.4; }
.ui-desktop-icon-button img { width: 32px; height: 32px; }
.ui-window-layer { position: absolute; inset: 0 0 32px 0; pointer-events: none; }
.ui-window-frame { position: absolute; pointer-events: auto; background: #c0c0c0; border: 2px outset #fff; min-width: 240px; }
.ui-window-titlebar { display: flex; align-items: center; justify-content: space-between; height: 28px; padding: 0 4px; background: #808080; color: #fff; cursor: move; touch-action: none; }
.ui-window-frame[data-ui-focused="true"] .ui-window-titlebar { background: #000080; }
.ui-window-control { width: 20px; height: 18px; margin-left: 2px; }
.ui-window-control.minimize::before { content: "_"; }
.ui-window-control.close::before { content: "x"; }
.ui-window-body { padding: 8px; }
.ui-menubar { display: flex; gap: 4px; padding: 2px 4px; position: relative; }
.ui-menu-surface { position: absolute; top: 100%; display: flex; flex-direction: column; background: #c0c0c0; border: 1px outset #fff; z-index: 1; }
.ui-taskbar { display: flex; justify-content: space-between; height: 32px; box-sizing: border-box; background: #c0c0c0; border-top: 2px outset #fff; z-index: 100; }
.ui-taskbar-start { display: flex; align-items: center; gap: 4px; padding: 0 6px; font-weight: bold; }
.ui-taskbar-start img { width: 20px; height: 20px; }
.ui-taskbar-section[data-ui-slot="tabs"] { display: flex; gap: 4px; padding: 2px; overflow: hidden; }
.ui-taskbar-button[aria-pressed="true"] { border-style: inset; }
.ui-clock { align-self: center; padding: 0 8px; }
"#;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Personal Web Desktop" />
        <Meta name="description" content="A browser-hosted desktop with movable windows and a taskbar." />
        <Style>{DESKTOP_CSS}</Style>

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
