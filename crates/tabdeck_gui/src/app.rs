//! Native egui app shell for Tabdeck.

mod ui;

use crate::backend::{spawn_sim, MountId, SimDelays, SimEvent, SimHandle};
use eframe::egui::{self, Color32};
use std::net::SocketAddr;
use std::time::Duration;
use tabdeck_core::panels::{
    BuildPanel, CachePanel, ContactPanel, FetchPanel, TodoPanel, TransitionPanel,
};
use tabdeck_core::{AppError, Config, TabId, TabSelector};
use tabdeck_server::{AppState, EmbeddedServer};
use tracing::debug;

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 680.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [780.0, 540.0];

const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x0d, 0x11, 0x17);
const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x16, 0x1b, 0x22);
const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xc9, 0xd1, 0xd9);
const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8b, 0x94, 0x9e);
const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x76, 0x81);
const COLOR_ACCENT: Color32 = Color32::from_rgb(0x38, 0x8b, 0xfd);
const COLOR_OK: Color32 = Color32::from_rgb(0x3f, 0xb9, 0x50);
const COLOR_ERROR: Color32 = Color32::from_rgb(0xf8, 0x51, 0x49);

/// How soon to repaint while a simulated operation is pending.
const PENDING_REPAINT: Duration = Duration::from_millis(50);

/// The panel bound to the current tab selection.
///
/// A sum type, so exactly one panel exists at any time. Replacing the variant
/// on a tab switch drops the previous panel's state, which is the demo's
/// reset-on-remount behavior.
enum ActivePanel {
    Fetch(FetchPanel),
    Cache(CachePanel),
    Transition(TransitionPanel),
    Contact(ContactPanel),
    Build(BuildPanel),
    Todos(TodoPanel),
}

impl ActivePanel {
    /// Construct the fresh panel for `tab`.
    fn for_tab(tab: TabId) -> Self {
        match tab {
            TabId::AsyncRequest => ActivePanel::Fetch(FetchPanel::new()),
            TabId::CacheSemantics => ActivePanel::Cache(CachePanel::new()),
            TabId::React19Support => ActivePanel::Transition(TransitionPanel::new()),
            TabId::NextForm => ActivePanel::Contact(ContactPanel::new()),
            TabId::Turbopack => ActivePanel::Build(BuildPanel::new()),
            TabId::ServerAction => ActivePanel::Todos(TodoPanel::new()),
        }
    }

    /// Whether any simulated operation of this panel is in flight.
    fn has_pending(&self) -> bool {
        match self {
            ActivePanel::Fetch(panel) => panel.is_pending(),
            ActivePanel::Cache(panel) => panel.is_pending(),
            ActivePanel::Transition(panel) => {
                panel.is_load_pending() || panel.is_form_pending() || panel.submitted().is_some()
            }
            ActivePanel::Contact(panel) => panel.is_submitting(),
            ActivePanel::Build(panel) => panel.is_running(),
            ActivePanel::Todos(panel) => panel.is_adding() || panel.is_profile_updating(),
        }
    }
}

/// Native egui application shell.
///
/// Owns the tab selector, the single active panel, and the simulation worker
/// handle. The embedded API server lives for the whole session; its address is
/// shown in the status bar.
pub struct TabdeckApp {
    sim: SimHandle,
    selector: TabSelector,
    mount: MountId,
    panel: ActivePanel,
    _server: EmbeddedServer,
    server_addr: SocketAddr,
    server_used_fallback: bool,
    style_applied: bool,
}

impl TabdeckApp {
    /// Construct the app: start the embedded API server, spawn the simulation
    /// worker, and mount the first tab.
    ///
    /// # Errors
    /// Returns an error when the embedded server cannot start.
    pub fn new() -> Result<Self, AppError> {
        let config = Config::from_env();
        let allow_public = tabdeck_core::config::env_flag_enabled("ALLOW_PUBLIC_ACCESS");
        let server = EmbeddedServer::start(AppState::new(config), allow_public)?;
        let server_addr = server.addr();
        let server_used_fallback = server.used_fallback();

        let sim = spawn_sim(SimDelays::default());
        let selector = TabSelector::new();
        let mount: MountId = 1;
        sim.set_mount(mount);
        let panel = ActivePanel::for_tab(selector.current());

        Ok(Self {
            sim,
            selector,
            mount,
            panel,
            _server: server,
            server_addr,
            server_used_fallback,
            style_applied: false,
        })
    }

    /// Switch to `tab`, unmounting the current panel.
    ///
    /// Bumping the mount generation cancels the old panel's in-flight timers;
    /// the fresh panel starts from its initial state.
    fn select_tab(&mut self, tab: TabId) {
        if !self.selector.select(tab) {
            return;
        }
        self.mount += 1;
        self.sim.set_mount(self.mount);
        self.panel = ActivePanel::for_tab(tab);
    }

    /// Apply one worker event to the active panel.
    ///
    /// Events from a previous mount are dropped; the worker suppresses most of
    /// them already, but a completion racing the tab switch can still arrive.
    fn apply_event(&mut self, event: SimEvent) {
        if event.mount() != self.mount {
            debug!("dropping stale event: {:?}", event);
            return;
        }
        match (&mut self.panel, event) {
            (ActivePanel::Fetch(panel), SimEvent::FetchDone { record, .. }) => {
                panel.complete(record);
            }
            (ActivePanel::Cache(panel), SimEvent::CacheDone { record, .. }) => {
                panel.complete(record);
            }
            (ActivePanel::Transition(panel), SimEvent::TransitionLoaded { record, .. }) => {
                panel.complete_load(record);
            }
            (ActivePanel::Transition(panel), SimEvent::QuickFormDone { submission, .. }) => {
                panel.complete_quick_form(submission);
            }
            (ActivePanel::Transition(panel), SimEvent::QuickFormReset { .. }) => {
                panel.clear_submitted();
            }
            (ActivePanel::Contact(panel), SimEvent::ContactDone { input, .. }) => {
                panel.complete(input);
            }
            (ActivePanel::Todos(panel), SimEvent::TodoAdded { text, .. }) => {
                panel.complete_add(text);
            }
            (ActivePanel::Todos(panel), SimEvent::TodoToggled { id, .. }) => {
                panel.apply_toggle(id);
            }
            (ActivePanel::Todos(panel), SimEvent::TodoDeleted { id, .. }) => {
                panel.apply_delete(id);
            }
            (ActivePanel::Todos(panel), SimEvent::ProfileUpdated { input, .. }) => {
                panel.complete_profile_update(input);
            }
            (ActivePanel::Build(panel), SimEvent::BuildTick { kind, elapsed_ms, .. }) => {
                panel.on_tick(kind, elapsed_ms);
            }
            (ActivePanel::Build(panel), SimEvent::BuildDone { kind, .. }) => {
                panel.on_done(kind);
            }
            (_, event) => {
                // Same mount but a mismatched panel type would be a wiring bug.
                debug!("event does not match active panel: {:?}", event);
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.sim.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = COLOR_BG_PRIMARY;
        visuals.window_fill = COLOR_BG_SECONDARY;
        visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        visuals.selection.bg_fill = COLOR_ACCENT;
        ctx.set_visuals(visuals);
        self.style_applied = true;
    }
}

impl eframe::App for TabdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);
        self.drain_events();

        self.render_tab_bar(ctx);
        self.render_status_bar(ctx);

        let tab = self.selector.current();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match tab {
                TabId::AsyncRequest => self.render_fetch_panel(ui),
                TabId::CacheSemantics => self.render_cache_panel(ui),
                TabId::React19Support => self.render_transition_panel(ui),
                TabId::NextForm => self.render_contact_panel(ui),
                TabId::Turbopack => self.render_build_panel(ui),
                TabId::ServerAction => self.render_todo_panel(ui),
            });
        });

        if self.panel.has_pending() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
