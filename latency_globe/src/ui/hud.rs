//! HUD overlay: feed stats and FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::data::LatencySnapshot;

/// Live HUD state, updated each time a snapshot is applied.
#[derive(Resource, Default)]
pub struct HudState {
    /// Edge count of the last applied snapshot, before resolution.
    pub edges_received: usize,
    /// Connections actually spawned from that snapshot.
    pub connections_drawn: usize,
    pub snapshots_applied: u64,
    pub last_observed_ms: u64,
}

impl HudState {
    pub fn update_from_snapshot(&mut self, snapshot: &LatencySnapshot, drawn: usize) {
        self.edges_received = snapshot.edges.len();
        self.connections_drawn = drawn;
        self.snapshots_applied += 1;
        self.last_observed_ms = snapshot
            .edges
            .iter()
            .map(|e| e.timestamp_ms)
            .max()
            .unwrap_or(self.last_observed_ms);
    }
}

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .init_resource::<HudState>()
        .add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    hud: Res<HudState>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Latency Topology")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new("Latency Topology")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!(
                "Connections  {}/{}",
                hud.connections_drawn, hud.edges_received
            ));
            ui.label(format!("Snapshots    {}", hud.snapshots_applied));
            ui.label(format!(
                "Observed     {}",
                format_timestamp(hud.last_observed_ms / 1000)
            ));
            ui.add_space(4.0);

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn format_timestamp(ts_secs: u64) -> String {
    let secs = ts_secs % 60;
    let mins = (ts_secs / 60) % 60;
    let hours = (ts_secs / 3600) % 24;
    format!("{hours:02}:{mins:02}:{secs:02} UTC")
}
