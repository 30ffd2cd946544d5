//! Hover tooltip: server details following the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::picking::{HoverChanged, HoverTarget};
use crate::scene::ServerCatalog;

/// Last hover event payload, owned by the tooltip.
#[derive(Resource, Default)]
pub struct TooltipState {
    pub target: Option<HoverTarget>,
}

pub fn tooltip_plugin(app: &mut App) {
    app.init_resource::<TooltipState>()
        .add_systems(Update, (track_hover_system, tooltip_panel_system).chain());
}

fn track_hover_system(mut events: EventReader<HoverChanged>, mut state: ResMut<TooltipState>) {
    for HoverChanged(target) in events.read() {
        state.target = target.clone();
    }
}

fn tooltip_panel_system(
    mut contexts: EguiContexts,
    state: Res<TooltipState>,
    catalog: Res<ServerCatalog>,
    windows: Query<&Window>,
) {
    let Some(ref target) = state.target else {
        return;
    };
    // Hover events only ever name catalog servers, but the feed rule applies
    // here too: an unresolvable reference just shows nothing.
    let Some(server) = catalog.server(&target.server_id) else {
        return;
    };
    let Some(cursor) = windows.get_single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };

    let providers = server
        .providers
        .iter()
        .map(|p| format!("{} ({})", p.provider, p.region))
        .collect::<Vec<_>>()
        .join(", ");

    egui::Area::new(egui::Id::new("marker_tooltip"))
        .fixed_pos(egui::pos2(cursor.x + 10.0, cursor.y + 10.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
                .inner_margin(egui::Margin::same(8))
                .corner_radius(egui::CornerRadius::same(4))
                .show(ui, |ui| {
                    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
                    ui.visuals_mut().override_text_color =
                        Some(egui::Color32::from_rgb(200, 220, 240));

                    ui.label(
                        egui::RichText::new(&server.name)
                            .size(14.0)
                            .color(egui::Color32::from_rgb(100, 220, 180)),
                    );
                    ui.label(format!("Location  {:.2}, {:.2}", server.lat, server.lng));
                    ui.label(format!("Hovering  {}", target.provider));
                    ui.label(format!("Providers {providers}"));
                });
        });
}
