//! Selected-pair inspector: side panel showing the pair chosen by clicking
//! a marker, plus the live latency for that pair when one is on screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::picking::PairSelected;
use crate::scene::ConnectionLine;

/// Trend-chart window the inspector reports against. Injected as a resource
/// so consumers never reach for ambient state.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Hour1,
    Hours24,
    Days7,
    Days30,
}

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Hour1 => "1h",
            TimeRange::Hours24 => "24h",
            TimeRange::Days7 => "7d",
            TimeRange::Days30 => "30d",
        }
    }
}

/// The currently selected from/to pair, if any. `Esc` clears it.
#[derive(Resource, Default)]
pub struct SelectedPair {
    pub pair: Option<PairSelected>,
}

pub fn inspector_plugin(app: &mut App) {
    app.init_resource::<SelectedPair>()
        .init_resource::<TimeRange>()
        .add_systems(
            Update,
            (track_selection_system, dismiss_selection_system, inspector_panel_system).chain(),
        );
}

fn track_selection_system(mut events: EventReader<PairSelected>, mut selected: ResMut<SelectedPair>) {
    if let Some(pair) = events.read().last() {
        selected.pair = Some(pair.clone());
    }
}

fn dismiss_selection_system(keys: Res<ButtonInput<KeyCode>>, mut selected: ResMut<SelectedPair>) {
    if keys.just_pressed(KeyCode::Escape) {
        selected.pair = None;
    }
}

fn inspector_panel_system(
    mut contexts: EguiContexts,
    selected: Res<SelectedPair>,
    time_range: Res<TimeRange>,
    connections: Query<&ConnectionLine>,
) {
    let Some(ref pair) = selected.pair else {
        return;
    };

    let live = current_latency(pair, connections.iter());

    egui::SidePanel::right("pair_inspector")
        .default_width(260.0)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
                .inner_margin(egui::Margin::same(14)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new("Selected Pair")
                    .size(18.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(8.0);

            ui.label(format!("From  {} ({})", pair.from, pair.from_provider));
            ui.label(format!("To    {} ({})", pair.to, pair.to_provider));
            ui.add_space(8.0);

            match live {
                Some(ms) => ui.label(format!("Latency  {ms:.0} ms")),
                None => ui.label(
                    egui::RichText::new("Latency  no live sample")
                        .color(egui::Color32::from_rgb(140, 160, 180)),
                ),
            };
            ui.label(format!("Range    {}", time_range.label()));
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new("Esc to dismiss")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(120, 120, 140)),
            );
        });
}

/// Latency of the on-screen connection matching the pair, in either
/// direction. `None` when no current connection matches (for instance the
/// initial self-to-self pair).
fn current_latency<'a>(
    pair: &PairSelected,
    connections: impl IntoIterator<Item = &'a ConnectionLine>,
) -> Option<f64> {
    connections.into_iter().find_map(|line| {
        let forward = line.from_id == pair.from
            && line.from_provider == pair.from_provider
            && line.to_id == pair.to
            && line.to_provider == pair.to_provider;
        let reverse = line.from_id == pair.to
            && line.from_provider == pair.to_provider
            && line.to_id == pair.from
            && line.to_provider == pair.from_provider;
        (forward || reverse).then_some(line.latency_ms)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CloudProvider::*;

    fn line(
        from: &str,
        from_provider: crate::data::CloudProvider,
        to: &str,
        to_provider: crate::data::CloudProvider,
        latency_ms: f64,
    ) -> ConnectionLine {
        ConnectionLine {
            from_id: from.into(),
            from_provider,
            to_id: to.into(),
            to_provider,
            latency_ms,
            observed_at_ms: 0,
            from_pos: Vec3::ZERO,
            to_pos: Vec3::ZERO,
            color: Color::WHITE,
        }
    }

    #[test]
    fn matches_pair_in_either_direction() {
        let pair = PairSelected {
            from: "binance-us".into(),
            from_provider: Aws,
            to: "okx-asia".into(),
            to_provider: Gcp,
        };
        let forward = line("binance-us", Aws, "okx-asia", Gcp, 45.0);
        let reverse = line("okx-asia", Gcp, "binance-us", Aws, 52.0);

        assert_eq!(current_latency(&pair, [&forward]), Some(45.0));
        assert_eq!(current_latency(&pair, [&reverse]), Some(52.0));
    }

    #[test]
    fn self_pair_has_no_live_sample() {
        let pair = PairSelected {
            from: "binance-us".into(),
            from_provider: Aws,
            to: "binance-us".into(),
            to_provider: Aws,
        };
        let other = line("binance-us", Aws, "okx-asia", Gcp, 45.0);

        assert_eq!(current_latency(&pair, [&other]), None);
    }

    #[test]
    fn provider_mismatch_does_not_match() {
        let pair = PairSelected {
            from: "binance-us".into(),
            from_provider: Azure,
            to: "okx-asia".into(),
            to_provider: Gcp,
        };
        let aws_line = line("binance-us", Aws, "okx-asia", Gcp, 45.0);

        assert_eq!(current_latency(&pair, [&aws_line]), None);
    }
}
