//! Latency connections: ingest system and full-replacement reconciliation.

use bevy::prelude::*;

use crate::data::{CloudProvider, LatencyChannel, LatencySnapshot};
use crate::render::{GlobeRenderer, RendererResource};
use crate::scene::globe::ServerCatalog;
use crate::ui::HudState;

/// One latency measurement as a scene entity. Endpoint positions and color
/// are resolved at spawn time; the draw system only reads them back.
#[derive(Component)]
pub struct ConnectionLine {
    pub from_id: String,
    pub from_provider: CloudProvider,
    pub to_id: String,
    pub to_provider: CloudProvider,
    pub latency_ms: f64,
    pub observed_at_ms: u64,
    pub from_pos: Vec3,
    pub to_pos: Vec3,
    pub color: Color,
}

/// Drains the feed channel once per frame and applies the newest snapshot.
///
/// Full replacement is the contract: the latest snapshot supersedes both the
/// on-screen set and any older snapshots still queued. An empty channel or a
/// snapshot with no edges mutates nothing, so a feed gap never blanks the
/// view. This system is the only writer of connection entities, which keeps
/// reconciliations strictly serialized.
pub fn ingest_latency(
    mut commands: Commands,
    channel: Res<LatencyChannel>,
    renderer: Res<RendererResource>,
    catalog: Res<ServerCatalog>,
    existing: Query<Entity, With<ConnectionLine>>,
    mut hud: ResMut<HudState>,
) {
    let mut latest: Option<LatencySnapshot> = None;
    while let Ok(snapshot) = channel.0.try_recv() {
        if !snapshot.edges.is_empty() {
            latest = Some(snapshot);
        }
    }
    let Some(snapshot) = latest else {
        return;
    };

    let drawn = replace_connections(
        &mut commands,
        &existing,
        renderer.0.as_ref(),
        &catalog,
        &snapshot,
    );
    hud.update_from_snapshot(&snapshot, drawn);
}

/// Removes every existing connection entity, then spawns one line per edge
/// whose endpoints resolve against the catalog. Edges naming an unknown
/// server, or a provider the named server is not placed in, are skipped
/// silently — the feed is untrusted and a bad edge is not an error.
/// Returns the number of connections spawned.
pub fn replace_connections(
    commands: &mut Commands,
    existing: &Query<Entity, With<ConnectionLine>>,
    renderer: &dyn GlobeRenderer,
    catalog: &ServerCatalog,
    snapshot: &LatencySnapshot,
) -> usize {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for edge in &snapshot.edges {
        let (Some(from), Some(to)) = (catalog.server(&edge.from), catalog.server(&edge.to))
        else {
            continue;
        };
        let (Some(from_pos), Some(to_pos)) = (
            renderer.endpoint_position(from, edge.from_provider),
            renderer.endpoint_position(to, edge.to_provider),
        ) else {
            continue;
        };

        renderer.spawn_connection(commands, edge, from_pos, to_pos);
        spawned += 1;
    }
    spawned
}

/// Draws every connection as a straight chord. Runs every frame after
/// ingestion, so a reconciliation is never visible half-applied.
pub fn draw_connections(mut gizmos: Gizmos, lines: Query<&ConnectionLine>) {
    for line in &lines {
        gizmos.line(line.from_pos, line.to_pos, line.color);
    }
}
