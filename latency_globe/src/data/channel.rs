use std::path::Path;

use crossbeam_channel::Receiver;

use crate::data::mock::MockFeed;
use crate::data::model::LatencySnapshot;
use crate::data::{FeedConfig, LatencyFeed};

/// Bevy resource holding the channel from the feed thread.
/// The ingest system drains this once per frame; an empty channel means the
/// previous connection set stays on screen.
#[derive(bevy::prelude::Resource)]
pub struct LatencyChannel(pub Receiver<LatencySnapshot>);

/// Create a latency channel and spawn the mock feed on a dedicated thread.
pub fn init_feed_channel(config: FeedConfig) -> LatencyChannel {
    LatencyChannel(MockFeed::spawn(config))
}

/// Create a latency channel that replays pre-recorded snapshots from a JSON
/// fixture file. Snapshots are paced 50ms apart to simulate live ticks.
pub fn init_fixture_channel(path: &Path) -> LatencyChannel {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    let snapshots: Vec<LatencySnapshot> = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()));

    let (tx, rx) = crossbeam_channel::bounded(16);

    std::thread::spawn(move || {
        for snapshot in snapshots {
            if tx.send(snapshot).is_err() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
    });

    LatencyChannel(rx)
}
