//! Meridian — latency topology visualizer. Runs the latency_globe app.

use bevy::prelude::Color;
use latency_globe::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();

    GlobeBuilder::new()
        .feed_from_env()
        .window_title("Meridian — Latency Topology")
        .clear_color(Color::srgb(0.02, 0.03, 0.06))
        .build()
        .run();
}
