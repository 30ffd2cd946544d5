use std::time::Duration;

use latency_globe::{
    init_fixture_channel, CloudProvider, FeedConfig, LatencyEdge, LatencyFeed, LatencySnapshot,
    MockFeed,
};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn fast_config(seed: u64) -> FeedConfig {
    FeedConfig {
        interval: Duration::from_millis(10),
        outage_rate: 0.0,
        seed: Some(seed),
        ..FeedConfig::default()
    }
}

#[test]
fn mock_feed_delivers_resolvable_snapshots() {
    let config = fast_config(1);
    let servers = config.servers.clone();
    let rx = MockFeed::spawn(config);

    let snapshot = rx
        .recv_timeout(RECV_TIMEOUT)
        .expect("should receive a snapshot");

    assert!(!snapshot.edges.is_empty());
    for edge in &snapshot.edges {
        let from = servers
            .iter()
            .find(|s| s.id == edge.from)
            .expect("from server in catalog");
        let to = servers
            .iter()
            .find(|s| s.id == edge.to)
            .expect("to server in catalog");
        assert!(from.provider_index(edge.from_provider).is_some());
        assert!(to.provider_index(edge.to_provider).is_some());
        assert!(edge.latency_ms > 0.0);
    }
}

#[test]
fn mock_feed_ticks_repeatedly() {
    let rx = MockFeed::spawn(fast_config(2));

    for _ in 0..3 {
        rx.recv_timeout(RECV_TIMEOUT)
            .expect("feed should keep ticking");
    }
}

#[test]
fn seeded_feeds_produce_identical_first_snapshots() {
    let a = MockFeed::spawn(fast_config(42))
        .recv_timeout(RECV_TIMEOUT)
        .unwrap();
    let b = MockFeed::spawn(fast_config(42))
        .recv_timeout(RECV_TIMEOUT)
        .unwrap();

    assert_eq!(a.edges.len(), b.edges.len());
    for (ea, eb) in a.edges.iter().zip(&b.edges) {
        assert_eq!(ea.from, eb.from);
        assert_eq!(ea.from_provider, eb.from_provider);
        assert_eq!(ea.to_provider, eb.to_provider);
        assert_eq!(ea.latency_ms, eb.latency_ms);
    }
}

#[test]
fn fixture_channel_replays_snapshots_in_order() {
    let snapshots = vec![
        LatencySnapshot {
            edges: vec![LatencyEdge {
                from: "binance-us".into(),
                from_provider: CloudProvider::Aws,
                to: "okx-asia".into(),
                to_provider: CloudProvider::Gcp,
                latency_ms: 45.0,
                timestamp_ms: 1,
            }],
        },
        LatencySnapshot {
            edges: vec![LatencyEdge {
                from: "okx-asia".into(),
                from_provider: CloudProvider::Gcp,
                to: "deribit-eu".into(),
                to_provider: CloudProvider::Azure,
                latency_ms: 80.0,
                timestamp_ms: 2,
            }],
        },
    ];

    let path = std::env::temp_dir().join(format!(
        "latency_globe_fixture_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, serde_json::to_string(&snapshots).unwrap()).unwrap();

    let channel = init_fixture_channel(&path);
    let first = channel.0.recv_timeout(RECV_TIMEOUT).unwrap();
    let second = channel.0.recv_timeout(RECV_TIMEOUT).unwrap();

    assert_eq!(first.edges[0].from, "binance-us");
    assert_eq!(second.edges[0].from, "okx-asia");

    std::fs::remove_file(&path).ok();
}
