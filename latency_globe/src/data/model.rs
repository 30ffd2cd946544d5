// Feed-agnostic reference and measurement types.
// The mock feed stays in mock.rs; fixture serialization happens via serde here.

use serde::{Deserialize, Serialize};

/// Cloud providers a server or region can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(rename = "Azure")]
    Azure,
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Gcp => "GCP",
            CloudProvider::Azure => "Azure",
        };
        f.write_str(name)
    }
}

/// One (provider, region) placement of an exchange server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderPlacement {
    pub provider: CloudProvider,
    pub region: String,
}

/// An exchange server with its geographic position and provider placements.
/// Reference data, immutable for the session. `providers` is never empty and
/// its order fixes the radial offset of each marker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeServer {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub providers: Vec<ProviderPlacement>,
}

impl ExchangeServer {
    /// Index of a provider in this server's placement list, or `None` if the
    /// server has no placement with that provider.
    pub fn provider_index(&self, provider: CloudProvider) -> Option<usize> {
        self.providers.iter().position(|p| p.provider == provider)
    }
}

/// A cloud provider's regional footprint. Reference data, immutable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CloudRegion {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub provider: CloudProvider,
    pub server_count: u32,
}

/// One latency measurement between two (server, provider) endpoints.
/// Transient: superseded wholesale on every feed tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatencyEdge {
    pub from: String,
    pub from_provider: CloudProvider,
    pub to: String,
    pub to_provider: CloudProvider,
    pub latency_ms: f64,
    pub timestamp_ms: u64,
}

/// The full edge set delivered by one feed tick. Not a delta.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LatencySnapshot {
    pub edges: Vec<LatencyEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_index_follows_placement_order() {
        let server = ExchangeServer {
            id: "x".into(),
            name: "X".into(),
            lat: 0.0,
            lng: 0.0,
            providers: vec![
                ProviderPlacement {
                    provider: CloudProvider::Gcp,
                    region: "us-central1".into(),
                },
                ProviderPlacement {
                    provider: CloudProvider::Aws,
                    region: "us-east-1".into(),
                },
            ],
        };

        assert_eq!(server.provider_index(CloudProvider::Gcp), Some(0));
        assert_eq!(server.provider_index(CloudProvider::Aws), Some(1));
        assert_eq!(server.provider_index(CloudProvider::Azure), None);
    }

    #[test]
    fn provider_serializes_with_display_names() {
        let json = serde_json::to_string(&CloudProvider::Azure).unwrap();
        assert_eq!(json, "\"Azure\"");
        let back: CloudProvider = serde_json::from_str("\"AWS\"").unwrap();
        assert_eq!(back, CloudProvider::Aws);
    }
}
