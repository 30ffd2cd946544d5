//! Built-in exchange server and cloud region catalog.
//!
//! Session-immutable reference data. Every marker and connection endpoint
//! resolves against this catalog; the latency feed never adds to it.

use crate::data::model::{
    CloudProvider, CloudRegion, ExchangeServer, ProviderPlacement,
};

fn placement(provider: CloudProvider, region: &str) -> ProviderPlacement {
    ProviderPlacement {
        provider,
        region: region.to_string(),
    }
}

/// The known exchange servers, each placed in all three providers.
pub fn exchange_servers() -> Vec<ExchangeServer> {
    use CloudProvider::*;
    vec![
        ExchangeServer {
            id: "binance-us".into(),
            name: "Binance US".into(),
            lat: 40.7128,
            lng: -74.0060,
            providers: vec![
                placement(Aws, "us-east-1"),
                placement(Gcp, "us-central1"),
                placement(Azure, "eastus"),
            ],
        },
        ExchangeServer {
            id: "okx-asia".into(),
            name: "OKX Asia".into(),
            lat: 35.6762,
            lng: 139.6503,
            providers: vec![
                placement(Aws, "ap-northeast-1"),
                placement(Gcp, "asia-northeast1"),
                placement(Azure, "japaneast"),
            ],
        },
        ExchangeServer {
            id: "deribit-eu".into(),
            name: "Deribit EU".into(),
            lat: 52.3702,
            lng: 4.8952,
            providers: vec![
                placement(Aws, "eu-west-1"),
                placement(Gcp, "europe-west4"),
                placement(Azure, "westeurope"),
            ],
        },
    ]
}

/// The known cloud regions.
pub fn cloud_regions() -> Vec<CloudRegion> {
    use CloudProvider::*;
    let region = |id: &str, name: &str, lat: f64, lng: f64, provider, server_count| CloudRegion {
        id: id.into(),
        name: name.into(),
        lat,
        lng,
        provider,
        server_count,
    };
    vec![
        region("aws-us-east-1", "AWS US East", 38.8951, -77.0364, Aws, 10),
        region("gcp-us-central1", "GCP US Central", 41.8781, -93.0977, Gcp, 8),
        region("azure-eastus", "Azure East US", 37.7749, -77.0364, Azure, 12),
        region("aws-ap-northeast-1", "AWS Asia Northeast", 35.6762, 139.6503, Aws, 6),
        region("gcp-asia-northeast1", "GCP Asia Northeast", 35.6762, 139.6503, Gcp, 8),
        region("azure-japaneast", "Azure Japan East", 35.6762, 139.6503, Azure, 7),
        region("aws-eu-west-1", "AWS EU West", 53.3498, -6.2603, Aws, 9),
        region("gcp-europe-west4", "GCP Europe West", 52.3702, 4.8952, Gcp, 10),
        region("azure-westeurope", "Azure West Europe", 52.3702, 4.8952, Azure, 12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servers_have_valid_coordinates_and_placements() {
        for server in exchange_servers() {
            assert!((-90.0..=90.0).contains(&server.lat), "{}", server.id);
            assert!((-180.0..=180.0).contains(&server.lng), "{}", server.id);
            assert!(!server.providers.is_empty(), "{}", server.id);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let servers = exchange_servers();
        let mut ids: Vec<&str> = servers.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), servers.len());

        let regions = cloud_regions();
        let mut ids: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), regions.len());
    }
}
