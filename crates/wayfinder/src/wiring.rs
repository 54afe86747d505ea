//! Service assembly
//!
//! Builds one HTTP client, instantiates every configured provider adapter
//! in fixed priority order, and hands the lists to the use-case services.
//! The order is not configurable: OpenRouteService, TomTom, GraphHopper,
//! then each public OSRM instance in the order they appear in config.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use wayfinder_application::{DirectionsService, GeocodingService};
use wayfinder_domain::error::{Error, Result};
use wayfinder_domain::ports::providers::{GeocodingProvider, RoutingProvider};
use wayfinder_providers::geocoding::{GeoapifyGeocodingProvider, MapboxGeocodingProvider};
use wayfinder_providers::routing::{
    GraphHopperRoutingProvider, OpenRouteRoutingProvider, OsrmRoutingProvider,
    TomTomRoutingProvider,
};

use crate::config::AppConfig;

/// Default timeout for authenticated commercial providers
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The assembled use-case services
pub struct Services {
    /// Directions resolution
    pub directions: DirectionsService,
    /// Forward and reverse geocoding
    pub geocoding: GeocodingService,
}

/// Build both services from configuration
pub fn build_services(config: &AppConfig) -> Result<Services> {
    let http_client = Client::builder()
        .timeout(DEFAULT_HTTP_TIMEOUT)
        .build()
        .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

    Ok(Services {
        directions: build_directions_service(config, &http_client),
        geocoding: build_geocoding_service(config, &http_client),
    })
}

fn build_directions_service(config: &AppConfig, http_client: &Client) -> DirectionsService {
    let routing = &config.routing;

    let mut providers: Vec<Arc<dyn RoutingProvider>> = vec![
        Arc::new(OpenRouteRoutingProvider::new(
            routing.openroute.api_key.clone(),
            routing.openroute.base_url.clone(),
            http_client.clone(),
        )),
        Arc::new(TomTomRoutingProvider::new(
            routing.tomtom.api_key.clone(),
            routing.tomtom.base_url.clone(),
            http_client.clone(),
        )),
        Arc::new(GraphHopperRoutingProvider::new(
            routing.graphhopper.api_key.clone(),
            routing.graphhopper.base_url.clone(),
            http_client.clone(),
        )),
    ];

    let osrm_timeout = Duration::from_secs(routing.osrm.timeout_secs);
    for server in &routing.osrm.servers {
        providers.push(Arc::new(OsrmRoutingProvider::new(
            server.clone(),
            osrm_timeout,
            http_client.clone(),
        )));
    }

    DirectionsService::new(providers)
}

fn build_geocoding_service(config: &AppConfig, http_client: &Client) -> GeocodingService {
    let geocoding = &config.geocoding;

    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![
        Arc::new(GeoapifyGeocodingProvider::new(
            geocoding.geoapify.api_key.clone(),
            geocoding.geoapify.base_url.clone(),
            geocoding.country.clone(),
            http_client.clone(),
        )),
        Arc::new(MapboxGeocodingProvider::new(
            geocoding.mapbox.api_key.clone(),
            geocoding.mapbox.base_url.clone(),
            geocoding.country.clone(),
            http_client.clone(),
        )),
    ];

    GeocodingService::new(providers)
}
