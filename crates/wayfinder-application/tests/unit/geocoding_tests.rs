//! Tests for the geocoding waterfall

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use wayfinder_application::GeocodingService;
use wayfinder_domain::error::{Error, Result};
use wayfinder_domain::ports::providers::GeocodingProvider;
use wayfinder_domain::{GeocodedLocation, RoutePoint};

// ============================================================================
// Mock providers
// ============================================================================

struct StaticGeocoder {
    name: &'static str,
    address: Option<&'static str>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticGeocoder {
    fn answering(name: &'static str, address: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            address: Some(address),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn abstaining(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            address: None,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            address: None,
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl GeocodingProvider for StaticGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Option<GeocodedLocation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::http(self.name, 500, "server error"));
        }
        Ok(self.address.map(|address| GeocodedLocation {
            point: RoutePoint {
                lat: 5.6037,
                lng: -0.1870,
            },
            address: address.to_string(),
        }))
    }

    async fn reverse(&self, _point: RoutePoint) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::http(self.name, 500, "server error"));
        }
        Ok(self.address.map(str::to_string))
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

// ============================================================================
// Forward geocoding
// ============================================================================

#[tokio::test]
async fn test_coordinate_input_bypasses_providers() {
    let primary = StaticGeocoder::answering("Primary", "Somewhere");
    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![primary.clone()];
    let service = GeocodingService::new(providers);

    let location = service.geocode("5.6037, -0.1870").await.unwrap();
    assert_eq!(location.point.lat, 5.6037);
    assert_eq!(location.address, "5.6037, -0.1870");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_forward_waterfall_prefers_primary() {
    let primary = StaticGeocoder::answering("Primary", "Accra Mall, Accra");
    let fallback = StaticGeocoder::answering("Fallback", "Somewhere else");
    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![primary.clone(), fallback.clone()];
    let service = GeocodingService::new(providers);

    let location = service.geocode("Accra Mall").await.unwrap();
    assert_eq!(location.address, "Accra Mall, Accra");
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_forward_waterfall_falls_through_failure() {
    let primary = StaticGeocoder::failing("Primary");
    let fallback = StaticGeocoder::answering("Fallback", "University of Ghana, Legon");
    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![primary.clone(), fallback.clone()];
    let service = GeocodingService::new(providers);

    let location = service.geocode("University of Ghana").await.unwrap();
    assert_eq!(location.address, "University of Ghana, Legon");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_forward_returns_none_when_nothing_answers() {
    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![
        StaticGeocoder::abstaining("Primary"),
        StaticGeocoder::failing("Fallback"),
    ];
    let service = GeocodingService::new(providers);
    assert!(service.geocode("nowhere in particular").await.is_none());
}

// ============================================================================
// Reverse geocoding
// ============================================================================

#[tokio::test]
async fn test_reverse_uses_provider_answer() {
    let providers: Vec<Arc<dyn GeocodingProvider>> =
        vec![StaticGeocoder::answering("Primary", "Legon, Accra, Ghana")];
    let service = GeocodingService::new(providers);

    let address = service
        .reverse(RoutePoint {
            lat: 5.6508,
            lng: -0.1870,
        })
        .await;
    assert_eq!(address, "Legon, Accra, Ghana");
}

#[tokio::test]
async fn test_reverse_degrades_to_coordinate_string() {
    let providers: Vec<Arc<dyn GeocodingProvider>> = vec![
        StaticGeocoder::abstaining("Primary"),
        StaticGeocoder::failing("Fallback"),
    ];
    let service = GeocodingService::new(providers);

    let address = service
        .reverse(RoutePoint {
            lat: 5.6037,
            lng: -0.1870,
        })
        .await;
    assert_eq!(address, "5.603700, -0.187000");
}
