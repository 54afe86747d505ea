//! Tests for the directions resolution waterfall
//!
//! Exercises the resolver against mock providers with call counters:
//! priority order, short-circuiting, fallthrough on abstention and on
//! typed failure, and the guaranteed geometric terminal case.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use wayfinder_application::DirectionsService;
use wayfinder_domain::error::{Error, Result};
use wayfinder_domain::geo::haversine_distance;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::{RoutePoint, RouteResult, TravelProfile};

// ============================================================================
// Mock providers
// ============================================================================

fn canned_route(provider: &str) -> RouteResult {
    RouteResult {
        distance_meters: 1200.0,
        duration_seconds: 90.0,
        instructions: vec!["Head north".to_string(), "Arrive".to_string()],
        geometry: vec![[-0.1870, 5.6037], [-0.1770, 5.6137]],
        provider: provider.to_string(),
    }
}

struct SucceedingProvider {
    name: &'static str,
    calls: AtomicUsize,
}

impl SucceedingProvider {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl RoutingProvider for SucceedingProvider {
    async fn directions(
        &self,
        _start: RoutePoint,
        _end: RoutePoint,
        _profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(canned_route(self.name)))
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

struct AbstainingProvider {
    name: &'static str,
    calls: AtomicUsize,
}

impl AbstainingProvider {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl RoutingProvider for AbstainingProvider {
    async fn directions(
        &self,
        _start: RoutePoint,
        _end: RoutePoint,
        _profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

enum FailureKind {
    RateLimited,
    AuthFailed,
    Network,
}

struct FailingProvider {
    name: &'static str,
    kind: FailureKind,
    calls: AtomicUsize,
}

impl FailingProvider {
    fn new(name: &'static str, kind: FailureKind) -> Arc<Self> {
        Arc::new(Self {
            name,
            kind,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl RoutingProvider for FailingProvider {
    async fn directions(
        &self,
        _start: RoutePoint,
        _end: RoutePoint,
        _profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match self.kind {
            FailureKind::RateLimited => Error::rate_limited(self.name),
            FailureKind::AuthFailed => Error::auth_failed(self.name, "invalid key"),
            FailureKind::Network => Error::network(self.name, "request timed out"),
        })
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

fn accra_pair() -> (RoutePoint, RoutePoint) {
    (
        RoutePoint {
            lat: 5.6037,
            lng: -0.1870,
        },
        RoutePoint {
            lat: 5.6137,
            lng: -0.1770,
        },
    )
}

// ============================================================================
// Resolver behavior
// ============================================================================

#[tokio::test]
async fn test_primary_success_short_circuits() {
    let primary = SucceedingProvider::new("Primary");
    let secondary = SucceedingProvider::new("Secondary");
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![primary.clone(), secondary.clone()];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;

    assert_eq!(route.provider, "Primary");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
    // Short-circuit: later providers are never invoked
    assert_eq!(secondary.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fallthrough_on_abstention() {
    let primary = AbstainingProvider::new("Primary");
    let secondary = SucceedingProvider::new("Secondary");
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![primary.clone(), secondary.clone()];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;

    assert_eq!(route.provider, "Secondary");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
    assert_eq!(secondary.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fallthrough_on_rate_limit() {
    let primary = FailingProvider::new("Primary", FailureKind::RateLimited);
    let secondary = SucceedingProvider::new("Secondary");
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![primary.clone(), secondary.clone()];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;

    assert_eq!(route.provider, "Secondary");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_mixed_failures_still_resolve() {
    let first = FailingProvider::new("First", FailureKind::AuthFailed);
    let second = FailingProvider::new("Second", FailureKind::Network);
    let third = AbstainingProvider::new("Third");
    let fourth = SucceedingProvider::new("Fourth");
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![
        first.clone(),
        second.clone(),
        third.clone(),
        fourth.clone(),
    ];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Walking)
        .await;

    assert_eq!(route.provider, "Fourth");
    for provider_calls in [&first.calls, &second.calls, &third.calls, &fourth.calls] {
        assert_eq!(provider_calls.load(Ordering::SeqCst), 1);
    }
}

#[tokio::test]
async fn test_terminal_fallback_when_all_abstain_or_fail() {
    let first = AbstainingProvider::new("First");
    let second = FailingProvider::new("Second", FailureKind::RateLimited);
    let third = AbstainingProvider::new("Third");
    let fourth = AbstainingProvider::new("Fourth");
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![first, second, third, fourth];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;

    assert!(route.is_estimate());
    assert_eq!(route.provider, "Fallback Estimation");
    assert_eq!(route.instructions.len(), 3);
    assert_eq!(
        route.distance_meters,
        haversine_distance(start, end).round()
    );
}

#[tokio::test]
async fn test_empty_provider_list_yields_estimate() {
    let service = DirectionsService::new(Vec::new());
    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;
    assert!(route.is_estimate());
}

#[tokio::test]
async fn test_accra_scenario_estimate_values() {
    // All providers abstaining over the Accra test pair: ~1569 m driving
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![AbstainingProvider::new("Primary")];
    let service = DirectionsService::new(providers);

    let (start, end) = accra_pair();
    let route = service
        .get_directions(start, end, TravelProfile::Driving)
        .await;

    let expected = haversine_distance(start, end);
    assert!((route.distance_meters - expected).abs() <= 1.0);
    assert!((route.distance_meters - 1569.0).abs() / 1569.0 < 0.05);
    assert!(route.instructions[0].starts_with("Head"));
    assert_eq!(route.provider, "Fallback Estimation");
}

#[test]
fn test_provider_names_preserve_priority_order() {
    let providers: Vec<Arc<dyn RoutingProvider>> = vec![
        SucceedingProvider::new("Primary"),
        AbstainingProvider::new("Secondary"),
    ];
    let service = DirectionsService::new(providers);
    assert_eq!(service.provider_names(), vec!["Primary", "Secondary"]);
}
