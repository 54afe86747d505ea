//! OSRM Routing Provider
//!
//! Implements the RoutingProvider port against a public OSRM instance.
//! Quaternary tier: no credential required, but public instances are
//! unreliable, so every request carries a short timeout and a non-2xx
//! status is treated as an abstention rather than a failure. Only
//! transport-level problems (connect failure, timeout) surface as errors.
//!
//! One provider instance wraps one server; the wiring layer appends one
//! per configured server so the resolver's single priority list covers the
//! whole public tier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

use crate::constants::PUBLIC_ENDPOINT_USER_AGENT;
use crate::http::transport_error;
use crate::maneuver::osrm_step_instruction;

/// OSRM routing provider bound to a single public instance
pub struct OsrmRoutingProvider {
    base_url: String,
    timeout: Duration,
    http_client: Client,
    name: String,
}

impl OsrmRoutingProvider {
    /// Create a new OSRM routing provider
    ///
    /// # Arguments
    /// * `base_url` - Instance URL (e.g., "https://router.project-osrm.org")
    /// * `timeout` - Per-request timeout bound
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        let host = base_url
            .split("//")
            .nth(1)
            .unwrap_or(base_url.as_str())
            .trim_end_matches('/');
        let name = format!("OSRM ({host})");

        Self {
            base_url,
            timeout,
            http_client,
            name,
        }
    }

    /// Map the caller's profile into OSRM vocabulary
    fn osrm_profile(profile: TravelProfile) -> &'static str {
        match profile {
            TravelProfile::Walking => "foot",
            TravelProfile::Driving => "driving",
        }
    }

    /// Extract the common route shape from a decoded response
    pub(crate) fn parse_route(response: OsrmResponse, provider: &str) -> Option<RouteResult> {
        let route = response.routes?.into_iter().next()?;

        let instructions = route
            .legs
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|leg| leg.steps)
            .unwrap_or_default()
            .into_iter()
            .map(|step| {
                let maneuver = step.maneuver.unwrap_or_default();
                osrm_step_instruction(
                    maneuver.kind.as_deref().unwrap_or(""),
                    maneuver.modifier.as_deref().unwrap_or(""),
                    step.name.as_deref().unwrap_or(""),
                    maneuver.exit,
                )
            })
            .collect();

        let geometry = route
            .geometry
            .and_then(|geometry| geometry.coordinates)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|pair| {
                if pair.len() >= 2 {
                    Some([pair[0], pair[1]])
                } else {
                    None
                }
            })
            .collect();

        Some(RouteResult {
            distance_meters: route.distance.unwrap_or(0.0),
            duration_seconds: route.duration.unwrap_or(0.0),
            instructions,
            geometry,
            provider: provider.to_string(),
        })
    }
}

#[async_trait]
impl RoutingProvider for OsrmRoutingProvider {
    async fn directions(
        &self,
        start: RoutePoint,
        end: RoutePoint,
        profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        let coords = format!("{},{};{},{}", start.lng, start.lat, end.lng, end.lat);
        let url = format!(
            "{}/route/v1/{}/{}",
            self.base_url.trim_end_matches('/'),
            Self::osrm_profile(profile),
            coords
        );

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("overview", "full"),
                ("steps", "true"),
                ("geometries", "geojson"),
            ])
            .header("User-Agent", PUBLIC_ENDPOINT_USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(&self.name, e))?;

        // Public instances fail often and for uninteresting reasons; any
        // non-2xx is an abstention, not a warning-worthy failure.
        if !response.status().is_success() {
            debug!(
                provider = %self.name,
                status = response.status().as_u16(),
                "non-success status from public instance, abstaining"
            );
            return Ok(None);
        }

        let data: OsrmResponse = match response.json().await {
            Ok(data) => data,
            Err(error) => {
                debug!(
                    provider = %self.name,
                    error = %error,
                    "undecodable response, abstaining"
                );
                return Ok(None);
            }
        };

        Ok(Self::parse_route(data, &self.name))
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Response shapes (typed-but-partial; validated in parse_route)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmResponse {
    pub(crate) routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    pub(crate) distance: Option<f64>,
    pub(crate) duration: Option<f64>,
    pub(crate) geometry: Option<OsrmGeometry>,
    pub(crate) legs: Option<Vec<OsrmLeg>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmGeometry {
    pub(crate) coordinates: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmLeg {
    pub(crate) steps: Option<Vec<OsrmStep>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmStep {
    pub(crate) maneuver: Option<OsrmManeuver>,
    pub(crate) name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OsrmManeuver {
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) modifier: Option<String>,
    pub(crate) exit: Option<u64>,
}
