//! TomTom Routing Provider
//!
//! Implements the RoutingProvider port using the TomTom calculateRoute API.
//! Secondary tier. TomTom's turn guidance arrives as structured
//! instruction objects with maneuver codes rather than plain text, so this
//! adapter does the most normalization work of the four.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

use crate::http::{check_status, transport_error};
use crate::keys::usable_api_key;
use crate::maneuver::tomtom_maneuver_phrase;

const PROVIDER_NAME: &str = "TomTom";
const DEFAULT_BASE_URL: &str = "https://api.tomtom.com";

/// TomTom routing provider
pub struct TomTomRoutingProvider {
    api_key: String,
    base_url: Option<String>,
    http_client: Client,
}

impl TomTomRoutingProvider {
    /// Create a new TomTom routing provider
    pub fn new(api_key: String, base_url: Option<String>, http_client: Client) -> Self {
        Self {
            api_key,
            base_url,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Map the caller's profile into TomTom vocabulary
    fn travel_mode(profile: TravelProfile) -> &'static str {
        match profile {
            TravelProfile::Walking => "pedestrian",
            TravelProfile::Driving => "car",
        }
    }

    /// Extract the common route shape from a decoded response
    ///
    /// Instructions are taken from the guidance object when present,
    /// falling back to per-point instructions on the legs, and finally to
    /// a generic two-line itinerary so the result is never empty.
    pub(crate) fn parse_route(response: TomTomResponse) -> Option<RouteResult> {
        let route = response.routes?.into_iter().next()?;
        let legs = route.legs.unwrap_or_default();

        let mut instructions = Vec::new();
        if let Some(guidance_steps) = route.guidance.and_then(|g| g.instructions) {
            for step in guidance_steps {
                let message = step.message.unwrap_or_default();
                let street = step.street.unwrap_or_default();
                let maneuver = step.maneuver.unwrap_or_default();

                if !message.is_empty() {
                    instructions.push(message);
                } else if !maneuver.is_empty() && !street.is_empty() {
                    instructions.push(format!(
                        "{} onto {}",
                        tomtom_maneuver_phrase(&maneuver),
                        street
                    ));
                } else if !maneuver.is_empty() {
                    instructions.push(tomtom_maneuver_phrase(&maneuver));
                }
            }
        }

        if instructions.is_empty() {
            for leg in &legs {
                for point in leg.points.iter().flatten() {
                    if let Some(instruction) = &point.instruction {
                        instructions.push(instruction.clone());
                    }
                }
            }
        }

        if instructions.is_empty() {
            instructions.push("Head towards your destination".to_string());
            instructions.push("You have arrived at your destination".to_string());
        }

        let mut geometry = Vec::new();
        for leg in &legs {
            for point in leg.points.iter().flatten() {
                if let (Some(lat), Some(lng)) = (point.latitude, point.longitude) {
                    geometry.push([lng, lat]);
                }
            }
        }

        let summary = route.summary;
        Some(RouteResult {
            distance_meters: summary
                .as_ref()
                .and_then(|s| s.length_in_meters)
                .unwrap_or(0.0),
            duration_seconds: summary
                .as_ref()
                .and_then(|s| s.travel_time_in_seconds)
                .unwrap_or(0.0),
            instructions,
            geometry,
            provider: PROVIDER_NAME.to_string(),
        })
    }
}

#[async_trait]
impl RoutingProvider for TomTomRoutingProvider {
    async fn directions(
        &self,
        start: RoutePoint,
        end: RoutePoint,
        profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        let Some(api_key) = usable_api_key(&self.api_key) else {
            debug!(provider = PROVIDER_NAME, "no usable API key, abstaining");
            return Ok(None);
        };

        let locations = format!("{},{}:{},{}", start.lat, start.lng, end.lat, end.lng);
        let url = format!(
            "{}/routing/1/calculateRoute/{}/json",
            self.base_url(),
            locations
        );

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("key", api_key),
                ("travelMode", Self::travel_mode(profile)),
                ("instructionsType", "text"),
                ("language", "en-GB"),
                ("routeType", "fastest"),
            ])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_NAME, e))?;

        let response = check_status(response, PROVIDER_NAME).await?;

        let data: TomTomResponse = match response.json().await {
            Ok(data) => data,
            Err(error) => {
                debug!(
                    provider = PROVIDER_NAME,
                    error = %error,
                    "undecodable response, abstaining"
                );
                return Ok(None);
            }
        };

        Ok(Self::parse_route(data))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Response shapes (typed-but-partial; validated in parse_route)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomResponse {
    pub(crate) routes: Option<Vec<TomTomRoute>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomRoute {
    pub(crate) summary: Option<TomTomSummary>,
    pub(crate) legs: Option<Vec<TomTomLeg>>,
    pub(crate) guidance: Option<TomTomGuidance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TomTomSummary {
    pub(crate) length_in_meters: Option<f64>,
    pub(crate) travel_time_in_seconds: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomLeg {
    pub(crate) points: Option<Vec<TomTomPoint>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomPoint {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomGuidance {
    pub(crate) instructions: Option<Vec<TomTomInstruction>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomTomInstruction {
    pub(crate) message: Option<String>,
    pub(crate) street: Option<String>,
    pub(crate) maneuver: Option<String>,
}
