//! OpenRouteService Routing Provider
//!
//! Implements the RoutingProvider port using the OpenRouteService
//! directions API (geojson response format). Primary tier: generous free
//! quota.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

use crate::constants::CONTENT_TYPE_JSON;
use crate::http::{check_status, transport_error};
use crate::keys::usable_api_key;

const PROVIDER_NAME: &str = "OpenRouteService";
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// OpenRouteService routing provider
///
/// Receives the HTTP client via constructor injection. Abstains when no
/// usable API key is configured.
pub struct OpenRouteRoutingProvider {
    api_key: String,
    base_url: Option<String>,
    http_client: Client,
}

impl OpenRouteRoutingProvider {
    /// Create a new OpenRouteService routing provider
    ///
    /// # Arguments
    /// * `api_key` - OpenRouteService API key (blank or placeholder values
    ///   make the provider abstain)
    /// * `base_url` - Optional custom base URL
    /// * `http_client` - Reqwest HTTP client for making API requests
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

    /// Map the caller's profile into OpenRouteService vocabulary
    fn ors_profile(profile: TravelProfile) -> &'static str {
        match profile {
            TravelProfile::Walking => "foot-walking",
            TravelProfile::Driving => "driving-car",
        }
    }

    /// Extract the common route shape from a decoded response
    pub(crate) fn parse_route(response: OrsResponse) -> Option<RouteResult> {
        let feature = response.features?.into_iter().next()?;
        let segment = feature.properties?.segments?.into_iter().next()?;

        let instructions = segment
            .steps
            .unwrap_or_default()
            .into_iter()
            .filter_map(|step| step.instruction)
            .collect();

        let geometry = feature
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
            distance_meters: segment.distance.unwrap_or(0.0),
            duration_seconds: segment.duration.unwrap_or(0.0),
            instructions,
            geometry,
            provider: PROVIDER_NAME.to_string(),
        })
    }
}

#[async_trait]
impl RoutingProvider for OpenRouteRoutingProvider {
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

        let payload = serde_json::json!({
            "coordinates": [[start.lng, start.lat], [end.lng, end.lat]],
            "format": "geojson",
            "instructions": true,
        });

        let url = format!(
            "{}/v2/directions/{}",
            self.base_url(),
            Self::ors_profile(profile)
        );

        let response = self
            .http_client
            .post(url)
            .header("Authorization", api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(&payload)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_NAME, e))?;

        let response = check_status(response, PROVIDER_NAME).await?;

        let data: OrsResponse = match response.json().await {
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
pub(crate) struct OrsResponse {
    pub(crate) features: Option<Vec<OrsFeature>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsFeature {
    pub(crate) properties: Option<OrsProperties>,
    pub(crate) geometry: Option<OrsGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsProperties {
    pub(crate) segments: Option<Vec<OrsSegment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsSegment {
    pub(crate) distance: Option<f64>,
    pub(crate) duration: Option<f64>,
    pub(crate) steps: Option<Vec<OrsStep>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsStep {
    pub(crate) instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsGeometry {
    pub(crate) coordinates: Option<Vec<Vec<f64>>>,
}
