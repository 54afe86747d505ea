//! GraphHopper Routing Provider
//!
//! Implements the RoutingProvider port using the GraphHopper route API.
//! Tertiary tier. GraphHopper reports travel time in milliseconds; this
//! adapter converts to seconds.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

use crate::http::{check_status, transport_error};
use crate::keys::usable_api_key;

const PROVIDER_NAME: &str = "GraphHopper";
const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1";

/// GraphHopper routing provider
pub struct GraphHopperRoutingProvider {
    api_key: String,
    base_url: Option<String>,
    http_client: Client,
}

impl GraphHopperRoutingProvider {
    /// Create a new GraphHopper routing provider
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

    /// Map the caller's profile into GraphHopper vocabulary
    fn vehicle(profile: TravelProfile) -> &'static str {
        match profile {
            TravelProfile::Walking => "foot",
            TravelProfile::Driving => "car",
        }
    }

    /// Extract the common route shape from a decoded response
    pub(crate) fn parse_route(response: GraphHopperResponse) -> Option<RouteResult> {
        let path = response.paths?.into_iter().next()?;

        let instructions = path
            .instructions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|instruction| instruction.text)
            .collect();

        let geometry = path
            .points
            .and_then(|points| points.coordinates)
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
            distance_meters: path.distance.unwrap_or(0.0),
            // GraphHopper reports milliseconds
            duration_seconds: path.time.unwrap_or(0.0) / 1000.0,
            instructions,
            geometry,
            provider: PROVIDER_NAME.to_string(),
        })
    }
}

#[async_trait]
impl RoutingProvider for GraphHopperRoutingProvider {
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

        let start_point = format!("{},{}", start.lat, start.lng);
        let end_point = format!("{},{}", end.lat, end.lng);

        let response = self
            .http_client
            .get(format!("{}/route", self.base_url()))
            .query(&[
                ("point", start_point.as_str()),
                ("point", end_point.as_str()),
                ("vehicle", Self::vehicle(profile)),
                ("instructions", "true"),
                ("points_encoded", "false"),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_NAME, e))?;

        let response = check_status(response, PROVIDER_NAME).await?;

        let data: GraphHopperResponse = match response.json().await {
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
pub(crate) struct GraphHopperResponse {
    pub(crate) paths: Option<Vec<GraphHopperPath>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphHopperPath {
    pub(crate) distance: Option<f64>,
    pub(crate) time: Option<f64>,
    pub(crate) instructions: Option<Vec<GraphHopperInstruction>>,
    pub(crate) points: Option<GraphHopperPoints>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphHopperInstruction {
    pub(crate) text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphHopperPoints {
    pub(crate) coordinates: Option<Vec<Vec<f64>>>,
}
