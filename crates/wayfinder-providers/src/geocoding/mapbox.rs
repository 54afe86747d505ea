//! Mapbox Geocoding Provider
//!
//! Forward and reverse geocoding via the Mapbox places API. Used as the
//! forward fallback behind Geoapify and as the only reverse source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::GeocodingProvider;
use wayfinder_domain::value_objects::{GeocodedLocation, RoutePoint};

use crate::http::{check_status, transport_error};
use crate::keys::usable_api_key;

const PROVIDER_NAME: &str = "Mapbox";
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Mapbox geocoding provider
pub struct MapboxGeocodingProvider {
    api_key: String,
    base_url: Option<String>,
    country: String,
    http_client: Client,
}

impl MapboxGeocodingProvider {
    /// Create a new Mapbox geocoding provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        country: String,
        http_client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url,
            country,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Pick the best feature out of a decoded forward response
    pub(crate) fn parse_location(response: MapboxResponse) -> Option<GeocodedLocation> {
        let feature = response.features?.into_iter().next()?;
        let center = feature.center?;
        if center.len() < 2 {
            return None;
        }

        Some(GeocodedLocation {
            point: RoutePoint {
                lat: center[1],
                lng: center[0],
            },
            address: feature.place_name.unwrap_or_default(),
        })
    }

    /// Pick the place name out of a decoded reverse response
    pub(crate) fn parse_place_name(response: MapboxResponse) -> Option<String> {
        response
            .features?
            .into_iter()
            .next()
            .and_then(|feature| feature.place_name)
    }

    async fn fetch(
        &self,
        place: &str,
        api_key: &str,
        limit: Option<&str>,
    ) -> Result<Option<MapboxResponse>> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url(),
            place
        );

        let mut query = vec![
            ("access_token", api_key),
            ("country", self.country.as_str()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit));
        }

        let response = self
            .http_client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_NAME, e))?;

        let response = check_status(response, PROVIDER_NAME).await?;

        match response.json().await {
            Ok(data) => Ok(Some(data)),
            Err(error) => {
                debug!(
                    provider = PROVIDER_NAME,
                    error = %error,
                    "undecodable response, abstaining"
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl GeocodingProvider for MapboxGeocodingProvider {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>> {
        let Some(api_key) = usable_api_key(&self.api_key) else {
            debug!(provider = PROVIDER_NAME, "no usable API key, abstaining");
            return Ok(None);
        };

        Ok(self
            .fetch(query, api_key, Some("1"))
            .await?
            .and_then(Self::parse_location))
    }

    async fn reverse(&self, point: RoutePoint) -> Result<Option<String>> {
        let Some(api_key) = usable_api_key(&self.api_key) else {
            debug!(provider = PROVIDER_NAME, "no usable API key, abstaining");
            return Ok(None);
        };

        let place = format!("{},{}", point.lng, point.lat);
        Ok(self
            .fetch(&place, api_key, None)
            .await?
            .and_then(Self::parse_place_name))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Response shapes (typed-but-partial; validated in the parse helpers)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct MapboxResponse {
    pub(crate) features: Option<Vec<MapboxFeature>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MapboxFeature {
    pub(crate) center: Option<Vec<f64>>,
    pub(crate) place_name: Option<String>,
}
