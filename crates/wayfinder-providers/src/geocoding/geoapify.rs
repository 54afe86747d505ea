//! Geoapify Geocoding Provider
//!
//! Forward geocoding via the Geoapify search API. Tried before Mapbox
//! because it resolves local business names markedly better. Does not
//! implement reverse geocoding (the port's default abstains).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::GeocodingProvider;
use wayfinder_domain::value_objects::{GeocodedLocation, RoutePoint};

use crate::http::{check_status, transport_error};
use crate::keys::usable_api_key;

const PROVIDER_NAME: &str = "Geoapify";
const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// Geoapify geocoding provider
pub struct GeoapifyGeocodingProvider {
    api_key: String,
    base_url: Option<String>,
    country: String,
    http_client: Client,
}

impl GeoapifyGeocodingProvider {
    /// Create a new Geoapify geocoding provider
    ///
    /// # Arguments
    /// * `api_key` - Geoapify API key (blank or placeholder values make the
    ///   provider abstain)
    /// * `base_url` - Optional custom base URL
    /// * `country` - ISO country code used to filter results
    /// * `http_client` - Reqwest HTTP client for making API requests
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

    /// Pick the best feature out of a decoded response
    pub(crate) fn parse_location(
        response: GeoapifyResponse,
        query: &str,
    ) -> Option<GeocodedLocation> {
        let feature = response.features?.into_iter().next()?;
        let coordinates = feature.geometry?.coordinates?;
        if coordinates.len() < 2 {
            return None;
        }

        let properties = feature.properties.unwrap_or_default();
        let address = properties
            .formatted
            .or(properties.address_line1)
            .unwrap_or_else(|| query.to_string());

        Some(GeocodedLocation {
            point: RoutePoint {
                lat: coordinates[1],
                lng: coordinates[0],
            },
            address,
        })
    }
}

#[async_trait]
impl GeocodingProvider for GeoapifyGeocodingProvider {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>> {
        let Some(api_key) = usable_api_key(&self.api_key) else {
            debug!(provider = PROVIDER_NAME, "no usable API key, abstaining");
            return Ok(None);
        };

        let country_filter = format!("countrycode:{}", self.country);
        let response = self
            .http_client
            .get(format!("{}/v1/geocode/search", self.base_url()))
            .query(&[
                ("text", query),
                ("filter", country_filter.as_str()),
                ("limit", "5"),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_NAME, e))?;

        let response = check_status(response, PROVIDER_NAME).await?;

        let data: GeoapifyResponse = match response.json().await {
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

        Ok(Self::parse_location(data, query))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Response shapes (typed-but-partial; validated in parse_location)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct GeoapifyResponse {
    pub(crate) features: Option<Vec<GeoapifyFeature>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoapifyFeature {
    pub(crate) geometry: Option<GeoapifyGeometry>,
    pub(crate) properties: Option<GeoapifyProperties>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoapifyGeometry {
    pub(crate) coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeoapifyProperties {
    pub(crate) formatted: Option<String>,
    pub(crate) address_line1: Option<String>,
}
