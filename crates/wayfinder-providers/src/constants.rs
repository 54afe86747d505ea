//! Constants shared across provider implementations

use std::time::Duration;

/// Content type header value for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// User agent sent to public (unauthenticated) endpoints
pub const PUBLIC_ENDPOINT_USER_AGENT: &str = "wayfinder/0.1";

/// Default timeout for requests against public OSRM instances
///
/// Public instances are unreliable; a short bound keeps the resolver from
/// stalling before it can fall through.
pub const DEFAULT_OSRM_TIMEOUT: Duration = Duration::from_secs(5);
