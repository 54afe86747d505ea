//! Credential validation helpers
//!
//! API keys come from configuration templates where unset values are either
//! blank or left as `your_<service>_api_key_here` placeholders. Both count
//! as "unconfigured" and make the adapter abstain.

/// Return the usable API key, or `None` when the value is blank or a
/// template placeholder.
pub fn usable_api_key(api_key: &str) -> Option<&str> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return None;
    }
    if api_key.starts_with("your_") && api_key.ends_with("_here") {
        return None;
    }
    Some(api_key)
}
