//! Timestamp helpers. Requires a browser environment; on the server the
//! timestamp is empty and the backend's clock is authoritative.

/// Current wall-clock time as an ISO-8601 string.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
