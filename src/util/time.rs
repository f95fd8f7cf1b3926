//! Wall-clock access for the browser, stubbed natively.

/// Milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Seconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn now_secs() -> i64 {
    (now_ms() / 1_000) as i64
}
