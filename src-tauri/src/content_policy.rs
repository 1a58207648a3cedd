//! Content-Security-Policy applied to every response served into the window.

use tauri::http::{header::CONTENT_SECURITY_POLICY, HeaderMap, HeaderValue};

/// Permissive policy for the live-reload development server.
pub(crate) const DEVELOPMENT_CSP: &str = "default-src 'self' 'unsafe-inline' 'unsafe-eval' data: blob: ws://localhost:* wss://localhost:*; img-src 'self' data: https: blob:; font-src 'self' data:; connect-src 'self' ws://localhost:* wss://localhost:* http://localhost:*;";

pub(crate) const PRODUCTION_CSP: &str = "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self'; object-src 'none';";

pub(crate) fn policy_for(is_development: bool) -> &'static str {
    if is_development {
        DEVELOPMENT_CSP
    } else {
        PRODUCTION_CSP
    }
}

/// Replaces any existing policy values with exactly one.
pub(crate) fn apply_content_security_policy(headers: &mut HeaderMap, is_development: bool) {
    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(policy_for(is_development)),
    );
}
