use app::AppConfig;
use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Minimum secret length accepted in production.
const MIN_SECRET_LEN: usize = 16;

/// Security headers middleware
/// Adds security headers to all responses
pub async fn security_headers(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    // X-Frame-Options: Prevent clickjacking
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );

    // X-Content-Type-Options: Prevent MIME type sniffing
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );

    // Referrer-Policy: search terms travel in the query string
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // Content-Security-Policy: pages are static markup, no scripts at all
    let csp = [
        "default-src 'self'",
        "script-src 'none'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self'",
        "object-src 'none'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ");

    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_str(&csp).unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'")),
    );

    // Permissions-Policy: Disable unnecessary browser features
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=()",
        ),
    );

    Ok(response)
}

/// Environment validation
/// Refuses development-only settings when running in production
pub fn validate_production_env(config: &AppConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.is_production() {
        if config.uses_default_secret() {
            errors.push(
                "SECRET_KEY is not set; the built-in default must not be used in production"
                    .to_string(),
            );
        } else if config.secret_key.len() < MIN_SECRET_LEN {
            errors.push(format!(
                "SECRET_KEY is too weak (minimum {MIN_SECRET_LEN} characters required)"
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
