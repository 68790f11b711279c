use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Stylesheets and scripts keep a stable URL across releases.
const REVALIDATED_EXTENSIONS: &[&str] = &[".css", ".js"];

const STATIC_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".css", ".js", ".woff", ".woff2",
];

/// Middleware to set cache control headers
/// - Static files: Allow caching (1 year for images and fonts, 1 hour for CSS and JS)
/// - All other routes: No caching (contact form responses must never be replayed)
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let is_static_file = path.starts_with("/static/")
        || path == "/robots.txt"
        || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext));

    let headers = response.headers_mut();

    if is_static_file && REVALIDATED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600, must-revalidate"),
        );
    } else if is_static_file {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
