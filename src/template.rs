use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

/// Per-request rendering context.
pub struct Template {
    pub current_path: String,
    /// Set when the request was issued by htmx and expects a fragment.
    pub htmx: bool,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(path = %self.current_path, "Failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(
                        askama::Template::render(&ServerTemplate)
                            .unwrap_or_else(|err| format!("Failed to render template. Error: {err}")),
                    ),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        Ok(Template {
            current_path: parts.uri.path().to_owned(),
            htmx,
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
