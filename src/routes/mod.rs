use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use meditrace_contact::Gateway;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;
mod policy;

pub use contact::ContactFormTemplate;
pub use index::{IndexTemplate, Platform};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/privacy", get(policy::page))
        .route("/contact", post(contact::action))
        .route("/api/contact", post(contact::api))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
