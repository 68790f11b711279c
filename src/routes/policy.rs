use axum::response::IntoResponse;

use crate::template::Template;

pub const PRIVACY_CONTACT: &str = "tazigrigolia@gmail.com";

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub current_path: String,
    pub contact_email: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let current_path = template.current_path.to_owned();

    template.render(PrivacyTemplate {
        current_path,
        contact_email: PRIVACY_CONTACT,
    })
}
