use axum::{
    Json,
    extract::{Form, State},
    response::IntoResponse,
};
use meditrace_contact::{Submission, SubmissionResult};

use crate::{
    form::ContactForm,
    routes::{
        AppState,
        index::{IndexTemplate, Platform},
    },
    template::Template,
};

/// Contact form section on its own, swapped in place by htmx.
#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<Submission>,
) -> impl IntoResponse {
    let mut form = ContactForm::with_fields(input.email, input.message);
    form.submit(&app_state.gateway).await;

    if template.htmx {
        return template.render(ContactFormTemplate { form });
    }

    template.render(IndexTemplate::new(Platform::default(), form))
}

/// JSON flavour returning the raw [`SubmissionResult`].
pub async fn api(
    State(app_state): State<AppState>,
    Json(input): Json<Submission>,
) -> Json<SubmissionResult> {
    Json(app_state.gateway.submit(&input).await)
}
