use std::str::FromStr;

use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{form::ContactForm, template::Template};

pub const APP_STORE_URL: &str = "https://apps.apple.com";

pub const SCREENSHOTS: &[&str] = &[
    "/static/images/screenshots/screen1.svg",
    "/static/images/screenshots/screen2.svg",
    "/static/images/screenshots/screen3.svg",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl Platform {
    pub fn is_ios(&self) -> bool {
        *self == Platform::Ios
    }

    /// Unknown or missing values fall back to iOS.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|v| Platform::from_str(v).ok())
            .unwrap_or_default()
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: String,
    pub platform: Platform,
    pub screenshots: &'static [&'static str],
    pub app_store_url: &'static str,
    pub form: ContactForm,
}

impl IndexTemplate {
    pub fn new(platform: Platform, form: ContactForm) -> Self {
        Self {
            current_path: "/".to_owned(),
            platform,
            screenshots: SCREENSHOTS,
            app_store_url: APP_STORE_URL,
            form,
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub platform: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let platform = Platform::parse_or_default(query.platform.as_deref());

    template.render(IndexTemplate::new(platform, ContactForm::new()))
}
