use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static"]
struct IntakeUi;

/// The whole UI is one embedded page; every non-API GET serves it.
pub async fn intake_page() -> Response {
    match IntakeUi::get("index.html") {
        Some(page) => (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            page.data,
        )
            .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "intake page missing").into_response(),
    }
}
