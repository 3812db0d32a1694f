use axum::{body::Body, response::Response};
use scraper::Html;

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

/// Parse the body of `response` as a full HTML page.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

/// Parse the body of `response` as an HTML fragment, e.g. an alert.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
