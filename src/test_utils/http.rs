use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(get_header(response, "content-type"), content_type);
}

#[track_caller]
fn get_header(response: &Response<Body>, header_name: &str) -> String {
    response
        .headers()
        .get(header_name)
        .unwrap_or_else(|| panic!("Headers missing {header_name}"))
        .to_str()
        .expect("Could not convert to str")
        .to_owned()
}

/// Assert that `response` tells HTMX to redirect the browser to `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}
