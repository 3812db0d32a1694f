use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

#[track_caller]
fn must_get_required_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );

    input
}

/// Assert that `form` has a required input called `name` of type `type_`.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    must_get_required_input(form, name, type_);
}

/// Like [assert_form_input], but also checks the input's initial value.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_required_input(form, name, type_);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the select called `name` offers exactly `want_values`, in order.
#[track_caller]
pub(crate) fn assert_select_options(form: &ElementRef<'_>, name: &str, want_values: &[&str]) {
    let selector = Selector::parse(&format!("select[name=\"{name}\"] option")).unwrap();
    let got_values: Vec<_> = form
        .select(&selector)
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect();

    assert_eq!(got_values, want_values, "options for select {name}");
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
}
