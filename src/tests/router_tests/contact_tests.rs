// src/tests/router_tests/contact_tests.rs

use crate::contact::{ERROR_MESSAGE, SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};
use crate::router::{handle, MAX_FORM_BYTES};
use crate::tests::utils::{body_string, get, post_form, select_attr, select_text, test_app, StubApi};

const FORM: &str = "name=Ada&email=ada%40example.com&phone=555&interest=Villa+Lago&message=Hi+there";

#[test]
fn contact_page_prefills_interest_from_query() {
    let app = test_app(StubApi::with_rows(Vec::new()));

    let html = body_string(handle(get("/contact?interest=Inquiry%3A+Villa+Lago"), &app).unwrap());

    assert_eq!(select_attr(&html, "#interest", "value"), vec!["Inquiry: Villa Lago"]);
    assert_eq!(select_text(&html, "#contact-form button"), vec![SUBMIT_LABEL]);
}

#[test]
fn successful_submit_clears_form_and_confirms() {
    let api = StubApi::with_rows(Vec::new());
    let sent = api.sent.clone();
    let app = test_app(api);

    let resp = handle(post_form("/contact", FORM), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#form-status .success"), vec![SUCCESS_MESSAGE]);
    assert_eq!(select_attr(&html, "#name", "value"), vec![""]);
    assert_eq!(select_attr(&html, "#email", "value"), vec![""]);
    assert_eq!(select_text(&html, "#message"), vec![""]);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][0], ("action".to_string(), "contact".to_string()));
    assert!(sent[0].contains(&("email".to_string(), "ada@example.com".to_string())));
}

#[test]
fn failed_submit_restores_button_and_reports_error() {
    let app = test_app(StubApi::offline());

    let resp = handle(post_form("/contact", FORM), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#form-status .error"), vec![ERROR_MESSAGE]);
    assert_eq!(select_text(&html, "#contact-form button"), vec![SUBMIT_LABEL]);
    assert!(select_attr(&html, "#contact-form button", "disabled").is_empty());
    assert!(!html.contains(SENDING_LABEL));
    assert_eq!(select_attr(&html, "#name", "value"), vec!["Ada"]);
}

#[test]
fn empty_submission_is_rejected() {
    let app = test_app(StubApi::with_rows(Vec::new()));

    let result = handle(post_form("/contact", ""), &app);
    assert!(matches!(result, Err(crate::errors::ServerError::BadRequest(_))));
}

#[test]
fn oversized_submission_is_rejected_without_sending() {
    let api = StubApi::with_rows(Vec::new());
    let sent = api.sent.clone();
    let app = test_app(api);

    let message = "a".repeat(MAX_FORM_BYTES as usize + 6 * 1024);
    let form = format!("name=Ada&message={message}&email=ada%40example.com");

    let result = handle(post_form("/contact", &form), &app);
    assert!(matches!(result, Err(crate::errors::ServerError::BadRequest(_))));
    assert!(sent.lock().unwrap().is_empty());
}

#[test]
fn submission_at_the_size_limit_is_sent_whole() {
    let api = StubApi::with_rows(Vec::new());
    let sent = api.sent.clone();
    let app = test_app(api);

    let prefix = "name=Ada&email=ada%40example.com&message=";
    let message = "a".repeat(MAX_FORM_BYTES as usize - prefix.len());
    let form = format!("{prefix}{message}");
    assert_eq!(form.len() as u64, MAX_FORM_BYTES);

    let resp = handle(post_form("/contact", &form), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains(&("email".to_string(), "ada@example.com".to_string())));
    assert!(sent[0].contains(&("message".to_string(), message)));
}
