// src/tests/router_tests/asset_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, StubApi};

#[test]
fn stylesheet_and_script_are_served_with_etags() {
    let app = test_app(StubApi::with_rows(Vec::new()));

    let css = handle(get("/static/site.css"), &app).unwrap();
    assert_eq!(css.status(), 200);
    assert_eq!(css.headers()["Content-Type"], "text/css; charset=utf-8");
    assert_eq!(css.headers()["ETag"], app.css.etag());

    let js = body_string(handle(get("/static/site.js"), &app).unwrap());
    assert!(js.contains("mobileOverlay"));
}

#[test]
fn revalidation_returns_not_modified() {
    let app = test_app(StubApi::with_rows(Vec::new()));

    let mut req = get("/static/site.js");
    req.headers_mut()
        .insert("If-None-Match", app.js.etag().parse().unwrap());

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 304);
}
