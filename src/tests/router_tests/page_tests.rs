// src/tests/router_tests/page_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, rows, select_attr, select_text, test_app, StubApi};
use serde_json::json;

fn five_rows() -> StubApi {
    StubApi::with_rows(rows(json!([
        { "id": 1, "title": "One", "location": "Lugano", "price": 1000000 },
        { "id": 2, "title": "Two", "location": "Whistler", "price": 2000000 },
        { "id": 3, "title": "Three", "location": "Taipei" },
        { "id": 4, "title": "Four", "location": "Zurich", "price": 4000000 },
        { "id": 5, "title": "Five", "location": "Vancouver", "price": 5000000 }
    ])))
}

#[test]
fn home_shows_three_preview_cards() {
    let app = test_app(five_rows());

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#home-grid .card-title"), vec!["One", "Two", "Three"]);
    assert_eq!(
        select_text(&html, "#home-grid .card-price"),
        vec!["$1,000,000", "$2,000,000", "Price on Request"]
    );
    assert_eq!(
        select_attr(&html, "#home-grid a.card", "href"),
        vec!["/property?id=1", "/property?id=2", "/property?id=3"]
    );
    assert_eq!(select_attr(&html, "body", "data-reveal-delay"), vec!["100"]);
}

#[test]
fn home_uses_backup_listings_when_api_is_down() {
    let app = test_app(StubApi::offline());

    let html = body_string(handle(get("/index.html"), &app).unwrap());

    assert_eq!(
        select_text(&html, "#home-grid .card-title"),
        vec!["Villa Lago", "Whistler Glass Estate", "Xinyi Penthouse"]
    );
}

#[test]
fn collection_lists_everything() {
    let app = test_app(five_rows());

    let html = body_string(handle(get("/properties"), &app).unwrap());
    assert_eq!(select_text(&html, "#full-grid .card").len(), 5);
}

#[test]
fn collection_reports_offline_api() {
    let app = test_app(StubApi::offline());

    let resp = handle(get("/properties.html"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(
        select_text(&html, "#full-grid"),
        vec!["System currently offline for maintenance."]
    );
    assert!(select_attr(&html, "body", "data-reveal-delay").is_empty());
}

#[test]
fn collection_reports_empty_sheet() {
    let app = test_app(StubApi::with_rows(Vec::new()));

    let html = body_string(handle(get("/properties"), &app).unwrap());
    assert_eq!(select_text(&html, "#full-grid"), vec!["No listings available."]);
}

#[test]
fn every_page_has_exactly_one_header() {
    let app = test_app(five_rows());

    for uri in ["/", "/properties", "/property?id=2", "/contact", "/philosophy"] {
        let html = body_string(handle(get(uri), &app).unwrap());
        assert_eq!(select_text(&html, ".nav-capsule").len(), 1, "{uri}");
        assert_eq!(select_text(&html, "#mobileOverlay").len(), 1, "{uri}");
    }
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(five_rows());

    let err = match handle(get("/admin"), &app) {
        Err(e) => e,
        Ok(_) => panic!("expected /admin to be unrouted"),
    };
    assert!(matches!(err, crate::errors::ServerError::NotFound));

    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 404);
}
