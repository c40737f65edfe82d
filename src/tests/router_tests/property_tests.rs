// src/tests/router_tests/property_tests.rs

use crate::config::{DetailLookup, SiteConfig};
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, rows, select_attr, select_text, test_app, test_app_with, StubApi,
};
use serde_json::json;

fn sheet() -> StubApi {
    StubApi::with_rows(rows(json!([
        { "id": "101", "title": "Villa Lago", "location": "Lugano, Switzerland", "price": 12500000 },
        { "id": "102", "title": "Whistler Glass Estate", "location": "Whistler, Canada",
          "price": 8900000, "image": "https://img.example/102.jpg",
          "description": "Cedar and glass above the valley.", "specs": "6 bd / 7 ba",
          "gallery": ["https://img.example/g1.jpg", "https://img.example/g2.jpg"] }
    ])))
}

#[test]
fn detail_resolves_string_ids_from_query() {
    let app = test_app(sheet());

    let resp = handle(get("/property?id=102"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "title"), vec!["Whistler Glass Estate | THE FREY GROUP"]);
    assert_eq!(select_text(&html, "#prop-title"), vec!["Whistler Glass Estate"]);
    assert_eq!(select_text(&html, "#prop-loc"), vec!["Whistler, Canada"]);
    assert_eq!(select_text(&html, "#prop-price"), vec!["$8,900,000"]);
    assert_eq!(select_text(&html, "#prop-specs"), vec!["6 bd / 7 ba"]);
    assert_eq!(
        select_attr(&html, "#prop-img img", "src"),
        vec!["https://img.example/102.jpg"]
    );
    assert_eq!(
        select_attr(&html, "#gallery-grid a", "href"),
        vec!["https://img.example/g1.jpg", "https://img.example/g2.jpg"]
    );
    assert_eq!(
        select_attr(&html, "#interest", "value"),
        vec!["Inquiry: Whistler Glass Estate (ID: 102)"]
    );
}

#[test]
fn every_detail_image_has_a_one_shot_fallback() {
    let app = test_app(sheet());

    let html = body_string(handle(get("/property?id=102"), &app).unwrap());
    let handlers = select_attr(&html, "img", "onerror");

    assert_eq!(handlers.len(), select_text(&html, "img").len());
    assert!(!handlers.is_empty());
    assert!(handlers.iter().all(|h| h.starts_with("this.onerror=null;")));
}

#[test]
fn unknown_id_shows_first_listing() {
    let app = test_app(sheet());

    let resp = handle(get("/property?id=999"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#prop-title"), vec!["Villa Lago"]);
    assert_eq!(select_text(&html, "#prop-price"), vec!["$12,500,000"]);
}

#[test]
fn missing_id_redirects_to_collection() {
    let app = test_app(sheet());

    for uri in ["/property", "/property?id=", "/property.html?other=1"] {
        let resp = handle(get(uri), &app).unwrap();
        assert_eq!(resp.status(), 302, "{uri}");
        assert_eq!(resp.headers()["Location"], "/properties");
    }
}

#[test]
fn single_lookup_renders_not_found() {
    let config = SiteConfig {
        detail_lookup: DetailLookup::Single,
        ..SiteConfig::default()
    };
    let app = test_app_with(config, StubApi::with_rows(Vec::new()));

    let resp = handle(get("/property?id=55"), &app).unwrap();
    assert_eq!(resp.status(), 404);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#detail-container h1"), vec!["Property not found"]);
}

#[test]
fn single_lookup_failure_keeps_the_skeleton() {
    let config = SiteConfig {
        detail_lookup: DetailLookup::Single,
        ..SiteConfig::default()
    };
    let app = test_app_with(config, StubApi::offline());

    let resp = handle(get("/property?id=55"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);

    assert_eq!(select_text(&html, "#prop-title"), vec!["Loading..."]);
    assert_eq!(select_text(&html, "#skeleton-loader").len(), 1);
}
