//! Tests for the analysis endpoint.

mod common;

use axum::http::StatusCode;
use common::{fixtures, fixtures::colors, TestApp};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_analyze_without_image_is_noop() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;

    let response = app.post("/api/analyze").await;

    common::assert_status(&response, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_analyze_with_empty_palette_is_noop() {
    let app = TestApp::new().await;
    assert!(app.load_image("image/png", fixtures::solid_png(10, 10, [255, 0, 0])).await);

    let response = app.post("/api/analyze?format=json").await;

    common::assert_status(&response, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_analyze_json_report() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;
    app.add_color(colors::BLUE).await;
    app.put_json("/api/size", r#"{"size": 10}"#).await;
    assert!(app.load_image("image/png", fixtures::solid_png(100, 100, [255, 0, 0])).await);

    let response = app.post("/api/analyze?format=json").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["width"], 100);
    assert_eq!(json["height"], 100);
    assert_eq!(json["grid_size"], 5);

    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 25);
    for cell in cells {
        assert_eq!(cell["average"], colors::RED);
        assert_eq!(cell["color"], colors::RED);
        assert_eq!(cell["palette_index"], 0);
        assert_eq!(cell["distance"], 0.0);
    }
    assert_eq!(cells[6]["row"], 1);
    assert_eq!(cells[6]["col"], 1);
}

#[tokio::test]
async fn test_analyze_svg() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;
    app.add_color(colors::BLUE).await;
    app.put_json("/api/size", r#"{"size": 10}"#).await;
    assert!(app.load_image("image/png", fixtures::solid_png(100, 100, [255, 0, 0])).await);

    let response = app.post("/api/analyze?format=svg").await;

    common::assert_ok(&response);
    assert_eq!(response.header("content-type"), Some("image/svg+xml"));
    let svg = response.text();
    assert_eq!(svg.matches("<circle").count(), 25);
    assert_eq!(svg.matches(r##"fill="#FF0000""##).count(), 25);
}

#[tokio::test]
async fn test_analyze_png_default_format() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;
    app.add_color(colors::BLUE).await;
    app.put_json("/api/size", r#"{"size": 4}"#).await;
    assert!(
        app.load_image("image/png", fixtures::split_png(40, 40, [250, 10, 10], [10, 10, 240]))
            .await
    );

    let response = app.post("/api/analyze").await;

    common::assert_png(&response);
    let image = fixtures::decode_png(response.bytes());
    assert_eq!(image.dimensions(), (40, 40));
    // 2x2 grid: left cells red, right cells blue, circle centers at 10 and 30
    assert_eq!(&image.get_pixel(10, 10).0[..3], &[255, 0, 0]);
    assert_eq!(&image.get_pixel(30, 30).0[..3], &[0, 0, 255]);
    // White background outside the circles
    assert_eq!(&image.get_pixel(0, 0).0[..3], &[255, 255, 255]);
}

#[tokio::test]
async fn test_analyze_nearest_not_first() {
    let app = TestApp::new().await;
    app.add_color("#FFFFFF").await;
    app.add_color("#000000").await;
    app.put_json("/api/size", r#"{"size": 4}"#).await;
    assert!(app.load_image("image/png", fixtures::solid_png(8, 8, [30, 30, 30])).await);

    let json: serde_json::Value = app.post("/api/analyze?format=json").await.json();

    for cell in json["cells"].as_array().unwrap() {
        assert_eq!(cell["color"], "#000000");
        assert_eq!(cell["palette_index"], 1);
    }
}

#[tokio::test]
async fn test_analyze_tie_picks_first_entry() {
    let app = TestApp::new().await;
    // (128,128,128) is exactly 1 away from both entries
    app.add_color("#808081").await;
    app.add_color("#80807F").await;
    app.put_json("/api/size", r#"{"size": 4}"#).await;
    assert!(app.load_image("image/png", fixtures::solid_png(4, 4, [128, 128, 128])).await);

    let json: serde_json::Value = app.post("/api/analyze?format=json").await.json();

    for cell in json["cells"].as_array().unwrap() {
        assert_eq!(cell["palette_index"], 0);
    }
}

#[tokio::test]
async fn test_analyze_reflects_latest_state() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;
    app.put_json("/api/size", r#"{"size": 4}"#).await;
    assert!(app.load_image("image/png", fixtures::solid_png(8, 8, [0, 0, 250])).await);

    let first: serde_json::Value = app.post("/api/analyze?format=json").await.json();
    assert_eq!(first["cells"][0]["color"], colors::RED);

    app.add_color(colors::BLUE).await;
    app.put_json("/api/size", r#"{"size": 8}"#).await;

    let second: serde_json::Value = app.post("/api/analyze?format=json").await.json();
    assert_eq!(second["grid_size"], 4);
    assert_eq!(second["cells"][0]["color"], colors::BLUE);
}

#[tokio::test]
async fn test_analyze_unknown_format_rejected() {
    let app = TestApp::new().await;

    let response = app.post("/api/analyze?format=bmp").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_png_for_oversized_image() {
    let app = TestApp::new().await;
    app.add_color(colors::RED).await;
    assert!(app.load_image("image/png", fixtures::solid_png(9000, 2, [255, 0, 0])).await);

    let response = app.post("/api/analyze").await;

    common::assert_png(&response);
    let image = fixtures::decode_png(response.bytes());
    assert_eq!(image.dimensions(), (8192, 2));

    // Other formats keep the source dimensions
    let json: serde_json::Value = app.post("/api/analyze?format=json").await.json();
    assert_eq!(json["width"], 9000);
    assert_eq!(json["height"], 2);
}
