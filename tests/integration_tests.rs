use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use hk_epidemic_dashboard::server::{AppState, ServerConfig, create_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tower::ServiceExt;

const ENDPOINTS: [&str; 5] = [
    "/api/daily_statistics",
    "/api/region_statistics",
    "/api/region_daily",
    "/api/map_data",
    "/api/summary",
];

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn app(data: PathBuf, boundary: PathBuf) -> Router {
    let config = ServerConfig {
        data_file: data,
        boundary_file: boundary,
        host: "127.0.0.1".into(),
        port: 0,
    };
    create_router(AppState::new(&config))
}

fn fixture_app() -> Router {
    app(fixture("cases.csv"), fixture("hongkong.json"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = get(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn daily_statistics_from_fixture() {
    let (status, json) = get_json(fixture_app(), "/api/daily_statistics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dates"], json!(["2025-03-20", "2025-03-21", "2025-03-22"]));
    assert_eq!(json["new_cases"], json!([8, 7, 9]));
    assert_eq!(json["total_cases"], json!([8, 15, 20]));
    assert_eq!(json["growth_rates"], json!([0.0, 87.5, 60.0]));
}

#[tokio::test]
async fn region_statistics_from_fixture() {
    let (status, json) = get_json(fixture_app(), "/api/region_statistics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["regions"], json!(["东区", "中西区", "测试区"]));
    assert_eq!(json["cases"], json!([10, 8, 2]));
}

#[tokio::test]
async fn region_daily_is_dense() {
    let (status, json) = get_json(fixture_app(), "/api/region_daily").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["regions"], json!(["东区", "中西区", "测试区", "湾仔区"]));

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3 * 4);
    assert!(data.contains(&json!(["湾仔区", "2025-03-22", 0])));
    assert!(data.contains(&json!(["测试区", "2025-03-20", 0])));
    assert!(data.contains(&json!(["东区", "2025-03-22", 6])));
}

#[tokio::test]
async fn map_data_resolves_display_names() {
    let (status, json) = get_json(fixture_app(), "/api/map_data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"],
        json!([
            {"name": "Eastern", "chineseName": "东区", "value": 10},
            {"name": "Central and Western", "chineseName": "中西区", "value": 8},
            {"name": "测试区", "chineseName": "测试区", "value": 2},
        ])
    );
    assert_eq!(json["nameMap"].as_object().unwrap().len(), 18);
    assert_eq!(json["nameMap"]["湾仔区"], "Wan Chai");
}

#[tokio::test]
async fn summary_from_fixture() {
    let (status, json) = get_json(fixture_app(), "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "total_new_cases": 24,
            "max_total_cases": 10,
            "date_range_start": "2025-03-20",
            "date_range_end": "2025-03-22",
            "total_days": 3,
            "latest_date": "2025-03-22",
            "latest_new_cases": 9,
            "latest_total_cases": 20,
        })
    );
}

#[tokio::test]
async fn workbook_source_serves_same_aggregates() {
    let xlsx = || app(fixture("cases.xlsx"), fixture("hongkong.json"));

    let (status, daily) = get_json(xlsx(), "/api/daily_statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(daily["dates"], json!(["2025-03-20", "2025-03-21", "2025-03-22"]));
    assert_eq!(daily["growth_rates"], json!([0.0, 87.5, 60.0]));

    for uri in ENDPOINTS {
        let (_, from_xlsx) = get_json(xlsx(), uri).await;
        let (_, from_csv) = get_json(fixture_app(), uri).await;
        assert_eq!(from_xlsx, from_csv, "{uri}");
    }
}

#[tokio::test]
async fn workbook_summary_from_fixture() {
    let app = app(fixture("cases.xlsx"), fixture("hongkong.json"));
    let (status, json) = get_json(app, "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_new_cases"], 24);
    assert_eq!(json["latest_date"], "2025-03-22");
    assert_eq!(json["latest_total_cases"], 20);
}

#[tokio::test]
async fn overflowing_counts_return_500() {
    let path = std::env::temp_dir().join("hk_epidemic_dashboard_it_overflow.csv");
    std::fs::write(
        &path,
        format!(
            "报告日期,地区名称,新增确诊,累计确诊\n2025-03-20,东区,{max},{max}\n2025-03-20,东区,1,1\n",
            max = i64::MAX
        ),
    )
    .unwrap();

    for uri in ENDPOINTS {
        let (status, json) = get_json(app(path.clone(), fixture("hongkong.json")), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(json["error"].as_str().unwrap().contains("overflow"), "{uri}");
    }

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn missing_dataset_returns_500_on_every_aggregate() {
    for uri in ENDPOINTS {
        let app = app(fixture("no_such_file.csv"), fixture("hongkong.json"));
        let (status, json) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let message = json["error"].as_str().unwrap();
        assert!(!message.is_empty(), "{uri}");
        assert_eq!(json.as_object().unwrap().len(), 1, "{uri}");
    }
}

#[tokio::test]
async fn malformed_dataset_returns_500() {
    let path = std::env::temp_dir().join("hk_epidemic_dashboard_it_malformed.csv");
    std::fs::write(&path, "报告日期,地区名称\n2025-03-20,中西区\n").unwrap();

    let (status, json) = get_json(app(path.clone(), fixture("hongkong.json")), "/api/summary").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("missing column"));

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn boundary_file_is_passed_through() {
    let (status, content_type, bytes) = get(fixture_app(), "/api/hongkong_map").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(bytes, std::fs::read(fixture("hongkong.json")).unwrap());
}

#[tokio::test]
async fn missing_boundary_file_returns_404() {
    let app = app(fixture("cases.csv"), fixture("no_such_map.json"));
    let (status, json) = get_json(app, "/api/hongkong_map").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_route_returns_not_found_json() {
    let (status, json) = get_json(fixture_app(), "/api/does_not_exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Not found"}));
}

#[tokio::test]
async fn index_serves_dashboard_page() {
    let (status, content_type, bytes) = get(fixture_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(String::from_utf8(bytes).unwrap().contains("/api/daily_statistics"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = fixture_app()
        .oneshot(
            Request::builder()
                .uri("/api/summary")
                .header(header::ORIGIN, "http://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
