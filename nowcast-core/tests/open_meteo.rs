//! End-to-end tests of the Open-Meteo provider and a view session against a
//! mock HTTP server.

use std::sync::Arc;

use nowcast_core::{
    Config, CurrentWeather, FetchError, FetchOutcome, OpenMeteoProvider, ViewSession,
    WeatherProvider,
};
use reqwest::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        endpoint: format!("{}/v1/forecast", server.uri()),
        ..Config::default()
    }
}

fn forecast_url(server: &MockServer) -> Url {
    Url::parse(&format!(
        "{}/v1/forecast?latitude=51.5072&longitude=-0.1276&current_weather=true",
        server.uri()
    ))
    .unwrap()
}

async fn mount_current(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5072"))
        .and(query_param("longitude", "-0.1276"))
        .and(query_param("current_weather", "true"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn rain_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "generationtime_ms": 0.05,
        "current_weather": {
            "time": "2026-10-19T12:00",
            "interval": 900,
            "temperature": 12.0,
            "windspeed": 9.5,
            "winddirection": 250,
            "is_day": 1,
            "weathercode": 61
        }
    })
}

#[tokio::test]
async fn provider_decodes_current_weather() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(rain_body())).await;

    let provider = OpenMeteoProvider::new().unwrap();
    let current = provider.current_weather(&forecast_url(&server)).await.unwrap();

    assert_eq!(current, CurrentWeather { temperature: 12.0, windspeed: 9.5, weathercode: 61 });
}

#[tokio::test]
async fn provider_reports_http_status() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(503).set_body_string("maintenance")).await;

    let provider = OpenMeteoProvider::new().unwrap();
    let err = provider.current_weather(&forecast_url(&server)).await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_reports_missing_current_weather_as_decode_error() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "latitude": 51.5 })),
    )
    .await;

    let provider = OpenMeteoProvider::new().unwrap();
    let err = provider.current_weather(&forecast_url(&server)).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn session_renders_successful_fetch() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(rain_body())).await;

    let provider = Arc::new(OpenMeteoProvider::new().unwrap());
    let mut view = ViewSession::new(provider, &config_for(&server)).unwrap();

    view.fetch_now();
    let outcome = view.next_completion().await.unwrap();

    assert!(matches!(outcome, FetchOutcome::Success(_)));
    let state = view.state();
    assert_eq!(state.temperature_text, "12.0°C");
    assert_eq!(state.windspeed_text, "9.5 km/h");
    assert_eq!(state.description_text, "Rain");
    assert_eq!(state.weather_code, Some(61));
    assert_eq!(view.current_icon(), "cloud.rain.fill");
}

#[tokio::test]
async fn session_shows_failure_on_server_error() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(500)).await;

    let provider = Arc::new(OpenMeteoProvider::new().unwrap());
    let mut view = ViewSession::new(provider, &config_for(&server)).unwrap();

    view.fetch_now();
    assert_eq!(view.next_completion().await, Some(FetchOutcome::Failure));

    let state = view.state();
    assert_eq!(state.description_text, "Failed to load");
    assert_eq!(state.temperature_text, "--");
    assert_eq!(state.windspeed_text, "--");
}

#[tokio::test]
async fn session_treats_malformed_json_like_network_failure() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_string("{not json")).await;

    let provider = Arc::new(OpenMeteoProvider::new().unwrap());
    let mut view = ViewSession::new(provider, &config_for(&server)).unwrap();

    view.fetch_now();
    assert_eq!(view.next_completion().await, Some(FetchOutcome::Failure));
    assert_eq!(view.state().description_text, "Failed to load");
}

#[tokio::test]
async fn failure_after_success_keeps_stale_readings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rain_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let provider = Arc::new(OpenMeteoProvider::new().unwrap());
    let mut view = ViewSession::new(provider, &config_for(&server)).unwrap();

    view.fetch_now();
    view.next_completion().await.unwrap();
    view.fetch_now();
    view.next_completion().await.unwrap();

    let state = view.state();
    assert_eq!(state.description_text, "Failed to load");
    assert_eq!(state.temperature_text, "12.0°C");
    assert_eq!(state.windspeed_text, "9.5 km/h");
}

#[tokio::test]
async fn unreachable_host_is_a_failure() {
    let config = Config {
        endpoint: "http://127.0.0.1:9/v1/forecast".to_string(),
        ..Config::default()
    };

    let provider = Arc::new(OpenMeteoProvider::new().unwrap());
    let mut view = ViewSession::new(provider, &config).unwrap();

    view.fetch_now();
    assert_eq!(view.next_completion().await, Some(FetchOutcome::Failure));
    assert_eq!(view.state().description_text, "Failed to load");
}

#[tokio::test]
async fn zero_interval_config_cannot_open_a_view() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(200).set_body_json(rain_body())).await;

    let config = Config { refresh_interval_secs: 0, ..config_for(&server) };
    let provider = Arc::new(OpenMeteoProvider::new().unwrap());

    assert!(ViewSession::new(provider, &config).is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}
