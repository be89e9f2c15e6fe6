//! Integration tests for OpenWeatherProvider and WeatherLookup using wiremock.

use skycast_core::{
    Config, LookupError, OpenWeatherProvider, RequestStatus, WeatherLookup, WeatherProvider,
    display, provider::provider_from_config,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(name: &str, main: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 500, "main": main, "description": "light rain", "icon": "10d"}],
        "main": {"temp": temp, "feels_like": temp + 0.5, "pressure": 1009, "humidity": 83},
        "visibility": 10000,
        "wind": {"speed": 3.6},
        "clouds": {"all": 75},
        "sys": {"country": "IN"},
        "name": name
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_endpoint(format!("{}/data/2.5/weather", server.uri()), "KEY".into())
}

#[tokio::test]
async fn sends_encoded_city_units_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("São Paulo", "Clouds", 24.0)))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = provider_for(&server).current_weather("São Paulo").await.unwrap();
    assert_eq!(snapshot.location_name, "São Paulo");
    assert_eq!(snapshot.category, "Clouds");
}

#[tokio::test]
async fn success_renders_expected_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Mumbai", "Rain", 21.4)))
        .mount(&server)
        .await;

    let mut lookup = WeatherLookup::new(provider_for(&server));
    let snapshot = lookup.submit("Mumbai").await.unwrap();

    assert_eq!(lookup.state().status(), &RequestStatus::Success);
    assert_eq!(display::format_temperature(snapshot.temperature_c), "21°C");
    assert_eq!(display::format_visibility(snapshot.visibility_m), "10.0 km");
    assert_eq!(display::icon_for(&snapshot.condition()), display::Icon::CloudRain);
    assert_eq!(display::format_location(&snapshot), "Mumbai, IN");
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_weather("Atlantis").await.unwrap_err();
    assert_eq!(err, LookupError::NotFound);
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_weather("Paris").await.unwrap_err();
    assert_eq!(err, LookupError::InvalidCredential);
}

#[tokio::test]
async fn other_status_maps_to_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_weather("Paris").await.unwrap_err();
    match err {
        LookupError::UpstreamError { detail } => assert!(detail.contains("502"), "{detail}"),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, LookupError::UpstreamError { .. }));
}

#[tokio::test]
async fn transport_failure_is_upstream_error() {
    // Nothing listens on port 9 on the loopback interface.
    let provider = OpenWeatherProvider::with_endpoint("http://127.0.0.1:9/weather".into(), "KEY".into());

    let err = provider.current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, LookupError::UpstreamError { .. }));
}

#[tokio::test]
async fn not_found_after_success_clears_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Mumbai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Mumbai", "Clear", 30.0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut lookup = WeatherLookup::start(provider_for(&server), "Mumbai").await;
    assert!(lookup.state().snapshot().is_some());

    lookup.set_query("Atlantis");
    let err = lookup.submit_current().await.unwrap_err();

    assert_eq!(err, LookupError::NotFound);
    assert_eq!(lookup.state().status(), &RequestStatus::Failed(LookupError::NotFound));
    assert!(lookup.state().snapshot().is_none());
}

#[tokio::test]
async fn provider_from_config_uses_configured_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom"))
        .and(query_param("appid", "CONFIGURED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Pune", "Clear", 28.0)))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = Config::default();
    cfg.set_api_key("CONFIGURED".into());
    cfg.endpoint = format!("{}/custom", server.uri());

    let provider = provider_from_config(&cfg).unwrap();
    let snapshot = provider.current_weather("Pune").await.unwrap();
    assert_eq!(snapshot.location_name, "Pune");
}
