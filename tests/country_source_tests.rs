use std::time::Duration;

use globefacts::countries::{
    CountrySource, FetchError, GENERIC_FAILURE_MESSAGE, NOT_FOUND_MESSAGE, RestCountriesClient,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Client pointed at the mock server, under a versioned prefix like the real service.
fn client_for(server: &MockServer, timeout: Duration) -> RestCountriesClient {
    RestCountriesClient::new(format!("{}/v3.1", server.uri()), timeout)
}

fn germany_json() -> serde_json::Value {
    json!({
        "name": {
            "common": "Germany",
            "official": "Federal Republic of Germany",
            "nativeName": {
                "deu": { "official": "Bundesrepublik Deutschland", "common": "Deutschland" }
            }
        },
        "cca3": "DEU",
        "capital": ["Berlin"],
        "flags": { "png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg" },
        "flag": "🇩🇪",
        "languages": { "deu": "German" },
        "continents": ["Europe"],
        "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
        "population": 83240525,
        "timezones": ["UTC+01:00"],
        "area": 357114.0,
        "altSpellings": ["DE", "Federal Republic of Germany", "Bundesrepublik Deutschland"]
    })
}

// ============================================================================
// Successful Searches
// ============================================================================

#[tokio::test]
async fn test_search_decodes_single_match() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Germany"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([germany_json()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = assert_ok!(client.search_by_name("Germany").await);

    assert_eq!(countries.len(), 1);
    let germany = &countries[0];
    assert_eq!(germany.cca3, "DEU");
    assert_eq!(germany.name.common, "Germany");
    assert_eq!(germany.capital, vec!["Berlin".to_string()]);
    assert_eq!(germany.population, 83_240_525);
    assert_eq!(germany.alt_spellings.len(), 3);
}

#[tokio::test]
async fn test_search_keeps_service_order() {
    let mock_server = MockServer::start().await;
    let body = json!([
        { "name": { "common": "Guinea" }, "cca3": "GIN" },
        { "name": { "common": "Equatorial Guinea" }, "cca3": "GNQ" },
        { "name": { "common": "Guinea-Bissau" }, "cca3": "GNB" }
    ]);
    Mock::given(method("GET"))
        .and(path("/v3.1/name/guinea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = assert_ok!(client.search_by_name("guinea").await);

    let codes: Vec<&str> = countries.iter().map(|c| c.cca3.as_str()).collect();
    assert_eq!(codes, ["GIN", "GNQ", "GNB"]);
}

#[tokio::test]
async fn test_sparse_record_still_decodes() {
    let mock_server = MockServer::start().await;
    // Antarctica has no capital, borders or languages
    let body = json!([{
        "name": { "common": "Antarctica", "official": "Antarctica" },
        "cca3": "ATA",
        "flags": { "png": "https://flagcdn.com/w320/aq.png" },
        "continents": ["Antarctica"],
        "population": 1000,
        "area": 14000000
    }]);
    Mock::given(method("GET"))
        .and(path("/v3.1/name/antarctica"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = assert_ok!(client.search_by_name("antarctica").await);

    assert_eq!(countries[0].capital, Vec::<String>::new());
    assert_eq!(countries[0].borders, None);
    assert_eq!(countries[0].area, 14_000_000.0);
}

// ============================================================================
// Not Found
// ============================================================================

#[tokio::test]
async fn test_404_envelope_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/atlantis"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"status": 404, "message": "Not Found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let error = assert_err!(client.search_by_name("atlantis").await);

    assert_eq!(error, FetchError::NotFound);
    assert_eq!(error.user_message(), NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_200_false_response_envelope_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/atlantis"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Response": "False", "Error": "Country not found!"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let error = assert_err!(client.search_by_name("atlantis").await);

    assert_eq!(error.user_message(), NOT_FOUND_MESSAGE);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Germany"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let error = assert_err!(client.search_by_name("Germany").await);

    match &error {
        FetchError::Status { status, message } => {
            assert_eq!(*status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_plain_404_without_envelope_is_generic_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Germany"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let error = assert_err!(client.search_by_name("Germany").await);

    assert!(matches!(error, FetchError::Status { status: 404, .. }));
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Germany"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"name\": "))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let error = assert_err!(client.search_by_name("Germany").await);

    assert!(matches!(error, FetchError::Decode(_)));
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3.1/name/Germany"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([germany_json()]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_millis(200));
    let error = assert_err!(client.search_by_name("Germany").await);

    assert!(matches!(error, FetchError::Transport(_)));
    assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Port 9 (discard) on localhost is closed in test environments
    let client = RestCountriesClient::new("http://127.0.0.1:9/v3.1".to_string(), Duration::from_secs(2));
    let error = assert_err!(client.search_by_name("Germany").await);

    assert!(matches!(error, FetchError::Transport(_)));
}
