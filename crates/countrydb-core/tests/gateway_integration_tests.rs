use countrydb_core::{
    filter_countries, Country, CountryGateway, CountryName, Flags, LocalSnapshot, RemoteSource,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// A country record in the remote wire shape.
fn wire_country(code: &str, name: &str, region: &str, borders: &[&str]) -> Value {
    let mut record = json!({
        "name": {
            "common": name,
            "official": name,
            "nativeName": {}
        },
        "cca3": code,
        "capital": [format!("{name} City")],
        "region": region,
        "subregion": region,
        "population": 1_000_000,
        "flags": {
            "png": format!("https://flagcdn.com/w320/{}.png", code.to_lowercase()),
            "svg": format!("https://flagcdn.com/{}.svg", code.to_lowercase())
        },
        "tld": [format!(".{}", code.to_lowercase())],
        "currencies": {},
        "languages": {}
    });
    if !borders.is_empty() {
        record["borders"] = json!(borders);
    }
    record
}

/// A minimal domain record for driving border resolution directly.
fn domain_country(code: &str, borders: &[&str]) -> Country {
    Country {
        code: code.to_owned(),
        name: CountryName {
            common: code.to_owned(),
            official: code.to_owned(),
            native: HashMap::new(),
        },
        capital: vec![],
        region: "Europe".to_owned(),
        subregion: None,
        population: 0,
        borders: borders.iter().map(|b| (*b).to_owned()).collect(),
        flags: Flags {
            png: String::new(),
            svg: String::new(),
            alt: None,
        },
        tld: vec![],
        currencies: HashMap::new(),
        languages: HashMap::new(),
    }
}

fn gateway_for(server: &MockServer) -> CountryGateway {
    CountryGateway::with_sources(
        RemoteSource::with_base_url(server.uri()),
        LocalSnapshot::new(),
    )
}

/// A gateway whose remote tier points at a port nothing listens on.
fn unreachable_gateway() -> CountryGateway {
    CountryGateway::with_sources(
        RemoteSource::with_base_url("http://127.0.0.1:1"),
        LocalSnapshot::new(),
    )
}

fn codes(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(Country::code).collect()
}

// ============================================================================
// list_all
// ============================================================================

#[tokio::test]
async fn list_all_prefers_the_remote_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wire_country("AAA", "Alpha", "Asia", &[]),
            wire_country("BBB", "Beta", "Europe", &[]),
        ])))
        .mount(&server)
        .await;

    let all = gateway_for(&server).list_all().await.unwrap();
    assert_eq!(codes(&all), ["AAA", "BBB"]);
}

#[tokio::test]
async fn list_all_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let all = gateway_for(&server).list_all().await.unwrap();
    let snapshot = LocalSnapshot::new().load().unwrap();
    assert_eq!(all, snapshot);
}

#[tokio::test]
async fn list_all_falls_back_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let all = gateway_for(&server).list_all().await.unwrap();
    assert_eq!(all, LocalSnapshot::new().load().unwrap());
}

#[tokio::test]
async fn list_all_falls_back_when_remote_is_unreachable() {
    let all = unreachable_gateway().list_all().await.unwrap();
    assert_eq!(all, LocalSnapshot::new().load().unwrap());
}

// ============================================================================
// get_by_code
// ============================================================================

#[tokio::test]
async fn get_by_code_uses_the_remote_reply() {
    let server = MockServer::start().await;
    // The alpha endpoint wraps its record in a one-element array.
    Mock::given(method("GET"))
        .and(path("/alpha/FRA"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([wire_country("FRA", "France", "Europe", &["DEU"])])),
        )
        .mount(&server)
        .await;

    let hit = gateway_for(&server).get_by_code("FRA").await.unwrap();
    let country = hit.expect("remote record");
    assert_eq!(country.code, "FRA");
    assert_eq!(country.borders, ["DEU"]);
}

#[tokio::test]
async fn get_by_code_falls_back_to_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/DEU"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let hit = gateway_for(&server).get_by_code("DEU").await.unwrap();
    let expected = LocalSnapshot::new().find_by_code("DEU").unwrap();
    assert_eq!(hit, expected);
    assert_eq!(hit.unwrap().name(), "Germany");
}

#[tokio::test]
async fn get_by_code_treats_an_empty_reply_as_remote_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/CHE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let hit = gateway_for(&server).get_by_code("CHE").await.unwrap();
    assert_eq!(hit.expect("snapshot record").code, "CHE");
}

#[tokio::test]
async fn get_by_code_absent_in_both_tiers_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let hit = gateway_for(&server).get_by_code("ZZZ").await.unwrap();
    assert_eq!(hit, None);
}

#[tokio::test]
async fn every_snapshot_code_resolves_while_remote_is_down() {
    let gateway = unreachable_gateway();
    for country in LocalSnapshot::new().load().unwrap() {
        let hit = gateway.get_by_code(&country.code).await.unwrap();
        assert_eq!(hit.expect("snapshot hit").code, country.code);
    }
}

#[tokio::test]
async fn code_lookup_is_case_insensitive_offline() {
    let hit = unreachable_gateway().get_by_code("deu").await.unwrap();
    assert_eq!(hit.expect("snapshot hit").code, "DEU");
}

// ============================================================================
// resolve_borders
// ============================================================================

#[tokio::test]
async fn border_resolution_is_partial_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wire_country("ABC", "Abcland", "Asia", &[]),
            wire_country("QQQ", "Quuxland", "Asia", &[]),
        ])))
        .mount(&server)
        .await;

    let subject = domain_country("SUB", &["ABC", "XYZ"]);
    let borders = gateway_for(&server)
        .resolve_borders(&subject)
        .await
        .unwrap();
    assert_eq!(codes(&borders), ["ABC"]);
}

#[tokio::test]
async fn borderless_country_resolves_without_any_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let subject = domain_country("ISL", &[]);
    let borders = gateway_for(&server)
        .resolve_borders(&subject)
        .await
        .unwrap();
    assert!(borders.is_empty());
    // Dropping the server verifies that /all was never hit.
}

#[tokio::test]
async fn border_resolution_keeps_the_source_collection_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wire_country("AAA", "Alpha", "Asia", &[]),
            wire_country("BBB", "Beta", "Asia", &[]),
            wire_country("CCC", "Gamma", "Asia", &[]),
        ])))
        .mount(&server)
        .await;

    // Border list in reverse of the collection order.
    let subject = domain_country("SUB", &["CCC", "AAA"]);
    let borders = gateway_for(&server)
        .resolve_borders(&subject)
        .await
        .unwrap();
    assert_eq!(codes(&borders), ["AAA", "CCC"]);
}

#[tokio::test]
async fn border_resolution_falls_back_with_the_listing() {
    // Snapshot Germany borders France; both live in the bundled data.
    let gateway = unreachable_gateway();
    let germany = gateway.get_by_code("DEU").await.unwrap().unwrap();
    let borders = gateway.resolve_borders(&germany).await.unwrap();

    assert!(borders.iter().any(|c| c.code == "FRA"));
    // The snapshot is a subset; some real neighbors are absent and silently
    // omitted, never errors.
    assert!(borders.len() <= germany.borders.len());
}

// ============================================================================
// load_detail
// ============================================================================

#[tokio::test]
async fn detail_load_resolves_record_then_borders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/DEU"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([wire_country(
                "DEU",
                "Germany",
                "Europe",
                &["FRA", "POL"]
            )])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wire_country("FRA", "France", "Europe", &[]),
            wire_country("POL", "Poland", "Europe", &[]),
            wire_country("ESP", "Spain", "Europe", &[]),
        ])))
        .mount(&server)
        .await;

    let detail = gateway_for(&server)
        .load_detail("DEU")
        .await
        .unwrap()
        .expect("detail");
    assert_eq!(detail.country.code, "DEU");
    assert_eq!(codes(&detail.borders), ["FRA", "POL"]);
}

#[tokio::test]
async fn detail_load_for_unknown_code_skips_border_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/ZZZ"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let detail = gateway_for(&server).load_detail("ZZZ").await.unwrap();
    assert!(detail.is_none());
}

// ============================================================================
// Fallback + filter scenario
// ============================================================================

#[tokio::test]
async fn filtering_a_fallback_listing_matches_filtering_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let via_gateway = gateway_for(&server).list_all().await.unwrap();
    let direct = LocalSnapshot::new().load().unwrap();

    let filtered_gateway: Vec<Country> = filter_countries(&via_gateway, "an", "Europe")
        .into_iter()
        .cloned()
        .collect();
    let filtered_direct: Vec<Country> = filter_countries(&direct, "an", "Europe")
        .into_iter()
        .cloned()
        .collect();

    assert!(!filtered_gateway.is_empty());
    assert_eq!(filtered_gateway, filtered_direct);
}
