// SPDX-License-Identifier: MPL-2.0
use futures_util::stream::{FuturesUnordered, StreamExt};
use nytaarstale::application::location::Location;
use nytaarstale::application::port::{FetchError, SpeechSource};
use nytaarstale::application::session::Session;
use nytaarstale::config::{self, Config, LOAD_ERROR_KEY};
use nytaarstale::domain::{LoadFailure, SpeechState, Year};
use nytaarstale::i18n::I18n;
use nytaarstale::infrastructure::HttpSpeechSource;
use nytaarstale::ui::theming::ThemeMode;
use serde_json::json;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn year(value: i32) -> Year {
    Year::new(value).expect("valid year")
}

fn speech_json(value: i32) -> serde_json::Value {
    json!({
        "year": value,
        "monarch": "Kong Frederik X",
        "date": format!("{value}-12-31"),
        "title": format!("Nytårstale {value}"),
        "paragraphs": ["Godaften.", "Godt nytår."]
    })
}

async fn mount_speech(server: &MockServer, value: i32, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{value}.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(speech_json(value))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

fn source_for(server: &MockServer) -> HttpSpeechSource {
    HttpSpeechSource::from_str_url(&server.uri()).expect("mock server URL")
}

#[tokio::test]
async fn speech_is_requested_at_assets_path_without_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/2023.json"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(speech_json(2023)))
        .expect(1)
        .mount(&server)
        .await;

    let speech = source_for(&server)
        .fetch_speech(year(2023))
        .await
        .expect("speech served");

    assert_eq!(speech.year, 2023);
    assert_eq!(speech.paragraphs, vec!["Godaften.", "Godt nytår."]);
}

#[tokio::test]
async fn location_form_and_quick_select_all_request_the_same_path() {
    let server = MockServer::start().await;
    for value in [2020, 2021, 2022] {
        Mock::given(method("GET"))
            .and(path(format!("/assets/{value}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(speech_json(value)))
            .expect(1)
            .mount(&server)
            .await;
    }
    let source = source_for(&server);

    let mut session = Session::new(Location::parse("https://nytaarstale.dk/?year=2020"), 2026);
    let from_location = session.start();
    let from_form = session.submit_year("2021").expect("valid submission");
    let from_chip = session.select_year(year(2022)).expect("year changed");

    for ticket in [from_location, from_form, from_chip] {
        let result = source.fetch_speech(ticket.year()).await;
        session.apply_speech(ticket, result);
    }

    assert_eq!(
        session.speech_state().speech().map(|s| s.year),
        Some(2022)
    );
}

#[tokio::test]
async fn missing_year_yields_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/1999.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = Session::new(Location::parse("https://nytaarstale.dk/?year=1999"), 2026);
    let ticket = session.start();
    let result = source_for(&server).fetch_speech(ticket.year()).await;

    assert_eq!(result, Err(FetchError::NotFound));
    session.apply_speech(ticket, result);
    assert_eq!(
        session.speech_state(),
        &SpeechState::Failed(LoadFailure::NotFound)
    );
    assert!(session.speech_state().speech().is_none());
}

#[tokio::test]
async fn server_error_keeps_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/2023.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = source_for(&server).fetch_speech(year(2023)).await;
    assert_eq!(result, Err(FetchError::Status(503)));
}

#[tokio::test]
async fn malformed_document_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/2023.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = source_for(&server).fetch_speech(year(2023)).await;
    assert!(matches!(result, Err(FetchError::Decode(_))), "{result:?}");
}

#[tokio::test]
async fn manifest_is_normalized_from_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/years.json"))
        .and(header("cache-control", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["2024", "2023", 2022, 1500, 9999])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::new(Location::parse("https://nytaarstale.dk/?year=2023"), 2026);
    session.start();
    let manifest = source_for(&server).fetch_manifest().await;

    assert!(session.apply_manifest(manifest).is_none());
    assert_eq!(
        session.available_years(),
        &[year(2024), year(2023), year(2022)]
    );
}

#[tokio::test]
async fn unreachable_manifest_leaves_years_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/years.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = Session::new(Location::parse("https://nytaarstale.dk/?year=2023"), 2026);
    session.start();
    let manifest = source_for(&server).fetch_manifest().await;

    assert!(session.apply_manifest(manifest).is_none());
    assert!(session.available_years().is_empty());
    assert_eq!(session.year(), year(2023));
}

#[tokio::test]
async fn slow_earlier_response_never_overwrites_newer_one() {
    let server = MockServer::start().await;
    mount_speech(&server, 2023, Duration::from_millis(400)).await;
    mount_speech(&server, 2024, Duration::ZERO).await;
    let source = source_for(&server);

    let mut session = Session::new(Location::parse("https://nytaarstale.dk/?year=2022"), 2026);
    session.start();
    let slow = session.select_year(year(2023)).expect("year changed");
    let fast = session.select_year(year(2024)).expect("year changed");

    let mut in_flight = FuturesUnordered::new();
    for ticket in [slow, fast] {
        let request = source.fetch_speech(ticket.year());
        in_flight.push(async move { (ticket, request.await) });
    }

    let mut completion_order = Vec::new();
    while let Some((ticket, result)) = in_flight.next().await {
        completion_order.push(ticket.year().value());
        session.apply_speech(ticket, result);
    }

    assert_eq!(completion_order, vec![2024, 2023]);
    assert_eq!(session.year(), year(2024));
    assert_eq!(
        session.speech_state().speech().map(|s| s.year),
        Some(2024)
    );
}

#[tokio::test]
async fn base_path_is_kept_in_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/archive/assets/2023.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(speech_json(2023)))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpSpeechSource::from_str_url(&format!("{}/archive", server.uri()))
        .expect("valid base");
    assert!(source.fetch_speech(year(2023)).await.is_ok());
}

#[test]
fn config_file_overrides_archive_and_page() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"en-US\"\ntheme_mode = \"dark\"\n\n\
         [source]\nassets_url = \"http://localhost:8080/\"\n\n\
         [share]\npage_url = \"https://example.org/tale\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.source.assets_url(), "http://localhost:8080/");
    assert_eq!(loaded.share.page_url(), "https://example.org/tale");
}

#[test]
fn language_from_config_selects_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    let i18n = I18n::new(None, &loaded);

    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
}

#[test]
fn missing_config_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}
