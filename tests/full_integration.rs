//! Integration tests for remote locations, served by a local mock server.

#![cfg(feature = "remote")]

use handykit::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct IntegrationConfig {
    server: ServerConfig,
    features: Features,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ServerConfig {
    port: u16,
    host: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Features {
    enable_metrics: bool,
    enable_caching: bool,
}

const YAML_BODY: &str = r#"
server:
  port: 8080
  host: "localhost"

features:
  enable_metrics: false
  enable_caching: true
"#;

#[test]
fn test_remote_yaml() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_header("content-type", "application/yaml")
        .with_body(YAML_BODY)
        .create();

    let config: IntegrationConfig =
        parse_file(&format!("{}/config.yaml", server.url())).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "localhost");
    assert!(!config.features.enable_metrics);
    assert!(config.features.enable_caching);
    mock.assert();
}

#[test]
fn test_remote_with_env_overlay() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_body(YAML_BODY)
        .create();

    let loader = ConfigLoader::new().with_env(vec![
        ("SVC_SERVER_PORT".to_string(), "9090".to_string()),
        ("OTHER_SERVER_PORT".to_string(), "1".to_string()),
    ]);

    let config: IntegrationConfig = loader
        .load(&format!("{}/config.yaml", server.url()), "SVC")
        .unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "localhost");
}

#[test]
fn test_remote_query_string_keeps_format() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.json")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"server": {"port": 1, "host": "h"}, "features": {"enable_metrics": true, "enable_caching": false}}"#)
        .create();

    let config: IntegrationConfig =
        parse_file(&format!("{}/config.json?ref=main", server.url())).unwrap();
    assert_eq!(config.server.port, 1);
}

#[test]
fn test_remote_not_found_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/config.json").with_status(404).create();

    let result = parse_file::<IntegrationConfig>(&format!("{}/config.json", server.url()));
    assert!(matches!(result, Err(ConfigError::FetchFailed { .. })));
}

#[test]
fn test_remote_malformed_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.toml")
        .with_status(200)
        .with_body("<html>not toml</html>")
        .create();

    let location = format!("{}/config.toml", server.url());
    let err = parse_file::<IntegrationConfig>(&location).unwrap_err();
    match err {
        ConfigError::MalformedPayload {
            format,
            location: reported,
            ..
        } => {
            assert_eq!(format, Format::Toml);
            assert_eq!(reported, location);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_truncated_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.json")
        .with_status(200)
        .with_chunked_body(|w| {
            w.write_all(br#"{"server": "#)?;
            w.flush()?;
            std::thread::sleep(std::time::Duration::from_millis(100));
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionAborted, "dropped"))
        })
        .create();

    let result = parse_file::<IntegrationConfig>(&format!("{}/config.json", server.url()));
    assert!(matches!(result, Err(ConfigError::InvalidBody { .. })));
}

#[test]
fn test_remote_camel_case_keys() {
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Camel {
        server_url: String,
        retry_count: u32,
    }

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_body("serverUrl: https://api.example.com\nretryCount: 3\n")
        .create();

    let loader =
        ConfigLoader::new().with_env(vec![("SVC_RETRYCOUNT".to_string(), "5".to_string())]);
    let config: Camel = loader
        .load(&format!("{}/config.yaml", server.url()), "SVC")
        .unwrap();

    assert_eq!(config.server_url, "https://api.example.com");
    assert_eq!(config.retry_count, 5);
}

#[test]
fn test_unreachable_host() {
    let result = parse_file::<IntegrationConfig>("http://127.0.0.1:1/config.json");
    assert!(matches!(result, Err(ConfigError::FetchFailed { .. })));
}

#[test]
fn test_unsupported_scheme() {
    let result = parse_file::<IntegrationConfig>("ftp://example.com/config.json");
    assert!(matches!(
        result,
        Err(ConfigError::UnsupportedScheme { .. })
    ));
}

#[test]
fn test_shared_client_reused() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/config.yaml")
        .with_status(200)
        .with_body(YAML_BODY)
        .expect(2)
        .create();

    let loader = ConfigLoader::new().with_http_client(reqwest::blocking::Client::new());
    let location = format!("{}/config.yaml", server.url());

    let first: IntegrationConfig = loader.load(&location, "").unwrap();
    let second: IntegrationConfig = loader.load(&location, "").unwrap();

    assert_eq!(first, second);
    mock.assert();
}
