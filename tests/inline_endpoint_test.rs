use dados_proxy::{dispatch, ApiRequest, ErrorBody, Settings};
use reqwest::{Client, Method, StatusCode};

fn settings_with_json(json: Option<&str>) -> Settings {
    Settings {
        dados_json: json.map(str::to_string),
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_env_json_is_returned_unmodified() {
    let json = r#"{"regioes": {"Nordeste": 12, "Sul": 4}, "gerado_em": "2024-05-01"}"#;
    let response = dispatch(
        &ApiRequest::get("/api/dados-env"),
        &settings_with_json(Some(json)),
        &Client::new(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_deref(), Some(json));
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_missing_env_json() {
    let response = dispatch(
        &ApiRequest::get("/api/dados-env"),
        &settings_with_json(None),
        &Client::new(),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body.error, "Dados não disponíveis");
}

#[tokio::test]
async fn test_malformed_env_json_reports_parser_message() {
    let malformed = "{\"regioes\": [1, 2,]}";
    let expected = serde_json::from_str::<serde_json::Value>(malformed)
        .unwrap_err()
        .to_string();

    let response = dispatch(
        &ApiRequest::get("/api/dados-env"),
        &settings_with_json(Some(malformed)),
        &Client::new(),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body.error, "Erro ao carregar dados");
    assert_eq!(body.message, expected);
}

#[tokio::test]
async fn test_preflight_ignores_missing_config() {
    let response = dispatch(
        &ApiRequest::new(Method::OPTIONS, "/api/dados-env"),
        &settings_with_json(None),
        &Client::new(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_none());
}
