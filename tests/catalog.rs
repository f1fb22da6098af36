use mockito::mock;

use registry_gui::errors::Error;
use registry_gui::v2::Client;

fn client_with_ua(ua: &str) -> Client {
    Client::configure()
        .address(&mockito::server_url())
        .user_agent(Some(ua.to_string()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_catalog_simple() {
    let ua = "registry-gui-test/catalog";
    let repos = r#"{"repositories": ["r1/i1", "r2"]}"#;
    let _m = mock("GET", "/v2/_catalog")
        .match_header("user-agent", ua)
        .with_status(200)
        .with_body(repos)
        .create();

    let catalog = client_with_ua(ua).get_catalog().await.unwrap();
    assert_eq!(catalog.repositories, vec!["r1/i1", "r2"]);
}

#[tokio::test]
async fn test_catalog_client_error_status() {
    let ua = "registry-gui-test/catalog-401";
    let _m = mock("GET", "/v2/_catalog")
        .match_header("user-agent", ua)
        .with_status(401)
        .with_body(r#"{"errors":[]}"#)
        .create();

    let res = client_with_ua(ua).get_catalog().await;
    assert!(matches!(
        res,
        Err(Error::Client { status }) if status == reqwest::StatusCode::UNAUTHORIZED
    ));
}

#[tokio::test]
async fn test_catalog_invalid_body_is_json_error() {
    let ua = "registry-gui-test/catalog-html";
    let _m = mock("GET", "/v2/_catalog")
        .match_header("user-agent", ua)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let res = client_with_ua(ua).get_catalog().await;
    assert!(matches!(res, Err(Error::Json(_))));
}
