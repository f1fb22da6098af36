use mockito::mock;

use registry_gui::v2::Client;

fn client() -> Client {
    Client::configure()
        .address(&mockito::server_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_tags_simple() {
    let body = r#"{"name": "my-repo", "tags": ["latest", "1.0.0"]}"#;
    let _m = mock("GET", "/v2/my-repo/tags/list")
        .with_status(200)
        .with_body(body)
        .create();

    let tags = client().get_tags("my-repo").await.unwrap();
    assert_eq!(tags.name, "my-repo");
    assert_eq!(tags.tags, vec!["latest", "1.0.0"]);
}

#[tokio::test]
async fn test_tags_percent_encoded_name_is_decoded() {
    // Multi-segment repository names travel percent-encoded through the
    // router; the request must target the decoded path.
    let body = r#"{"name": "library/nginx", "tags": ["stable"]}"#;
    let _m = mock("GET", "/v2/library/nginx/tags/list")
        .with_status(200)
        .with_body(body)
        .create();

    let tags = client().get_tags("library%2Fnginx").await.unwrap();
    assert_eq!(tags.name, "library/nginx");
    assert_eq!(tags.tags, vec!["stable"]);
}
