use mockito::mock;

use registry_gui::v2::Client;

fn client() -> Client {
    Client::configure()
        .address(&mockito::server_url())
        .build()
        .unwrap()
}

static CONFIG_BLOB: &str = r##"{
  "architecture": "amd64",
  "config": {
    "Hostname": "",
    "User": "app",
    "Env": ["PATH=/usr/local/bin:/usr/bin", "LANG=C.UTF-8"],
    "Cmd": ["/bin/app", "--serve"],
    "Entrypoint": null,
    "WorkingDir": "/srv",
    "ExposedPorts": {"8080/tcp": {}},
    "Labels": {"maintainer": "nobody"}
  },
  "container_config": {
    "Hostname": "builder",
    "Cmd": ["/bin/sh", "-c", "#(nop) CMD [\"/bin/app\"]"]
  },
  "created": "2023-03-07T11:32:09.817Z",
  "docker_version": "20.10.23",
  "history": [
    {"created": "2023-03-07T11:31:00Z", "created_by": "ADD rootfs.tar /"},
    {"created": "2023-03-07T11:32:09Z", "created_by": "CMD [\"/bin/app\"]", "empty_layer": true}
  ],
  "os": "linux",
  "rootfs": {
    "type": "layers",
    "diff_ids": ["sha256:diff1", "sha256:diff2"]
  }
}"##;

#[tokio::test]
async fn test_config_blob_decodes() {
    let _m = mock("GET", "/v2/my-repo/blobs/sha256:cfg")
        .with_status(200)
        .with_body(CONFIG_BLOB)
        .create();

    let blob = client()
        .get_config_blob("my-repo", "sha256:cfg")
        .await
        .unwrap();

    assert_eq!(blob.architecture, "amd64");
    assert_eq!(blob.os, "linux");
    assert_eq!(blob.docker_version, "20.10.23");
    assert_eq!(blob.config.user, "app");
    assert_eq!(
        blob.config.env.as_deref(),
        Some(&["PATH=/usr/local/bin:/usr/bin".to_string(), "LANG=C.UTF-8".to_string()][..])
    );
    assert_eq!(blob.history.len(), 2);
    assert!(blob.history[1].empty_layer);
    assert_eq!(blob.rootfs.fs_type, "layers");
    assert_eq!(blob.rootfs.diff_ids.len(), 2);
}

#[tokio::test]
async fn test_config_blob_percent_encoded_repository() {
    let _m = mock("GET", "/v2/library/nginx/blobs/sha256:deadbeef")
        .with_status(200)
        .with_body(r#"{"architecture": "arm64", "os": "linux"}"#)
        .create();

    let blob = client()
        .get_config_blob("library%2Fnginx", "sha256:deadbeef")
        .await
        .unwrap();
    assert_eq!(blob.architecture, "arm64");
}
