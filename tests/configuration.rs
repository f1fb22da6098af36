use std::io::Write;

use registry_gui::config::{self, ConfigError, DockerOverrides, Overrides};

fn overrides_with_file(path: std::path::PathBuf) -> Overrides {
    Overrides {
        config_path: Some(path),
        docker: DockerOverrides::default(),
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_only() {
    let config = config::resolve(Overrides::default()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.graceful_timeout_ms, 15000);
    assert_eq!(config.docker.protocol, "https://");
    assert_eq!(config.docker.address, "https://registry-1.docker.io");
}

#[test]
fn test_file_overrides_only_fields_it_sets() {
    let file = write_config("docker:\n  registry: \"myreg.example.com\"\n");
    let config = config::resolve(overrides_with_file(file.path().to_path_buf())).unwrap();

    // Everything not set in the file keeps its default.
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.docker.protocol, "https://");
    assert_eq!(config.docker.address, "https://myreg.example.com");
}

#[test]
fn test_file_overrides_server_and_docker_sections() {
    let file = write_config(
        "server:\n  port: 9090\n  gracefulTimeoutMs: 5000\ndocker:\n  protocol: \"http://\"\n  registry: \"localhost\"\n  port: 5000\n",
    );
    let config = config::resolve(overrides_with_file(file.path().to_path_buf())).unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.graceful_timeout_ms, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.docker.address, "http://localhost:5000");
}

#[test]
fn test_cli_port_override_appends_port() {
    let overrides = Overrides {
        config_path: None,
        docker: DockerOverrides {
            registry: Some("myreg.example.com".to_string()),
            port: Some(5000),
            ..Default::default()
        },
    };
    let config = config::resolve(overrides).unwrap();

    assert_eq!(config.docker.address, "https://myreg.example.com:5000");
}

#[test]
fn test_cli_wins_over_file_where_supplied() {
    let file = write_config(
        "docker:\n  registry: \"file.example.com\"\n  username: \"file-user\"\n",
    );
    let overrides = Overrides {
        config_path: Some(file.path().to_path_buf()),
        docker: DockerOverrides {
            registry: Some("cli.example.com".to_string()),
            password: Some("cli-pass".to_string()),
            ..Default::default()
        },
    };
    let config = config::resolve(overrides).unwrap();

    assert_eq!(config.docker.registry, "cli.example.com");
    // Fields the CLI leaves alone survive from the file layer.
    assert_eq!(config.docker.username, "file-user");
    assert_eq!(config.docker.password, "cli-pass");
}

#[test]
fn test_file_protocol_survives_without_cli_flag() {
    let file = write_config("docker:\n  protocol: \"http://\"\n  registry: \"localhost\"\n");
    let config = config::resolve(overrides_with_file(file.path().to_path_buf())).unwrap();

    assert_eq!(config.docker.address, "http://localhost");
}

#[test]
fn test_directory_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let res = config::resolve(overrides_with_file(dir.path().to_path_buf()));

    assert!(matches!(res, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn test_missing_path_is_rejected() {
    let res = config::resolve(overrides_with_file("/no/such/file.yaml".into()));

    assert!(matches!(res, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_file_is_rejected() {
    let file = write_config("server: [not, a, mapping\n");
    let res = config::resolve(overrides_with_file(file.path().to_path_buf()));

    assert!(matches!(res, Err(ConfigError::Parse(_))));
}
