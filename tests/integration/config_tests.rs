//! Configuration loading and overrides

#[cfg(test)]
mod tests {
    use batch_console::config::{Config, ENV_API_URL, ENV_TIMEOUT};
    use std::collections::HashMap;
    use std::io::Write;

    const EXAMPLE: &str = include_str!("../../config/console.yaml.example");

    #[test]
    fn test_example_config_is_valid() {
        let config = Config::from_yaml(EXAMPLE).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.reports.page_size, 20);
        assert_eq!(config.dashboard.refresh_interval, 30);
    }

    #[tokio::test]
    async fn test_load_from_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: \"https://batch.example.com\"\n  timeout: 5").unwrap();

        let mut config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.api.timeout, 5);

        let env: HashMap<&str, &str> = [(ENV_API_URL, "https://other.example.com"), (ENV_TIMEOUT, "12")]
            .into_iter()
            .collect();
        config
            .apply_env_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.api.base_url, "https://other.example.com");
        assert_eq!(config.api.timeout, 12);
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_yaml("api:\n  base_url: \"ftp://x\"\n").is_err());
        assert!(Config::from_yaml("reports:\n  fetch_size: 200\n").is_err());
        assert!(Config::from_yaml("dashboard:\n  refresh_interval: 0\n").is_err());
    }
}
