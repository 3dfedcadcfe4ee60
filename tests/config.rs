#[cfg(test)]
mod tests {
    use ritual::libs::config::{user_agent, Config, ConfigError, Credentials, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
    use ritual::libs::style::Style;
    use std::collections::HashMap;
    use std::time::Duration;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_both_credentials_present() {
        let config = config_from(&[("RITUAL_USERNAME", "me@example.com"), ("RITUAL_PASSWORD", "secret")]).unwrap();
        let credentials = config.credentials.unwrap();
        assert_eq!(credentials.username(), "me@example.com");
        assert_eq!(credentials, Credentials::new("me@example.com", "secret"));
    }

    #[test]
    fn test_partial_or_empty_credentials_are_missing() {
        assert!(config_from(&[("RITUAL_USERNAME", "me@example.com")]).unwrap().credentials.is_none());
        assert!(config_from(&[("RITUAL_PASSWORD", "secret")]).unwrap().credentials.is_none());
        assert!(config_from(&[("RITUAL_USERNAME", "me@example.com"), ("RITUAL_PASSWORD", "")])
            .unwrap()
            .credentials
            .is_none());
    }

    #[test]
    fn test_api_url_override() {
        let config = config_from(&[("RITUAL_API_URL", " http://localhost:8000 ")]).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");

        let err = config_from(&[("RITUAL_API_URL", "localhost:8000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn test_timeout() {
        let config = config_from(&[("RITUAL_TIMEOUT", "5")]).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));

        for value in ["0", "-3", "ten", "1.5"] {
            let err = config_from(&[("RITUAL_TIMEOUT", value)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "value {}", value);
        }

        let err = config_from(&[("RITUAL_TIMEOUT", "ten")]).unwrap_err();
        assert_eq!(err.to_string(), "RITUAL_TIMEOUT must be a positive whole number of seconds, got 'ten'");
    }

    #[test]
    fn test_style_follows_terminal_policy() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.style, Style::detect());
        assert_eq!(Config::default().with_style(Style::Plain).style, Style::Plain);
    }

    #[test]
    fn test_basic_auth_header() {
        let credentials = Credentials::new("Aladdin", "open sesame");
        assert_eq!(credentials.basic_auth(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_user_agent_names_package() {
        assert_eq!(user_agent(), format!("ritual/{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::default().with_credentials(Credentials::new("me@example.com", "hunter2"));
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("me@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
