//! # Logging Configuration Tests
//!
//! Tests for structured logging setup and configuration.

#[cfg(test)]
mod logging_config_tests {
    use logging::LoggingConfig;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "compact");
        assert_eq!(config.environment, "development");
        assert!(config.include_timestamp);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level": "warn", "log-file": "logs/signiel.log"}"#)
            .expect("config should deserialize");
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "compact");
        assert_eq!(config.log_file.as_deref(), Some("logs/signiel.log"));
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_build_json_subscriber_with_file() {
        let dir = std::env::temp_dir().join("signiel-logging-test");
        let config = LoggingConfig {
            format: "json".to_string(),
            log_file: Some(dir.join("test.log").to_string_lossy().into_owned()),
            ..Default::default()
        };
        let _subscriber = config.build();
    }
}

#[cfg(test)]
mod macro_tests {
    use logging::{log_db_query, log_lazy_load, measure_duration};

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_db_query!("select", "party_member", 3);
        log_lazy_load!("member", 42, false);
        let value = measure_duration!("database", "authority", { 2 + 2 });
        assert_eq!(value, 4);
    }
}

#[cfg(test)]
mod tracing_subscriber_tests {
    #[test]
    fn test_tracing_setup() {
        // Even if already initialized, this shouldn't panic
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        tracing::info!(target: "database", "test event");
    }
}
