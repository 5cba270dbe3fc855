use mgmt_registrar::errors::{RegistrarError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_malformed_name_error() {
        let error = RegistrarError::malformed_name("missing ':'");

        assert!(matches!(error, RegistrarError::MalformedName(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Malformed Object Name"));
        assert!(error.to_string().contains("missing ':'"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            RegistrarError::malformed_name("a"),
            RegistrarError::duplicate_registration("b"),
            RegistrarError::not_registered("c"),
            RegistrarError::config("d"),
            RegistrarError::logging("e"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_message_and_simple_format() {
        let error = RegistrarError::not_registered("app:type=X is not registered");
        assert_eq!(error.message(), "app:type=X is not registered");
        assert_eq!(
            error.format_simple(),
            "Object Not Registered: app:type=X is not registered"
        );
    }

    #[test]
    fn test_colored_format_contains_parts() {
        let error = RegistrarError::config("bad file");
        let colored = error.format_colored();
        assert!(colored.contains("E004"));
        assert!(colored.contains("bad file"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: RegistrarError = io_error.into();

        assert!(matches!(error, RegistrarError::Logging(_)));
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::ConfigError::Message("broken".to_string());
        let error: RegistrarError = config_error.into();

        assert!(matches!(error, RegistrarError::Config(_)));
        assert!(error.message().contains("broken"));
    }

    #[test]
    fn test_is_std_error() {
        fn fails() -> Result<()> {
            Err(RegistrarError::logging("no subscriber"))
        }
        let error: Box<dyn Error> = Box::new(fails().unwrap_err());
        assert!(error.source().is_none());
    }
}
