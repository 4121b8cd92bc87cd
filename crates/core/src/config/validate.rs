use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - An explicit `tickets` list is not empty (omit the key for the defaults)
///
/// Ticket fields themselves are accepted as-is.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if matches!(&config.tickets, Some(tickets) if tickets.is_empty()) {
        return Err(ConfigError::ValidationError(
            "tickets cannot be an empty list".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::CreateTicketRequest;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_fields_are_fine() {
        let config = Config {
            tickets: Some(vec![CreateTicketRequest::new("", "")]),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_ticket_list_fails() {
        let config = Config {
            tickets: Some(vec![]),
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
