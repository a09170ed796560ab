use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuinielaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Missing field '{field}' in response from {endpoint}")]
    MissingFieldError { field: String, endpoint: String },

    #[error("Invalid field '{field}': {reason}")]
    InvalidFieldError { field: String, reason: String },

    #[error("Gist update failed with HTTP {status}: {message}")]
    PublishError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuinielaError {
    pub fn missing_field(field: &str, endpoint: &str) -> Self {
        Self::MissingFieldError {
            field: field.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::MissingConfigError { .. }
                | Self::InvalidConfigValueError { .. }
        )
    }

    /// Short message meant for the terminal, without transport internals.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => "The request timed out".to_string(),
            Self::ApiError(e) if e.is_connect() => "Could not connect to the server".to_string(),
            Self::ApiError(_) => "Communication with the remote API failed".to_string(),
            Self::HttpStatusError { status, .. } => {
                format!("The lottery service answered with HTTP {}", status)
            }
            Self::MissingFieldError { field, .. } => match field.as_str() {
                "fecha" => "Could not obtain the date of the next draw".to_string(),
                "partidos" => "Could not obtain the Quiniela match list".to_string(),
                other => format!("The response did not contain '{}'", other),
            },
            Self::PublishError { status, .. } => format!("Gist update failed (HTTP {})", status),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity or raise --timeout-seconds",
            Self::HttpStatusError { .. } => {
                "The lottery service may be blocking the request; try again later"
            }
            Self::MissingFieldError { .. } | Self::InvalidFieldError { .. } => {
                "No upcoming draw is published yet, or the response format changed"
            }
            Self::PublishError { status: 401, .. } | Self::PublishError { status: 403, .. } => {
                "Verify GIST_UPDATE_TOKEN and that it has the 'gist' scope"
            }
            Self::PublishError { status: 404, .. } => {
                "Verify GIST_ID and that the token owns that Gist"
            }
            Self::PublishError { .. } => "Verify GIST_ID and GIST_UPDATE_TOKEN",
            Self::IoError(_) => "Check that the output directory is writable",
            Self::SerializationError(_) => "The upstream payload could not be encoded as JSON",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => "Run with --help to review the options",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuinielaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_messages() {
        let err = QuinielaError::missing_field("fecha", "http://localhost/proximos");
        assert_eq!(
            err.to_string(),
            "Missing field 'fecha' in response from http://localhost/proximos"
        );
        assert_eq!(
            err.user_friendly_message(),
            "Could not obtain the date of the next draw"
        );
    }

    #[test]
    fn test_publish_error_suggestions() {
        let unauthorized = QuinielaError::PublishError {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert!(unauthorized.recovery_suggestion().contains("GIST_UPDATE_TOKEN"));

        let not_found = QuinielaError::PublishError {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(not_found.recovery_suggestion().contains("GIST_ID"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(QuinielaError::MissingConfigError {
            field: "gist_token".to_string()
        }
        .is_config_error());
        assert!(!QuinielaError::missing_field("partidos", "x").is_config_error());
    }
}
