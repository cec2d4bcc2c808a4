//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot write field '{field}': site identity is immutable")]
    ImmutableWrite { field: &'static str },

    #[error("unknown site identity field: '{0}'")]
    UnknownField(String),

    #[error("site identity already installed")]
    AlreadyInstalled,

    #[error("resource not found: {id} ({location})")]
    ResourceNotFound { id: String, location: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn immutable_write_names_field() {
        let e = AppError::ImmutableWrite { field: "loginDesc" };
        assert!(e.to_string().contains("loginDesc"));
        assert!(e.to_string().contains("immutable"));
    }

    #[test]
    fn resource_not_found_display() {
        let e = AppError::ResourceNotFound {
            id: "images/logo.png".into(),
            location: "assets/images/logo.png".into(),
        };
        assert!(e.to_string().contains("images/logo.png"));
        assert!(e.to_string().contains("assets/images/logo.png"));
    }

    #[test]
    fn config_error_display() {
        let e = AppError::Config("missing field".into());
        assert!(e.to_string().contains("missing field"));
    }

    #[test]
    fn logger_error_display() {
        let e = AppError::Logger("already initialized".into());
        assert!(e.to_string().contains("already initialized"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        // satisfies std::error::Error trait
        let _: &dyn Error = &e;
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: AppError = json_err.into();
        assert!(e.to_string().starts_with("json error"));
    }
}
