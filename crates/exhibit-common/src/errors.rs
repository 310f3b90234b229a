use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by a save endpoint.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to serialize arrangement: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("save endpoint i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExhibitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.top_block_percentage".into());
        assert_eq!(
            err.to_string(),
            "config validation error: layout.top_block_percentage"
        );
    }

    #[test]
    fn persist_error_display() {
        let err = PersistError::Rejected("record 7 is locked".into());
        assert_eq!(err.to_string(), "save rejected: record 7 is locked");
    }

    #[test]
    fn persist_error_from_serde() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PersistError = json_err.into();
        assert!(matches!(err, PersistError::Serialize(_)));
    }

    #[test]
    fn exhibit_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ExhibitError = config_err.into();
        assert!(matches!(err, ExhibitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn exhibit_error_from_persist() {
        let persist_err = PersistError::Rejected("offline".into());
        let err: ExhibitError = persist_err.into();
        assert!(matches!(err, ExhibitError::Persist(_)));
        assert_eq!(err.to_string(), "save rejected: offline");
    }

    #[test]
    fn exhibit_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ExhibitError = io_err.into();
        assert!(matches!(err, ExhibitError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn exhibit_error_other_variants() {
        let err = ExhibitError::Script("unknown event".into());
        assert_eq!(err.to_string(), "script error: unknown event");

        let err = ExhibitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
