pub mod errors;
pub mod types;

pub use errors::{ConfigError, ExhibitError, PersistError};
pub use types::{Block, Color, Point, Rect};

pub type Result<T> = std::result::Result<T, ExhibitError>;
