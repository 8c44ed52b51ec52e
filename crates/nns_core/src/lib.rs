pub mod error;
pub mod types;

pub use error::Error;
pub use types::{ArticleRecord, EntityFailure, ResultRow, ScreeningReport, SearchParameters};

pub type Result<T> = std::result::Result<T, Error>;
