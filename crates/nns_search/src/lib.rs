pub mod input;
pub mod keywords;
pub mod pipeline;
pub mod providers;
pub mod query;

pub use pipeline::ScreeningPipeline;
pub use providers::newsapi::NewsApiClient;
pub use providers::NewsSearch;

pub mod prelude {
    pub use super::providers::NewsSearch;
    pub use super::ScreeningPipeline;
    pub use nns_core::{Error, Result};
}
