pub mod error;
pub mod fetcher;
pub mod result;

pub use error::FetchError;
pub use fetcher::MapFetcher;
pub use result::FetchOutcome;
