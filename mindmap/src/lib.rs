// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export the pipeline for convenience
pub use mindmap_client::{FetchError, FetchOutcome, MapFetcher};
pub use mindmap_core::{
    EndpointTable, InputCategory, MapResult, Node, classify, generate_mock,
};
