pub mod aggregate;
pub mod criteria;
pub mod delivery;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod table;

pub use error::PipelineError;
