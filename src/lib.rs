pub mod aggregate;
pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod transform;
pub mod types;
