pub mod aggregate;
pub mod cache;
pub mod cli;
pub mod config;
pub mod decide;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod product;
pub mod rank;
pub mod sites;

pub use error::{Result, ScoutError};
