pub mod analyzers;
pub mod boundary;
pub mod dataset;
pub mod error;
pub mod output;
pub mod regions;
pub mod server;
