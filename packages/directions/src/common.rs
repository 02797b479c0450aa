//! Types and helpers which are shared by the loading, routing and narration
//! stages of the pipeline.

pub mod bbox;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod graph_data;
