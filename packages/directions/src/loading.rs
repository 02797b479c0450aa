//! This module focuses on retrieving the road network around a route request
//! from a postgres database, and using it to build the road graph.

pub mod network;
pub mod postgres;
