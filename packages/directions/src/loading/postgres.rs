//! The functions defined here can be used to read in details of all of the
//! intersections and ways required to represent the road network between
//! the two endpoints of a route request
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use sqlx::PgPool;
use tracing::debug;

use crate::common::bbox::BBox;
use crate::common::config::RouteRequest;
use crate::common::error::Result;
use crate::common::graph_data::{Way, unnamed_way};

/// Road class used for ways which carry neither a name nor a class
const UNKNOWN_HIGHWAY: &str = "road";

static BBOX_PLACEHOLDERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([
        "< min_lat >",
        "< min_lon >",
        "< max_lat >",
        "< max_lon >",
    ])
    .expect("Something went wrong while setting up aho-corasick")
});

/// Container for the raw output of the nodes SQL query
#[derive(sqlx::FromRow, Debug, Clone, Copy, PartialEq)]
pub struct NodeRow {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

/// Container for the raw output of the ways SQL query. A single way may be
/// known by several names, or by none at all
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct WayRow {
    pub src: i64,
    pub dst: i64,
    pub length: f64,
    pub names: Vec<String>,
    pub highway: Option<String>,
}

impl WayRow {
    /// Unpack the raw way data into candidate ways which can be offered to
    /// the graph. Every name gets its own candidate, so that any one of them
    /// can match the street of an endpoint. Unnamed ways are labelled by
    /// their road class instead
    pub fn candidates(&self) -> Vec<Way> {
        if self.names.is_empty() {
            let highway = self.highway.as_deref().unwrap_or(UNKNOWN_HIGHWAY);
            return vec![Way::new(self.length, unnamed_way(highway))];
        }

        self.names
            .iter()
            .map(|name| Way::new(self.length, name.as_str()))
            .collect()
    }
}

/// Fill in the bounding box placeholders of a SQL template
fn fill_bbox(template: &str, bbox: &BBox) -> String {
    let replace_with = [
        bbox.min_lat.to_string(),
        bbox.min_lon.to_string(),
        bbox.max_lat.to_string(),
        bbox.max_lon.to_string(),
    ];

    BBOX_PLACEHOLDERS.replace_all(template, &replace_with)
}

/// Generate a SQL query to read in every intersection inside the provided
/// bounding box
pub fn generate_nodes_query(bbox: &BBox) -> String {
    // This brings the query into the compiled code
    let nodes_base = include_str!("get_nodes.sql");

    fill_bbox(nodes_base, bbox)
}

/// Generate a SQL query to read in every way with both ends inside the
/// provided bounding box
pub fn generate_ways_query(bbox: &BBox) -> String {
    let ways_base = include_str!("get_ways.sql");

    fill_bbox(ways_base, bbox)
}

/// Executes the nodes SQL query and returns a vector of NodeRow
pub async fn load_nodes(
    pool: &PgPool,
    request: &RouteRequest,
) -> Result<Vec<NodeRow>> {
    let query = generate_nodes_query(&request.get_bounding_box());
    let rows: Vec<NodeRow> = sqlx::query_as(&query).fetch_all(pool).await?;
    debug!(count = rows.len(), "loaded intersections");
    Ok(rows)
}

/// Executes the ways SQL query and returns a vector of WayRow
pub async fn load_ways(
    pool: &PgPool,
    request: &RouteRequest,
) -> Result<Vec<WayRow>> {
    let query = generate_ways_query(&request.get_bounding_box());
    let rows: Vec<WayRow> = sqlx::query_as(&query).fetch_all(pool).await?;
    debug!(count = rows.len(), "loaded ways");
    Ok(rows)
}
