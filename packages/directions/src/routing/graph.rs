//! The road graph for a single route request. Intersections are stored in a
//! petgraph arena and addressed by NodeIndex, with a lookup from the ids
//! used by the map data. The synthetic start and end nodes are added when
//! the graph is created, using the reserved START_ID and END_ID.

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::{Directed, Graph};
use rustc_hash::FxHashMap;

use crate::common::config::Endpoint;
use crate::common::error::{Error, Result};
use crate::common::geodesy::metres_between;
use crate::common::graph_data::{EdgeData, END_ID, NodeData, START_ID, Way};

pub type Arena = Graph<NodeData, EdgeData, Directed, u32>;

/// Directed road graph between two endpoints. Parallel ways between the same
/// ordered pair of intersections are collapsed as they are added, only the
/// shortest is retained
#[derive(Debug, Clone)]
pub struct RoadGraph {
    graph: Arena,
    index: FxHashMap<i64, NodeIndex>,
    start: NodeIndex,
    end: NodeIndex,
    start_street: String,
    end_street: String,
}

impl RoadGraph {
    /// Create a new graph containing only the two endpoint nodes
    pub fn new(start: &Endpoint, end: &Endpoint) -> RoadGraph {
        let mut graph = Arena::new();
        let mut index = FxHashMap::<i64, NodeIndex>::default();

        let start_inx = graph.add_node(NodeData {
            id: START_ID,
            lat: start.lat,
            lon: start.lon,
        });
        index.insert(START_ID, start_inx);

        let end_inx = graph.add_node(NodeData {
            id: END_ID,
            lat: end.lat,
            lon: end.lon,
        });
        index.insert(END_ID, end_inx);

        RoadGraph {
            graph,
            index,
            start: start_inx,
            end: end_inx,
            start_street: start.street.clone(),
            end_street: end.street.clone(),
        }
    }

    /// Add an intersection to the graph. Ids must be unique, and the two
    /// reserved endpoint ids are always taken
    pub fn add_node(
        &mut self,
        id: i64,
        lat: f64,
        lon: f64,
    ) -> Result<NodeIndex> {
        if self.node_exists(id) {
            return Err(Error::DuplicateNode { id });
        }

        let inx = self.graph.add_node(NodeData { id, lat, lon });
        self.index.insert(id, inx);
        Ok(inx)
    }

    pub fn node_exists(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    /// Add a directed edge between two existing intersections. If an edge
    /// already joins the pair, it is only replaced when the new one is
    /// strictly shorter
    pub fn add_edge(
        &mut self,
        from: i64,
        to: i64,
        length: f64,
        street: &str,
    ) -> Result<EdgeIndex> {
        let src = self.lookup(from)?;
        let dst = self.lookup(to)?;

        if !length.is_finite() || length < 0.0 {
            return Err(Error::InvalidEdgeLength { from, to, length });
        }

        if let Some(existing) = self.graph.find_edge(src, dst) {
            if let Some(data) = self.graph.edge_weight_mut(existing) {
                if length < data.length {
                    data.length = length;
                    data.street = street.to_string();
                }
            }
            return Ok(existing);
        }

        Ok(self.graph.add_edge(
            src,
            dst,
            EdgeData {
                length,
                street: street.to_string(),
            },
        ))
    }

    /// Splice the endpoints into the graph. When the name of a way leaving
    /// `from` matches the street of the start address, the start node is
    /// joined to `from`; when it matches the street of the end address,
    /// `from` is joined to the end node. Lengths are straight-line distances
    pub fn add_critical_edge(&mut self, from: i64, way: &Way) -> Result<()> {
        let inx = self.lookup(from)?;

        if same_street(&way.name, &self.start_street) {
            let length = self.metres_between(self.start, inx);
            self.add_edge(START_ID, from, length, &way.name)?;
        }

        if same_street(&way.name, &self.end_street) {
            let length = self.metres_between(inx, self.end);
            self.add_edge(from, END_ID, length, &way.name)?;
        }

        Ok(())
    }

    /// Check whether a way should be offered to add_critical_edge
    pub fn is_critical(&self, way: &Way) -> bool {
        same_street(&way.name, &self.start_street)
            || same_street(&way.name, &self.end_street)
    }

    /// Resolve an id from the map data to its position in the arena
    pub fn lookup(&self, id: i64) -> Result<NodeIndex> {
        self.index
            .get(&id)
            .copied()
            .ok_or(Error::UnknownNode { id })
    }

    /// Retrieve the edge joining two intersections, if there is one
    pub fn edge(&self, from: i64, to: i64) -> Option<&EdgeData> {
        let src = self.index.get(&from)?;
        let dst = self.index.get(&to)?;
        let edge = self.graph.find_edge(*src, *dst)?;
        self.graph.edge_weight(edge)
    }

    fn metres_between(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        let a = &self.graph[a];
        let b = &self.graph[b];
        metres_between(a.lat, a.lon, b.lat, b.lon)
    }

    pub fn graph(&self) -> &Arena {
        &self.graph
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn end(&self) -> NodeIndex {
        self.end
    }

    pub fn start_street(&self) -> &str {
        &self.start_street
    }

    pub fn end_street(&self) -> &str {
        &self.end_street
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Street names from the map data and the geocoder differ in case only
fn same_street(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
