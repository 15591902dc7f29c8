//! Reading graphs from edge-list text.
//!
//! Each non-blank line holds the two endpoints of one undirected edge as whitespace-separated
//! non-negative integers:
//!
//! ```text
//! 1 2
//! 2 3
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::info;

use crate::{
    edge::Edge,
    error::Error,
    graph::{Graph, NodeId},
};

/// Parses a single edge-list line, `None` unless it holds exactly two non-negative integers.
///
/// # Examples
///
/// ```
/// use pathscope::edge::Edge;
/// use pathscope::parse::parse_edge;
///
/// assert_eq!(parse_edge(" 4\t17 "), Some(Edge::new(4, 17)));
/// assert_eq!(parse_edge("4 17 9"), None);
/// assert_eq!(parse_edge("4 x"), None);
/// ```
pub fn parse_edge(line: &str) -> Option<Edge<NodeId>> {
    let mut tokens = line.split_whitespace();

    let source = tokens.next()?.parse().ok()?;
    let target = tokens.next()?.parse().ok()?;

    if tokens.next().is_some() {
        return None;
    }

    Some(Edge::new(source, target))
}

/// Builds a graph from an edge-list stream.
///
/// Blank lines are skipped. The first malformed line aborts the whole read with
/// [`Error::MalformedEdge`]; no partial graph is returned.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Graph<NodeId>, Error> {
    let mut graph = Graph::new();

    for (n, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        // A line that isn't UTF-8 can't hold two integers either.
        let line = String::from_utf8(bytes).map_err(|e| Error::MalformedEdge {
            line: n + 1,
            content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let edge = parse_edge(&line).ok_or_else(|| Error::MalformedEdge {
            line: n + 1,
            content: line.clone(),
        })?;

        graph.insert(edge);
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built graph"
    );

    Ok(graph)
}

/// Opens and reads an edge-list file.
pub fn load_edges(path: &Path) -> Result<Graph<NodeId>, Error> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    read_edges(BufReader::new(file))
}
