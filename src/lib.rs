//! Pathscope is a small toolkit for analysing shortest path lengths in undirected, unweighted
//! graphs read from plain edge lists.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which can be constructed
//! from [`Edge`](edge::Edge) instances or parsed from an edge list. From it, the
//! [`Distribution`](distribution::Distribution) of path lengths over every pair of vertices and
//! the [`RegionMatrix`](region::RegionMatrix) of mean path lengths between groups of vertices
//! can be computed.
//!
//! ```rust
//! use pathscope::distribution::Distribution;
//! use pathscope::parse::read_edges;
//! use pathscope::region::{partition, RegionMatrix};
//!
//! // A line topology: 1 - 2 - 3 - 4.
//! let graph = read_edges("1 2\n2 3\n3 4\n".as_bytes()).unwrap();
//!
//! let distribution = Distribution::collect(&graph);
//! assert_eq!(distribution.histogram().count(3), 2);
//! assert!((distribution.mean() - 1.667).abs() < 1e-3);
//!
//! // Group the vertices two by two, in the order they first appeared.
//! let regions = partition(graph.vertices(), 2).unwrap();
//! let matrix = RegionMatrix::compute(&graph, &regions).unwrap();
//!
//! println!("{}", matrix.as_matrix());
//! // ...outputs:
//! //  ┌         ┐
//! //  │ 0.5   2 │
//! //  │   2 0.5 │
//! //  └         ┘
//! ```

mod bfs;
mod compute;

pub mod analysis;
pub mod attributes;
pub mod config;
pub mod distribution;
pub mod edge;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod parse;
pub mod region;
pub mod report;

pub use error::Error;
