//! A module for working with undirected edges.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A pair of vertices joined by an undirected edge.
///
/// The `source`-`target` naming only records the order the endpoints were given in, which
/// decides the order in which new vertices enter a [`Graph`](crate::graph::Graph). Two edges
/// with swapped endpoints are equal and hash identically.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert_eq!(edge, Edge::new(2, 1));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the second endpoint.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether the edge touches the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    ///
    /// assert!(edge.contains(&1));
    /// assert!(!edge.contains(&3));
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Returns whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, target): (T, T)) -> Self {
        Self::new(source, target)
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = (&self.source, &self.target);

        // Hash the smaller endpoint first so (a, b) and (b, a) collide.
        match a.cmp(b) {
            Ordering::Greater => {
                b.hash(state);
                a.hash(state);
            }
            _ => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}
