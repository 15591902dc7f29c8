//! A module for partitioning vertices into regions and summarising path lengths between them.
//!
//! Regions coarsen the all-pairs analysis: instead of one value per vertex pair, the
//! [`RegionMatrix`] holds the mean shortest path length for every pair of regions.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use nalgebra::DMatrix;
use tracing::{debug, info};

use crate::{compute, edge::Edge, error::Error, graph::Graph};

/// The region size used when none is configured.
pub const DEFAULT_REGION_SIZE: usize = 300;

/// A contiguous run of vertices, in graph insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region<T> {
    index: usize,
    vertices: Vec<T>,
}

impl<T> Region<T> {
    /// Creates a region with the given position and vertices.
    pub fn new(index: usize, vertices: Vec<T>) -> Self {
        Self { index, vertices }
    }

    /// The 0-based position of the region in its partition.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Splits `vertices` into consecutive regions of `size` vertices, the last one possibly
/// shorter.
///
/// # Examples
///
/// ```
/// use pathscope::region::partition;
///
/// let regions = partition(&[1, 2, 3, 4, 5], 2).unwrap();
///
/// assert_eq!(regions.len(), 3);
/// assert_eq!(regions[2].vertices(), &[5]);
/// ```
pub fn partition<T: Clone>(vertices: &[T], size: usize) -> Result<Vec<Region<T>>, Error> {
    if size == 0 {
        return Err(Error::InvalidRegionSize);
    }

    let regions: Vec<Region<T>> = vertices
        .chunks(size)
        .enumerate()
        .map(|(index, chunk)| Region::new(index, chunk.to_vec()))
        .collect();

    for region in &regions {
        debug!(region = region.index() + 1, size = region.len(), "region");
    }
    info!(
        vertices = vertices.len(),
        regions = regions.len(),
        "partitioned vertices into regions"
    );

    Ok(regions)
}

/// Running sum of distances and number of reachable combinations for every region pair.
#[derive(Clone, Debug)]
struct CellTotals {
    n: usize,
    sums: Vec<u64>,
    counts: Vec<u64>,
}

impl CellTotals {
    fn new(n: usize) -> Self {
        Self {
            n,
            sums: vec![0; n * n],
            counts: vec![0; n * n],
        }
    }

    fn add(&mut self, i: usize, j: usize, hops: u32) {
        let cell = i * self.n + j;
        self.sums[cell] += u64::from(hops);
        self.counts[cell] += 1;
    }

    fn merge(&mut self, other: &Self) {
        for (sum, other) in self.sums.iter_mut().zip(&other.sums) {
            *sum += other;
        }
        for (count, other) in self.counts.iter_mut().zip(&other.counts) {
            *count += other;
        }
    }

    fn mean(&self, i: usize, j: usize) -> f64 {
        let cell = i * self.n + j;
        if self.counts[cell] == 0 {
            return 0.0;
        }

        self.sums[cell] as f64 / self.counts[cell] as f64
    }
}

/// A symmetric matrix of mean shortest path lengths between regions.
///
/// Cell `(i, j)` averages the distance of every reachable combination of a vertex from region
/// `i` with a vertex from region `j`. Unreachable combinations are left out and a cell without
/// any reachable combination is 0.0. On the diagonal each vertex is also paired with itself,
/// contributing a distance of 0.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionMatrix {
    matrix: DMatrix<f64>,
}

impl RegionMatrix {
    /// Computes the matrix on the calling thread.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    /// use pathscope::graph::Graph;
    /// use pathscope::region::{partition, RegionMatrix};
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]);
    /// let regions = partition(graph.vertices(), 2).unwrap();
    /// let matrix = RegionMatrix::compute(&graph, &regions).unwrap();
    ///
    /// assert_eq!(matrix.get(0, 0), 0.5);
    /// assert_eq!(matrix.get(0, 1), 2.0);
    /// assert_eq!(matrix.get(1, 0), 2.0);
    /// ```
    pub fn compute<T>(graph: &Graph<T>, regions: &[Region<T>]) -> Result<Self, Error>
    where
        Edge<T>: Eq + Hash,
        T: Copy + Eq + Hash + Ord + Debug,
    {
        Self::compute_with_threads(graph, regions, 1)
    }

    /// Computes the matrix, spreading the searches over `num_threads` workers.
    ///
    /// Every distinct vertex is searched from exactly once and its distances are reused for
    /// all the region pairs it takes part in as a source. The result doesn't depend on the
    /// thread count.
    pub fn compute_with_threads<T>(
        graph: &Graph<T>,
        regions: &[Region<T>],
        num_threads: usize,
    ) -> Result<Self, Error>
    where
        Edge<T>: Eq + Hash,
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let n = regions.len();

        // Graph indices of each region's vertices.
        let members: Vec<Vec<usize>> = regions
            .iter()
            .map(|region| {
                region
                    .vertices()
                    .iter()
                    .map(|vertex| {
                        graph
                            .index_of(vertex)
                            .ok_or_else(|| Error::UnknownVertex(format!("{vertex:?}")))
                    })
                    .collect::<Result<Vec<usize>, Error>>()
            })
            .collect::<Result<_, _>>()?;

        // The regions each source vertex belongs to. A plain partition yields exactly one per
        // vertex, but nothing stops a caller from passing overlapping regions.
        let mut source_regions: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, region) in members.iter().enumerate() {
            for &vertex in region {
                source_regions.entry(vertex).or_default().push(i);
            }
        }

        let mut sources: Vec<usize> = source_regions.keys().copied().collect();
        sources.sort_unstable();

        info!(regions = n, sources = sources.len(), "computing region path lengths");

        let partials = compute::for_each_source(
            graph.adjacency(),
            &sources,
            num_threads,
            || CellTotals::new(n),
            |totals, source, levels| {
                let Some(owners) = source_regions.get(&source) else {
                    return;
                };

                for &i in owners {
                    // Only the upper triangle is accumulated, the lower one is mirrored.
                    for (j, targets) in members.iter().enumerate().skip(i) {
                        for &target in targets {
                            if let Some(hops) = levels[target] {
                                totals.add(i, j, hops);
                            }
                        }
                    }
                }
            },
        );

        let mut totals = CellTotals::new(n);
        for partial in &partials {
            totals.merge(partial);
        }

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let mean = totals.mean(i, j);
                matrix[(i, j)] = mean;
                matrix[(j, i)] = mean;
            }
        }

        Ok(Self { matrix })
    }

    /// Returns the number of regions (rows and columns).
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the mean path length between regions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// Returns the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Checks the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.matrix == self.matrix.transpose()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    fn chain() -> Graph<u64> {
        Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)])
    }

    #[test]
    fn partition_even() {
        let regions = partition(&[1, 2, 3, 4], 2).unwrap();

        assert_eq!(regions, vec![Region::new(0, vec![1, 2]), Region::new(1, vec![3, 4])]);
    }

    #[test]
    fn partition_with_remainder() {
        let vertices: Vec<u64> = (0..7).collect();
        let regions = partition(&vertices, 3).unwrap();

        let sizes: Vec<usize> = regions.iter().map(Region::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(regions[2].vertices(), &[6]);
        assert_eq!(regions[2].index(), 2);
    }

    #[test]
    fn partition_keeps_order() {
        let regions = partition(&[9, 2, 7], 300).unwrap();

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].vertices(), &[9, 2, 7]);
    }

    #[test]
    fn partition_empty() {
        let regions = partition::<u64>(&[], 3).unwrap();

        assert!(regions.is_empty());
    }

    #[test]
    fn partition_zero_size() {
        assert!(matches!(partition(&[1, 2], 0), Err(Error::InvalidRegionSize)));
    }

    #[test]
    fn compute_chain() {
        let graph = chain();
        let regions = partition(graph.vertices(), 2).unwrap();
        let matrix = RegionMatrix::compute(&graph, &regions).unwrap();

        assert_eq!(matrix.as_matrix(), &dmatrix![0.5, 2.0; 2.0, 0.5]);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn compute_single_region_includes_self_pairs() {
        let graph = chain();
        let regions = partition(graph.vertices(), 4).unwrap();
        let matrix = RegionMatrix::compute(&graph, &regions).unwrap();

        // 20 over the 12 ordered pairs plus 4 self pairs.
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.get(0, 0), 20.0 / 16.0);
    }

    #[test]
    fn compute_disconnected_regions() {
        let graph = Graph::from_edges([Edge::new(1u64, 2), Edge::new(3, 4)]);
        let regions = partition(graph.vertices(), 2).unwrap();
        let matrix = RegionMatrix::compute(&graph, &regions).unwrap();

        assert_eq!(matrix.as_matrix(), &dmatrix![0.5, 0.0; 0.0, 0.5]);
    }

    #[test]
    fn compute_uneven_regions() {
        // 1 - 2 - 3 - 4 - 5 in regions [1, 2], [3, 4], [5].
        let mut graph = chain();
        graph.insert(Edge::new(4, 5));
        let regions = partition(graph.vertices(), 2).unwrap();
        let matrix = RegionMatrix::compute(&graph, &regions).unwrap();

        assert_eq!(matrix.len(), 3);
        // (1,5)=4, (2,5)=3.
        assert_eq!(matrix.get(0, 2), 3.5);
        assert_eq!(matrix.get(2, 0), 3.5);
        // (5,5)=0 only.
        assert_eq!(matrix.get(2, 2), 0.0);
        // (3,5)=2, (4,5)=1.
        assert_eq!(matrix.get(1, 2), 1.5);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn compute_with_threads_matches_single_thread() {
        let edges: Vec<Edge<u64>> = (0..40).map(|i| Edge::new(i, (i * 7 + 3) % 41)).collect();
        let graph = Graph::from_edges(edges);
        let regions = partition(graph.vertices(), 6).unwrap();

        let expected = RegionMatrix::compute(&graph, &regions).unwrap();
        for num_threads in [2, 3, 8] {
            assert_eq!(
                RegionMatrix::compute_with_threads(&graph, &regions, num_threads).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn compute_no_regions() {
        let matrix = RegionMatrix::compute(&chain(), &[]).unwrap();

        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }

    #[test]
    fn compute_unknown_vertex() {
        let regions = vec![Region::new(0, vec![1, 99])];

        assert!(matches!(
            RegionMatrix::compute(&chain(), &regions),
            Err(Error::UnknownVertex(vertex)) if vertex == "99"
        ));
    }

    #[test]
    fn cell_totals_mean() {
        let mut totals = CellTotals::new(2);
        totals.add(0, 1, 2);
        totals.add(0, 1, 3);

        let mut other = CellTotals::new(2);
        other.add(0, 1, 1);
        totals.merge(&other);

        assert_eq!(totals.mean(0, 1), 2.0);
        assert_eq!(totals.mean(1, 1), 0.0);
    }
}
