//! Shortest path length distribution over every ordered pair of vertices.

use std::{
    collections::{btree_map, BTreeMap},
    fmt::Debug,
    hash::Hash,
};

use tracing::info;

use crate::{compute, edge::Edge, graph::Graph};

/// The conventional "six degrees of separation" bound.
pub const SIX_DEGREES: u32 = 6;

/// Occurrence counts of shortest path lengths, ordered by length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathLengthHistogram {
    counts: BTreeMap<u32, u64>,
}

impl PathLengthHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more path of the given length.
    pub fn increment(&mut self, length: u32) {
        *self.counts.entry(length).or_insert(0) += 1;
    }

    /// Returns how many paths have the given length.
    pub fn count(&self, length: u32) -> u64 {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Returns the number of recorded paths across all lengths.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the longest recorded length, `None` when empty.
    pub fn max_length(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(length, count)| (*length, *count))
    }

    /// Adds every count in `other` to this histogram.
    pub fn merge(&mut self, other: &Self) {
        for (length, count) in other.iter() {
            *self.counts.entry(length).or_insert(0) += count;
        }
    }
}

impl<'a> IntoIterator for &'a PathLengthHistogram {
    type Item = (&'a u32, &'a u64);
    type IntoIter = btree_map::Iter<'a, u32, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// The histogram of shortest path lengths over all ordered, reachable pairs of distinct
/// vertices, along with the sums the mean is derived from.
///
/// Every connected unordered pair `{a, b}` is seen twice, once from each end, so the
/// histogram counts are always even and the mean matches the unordered one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    histogram: PathLengthHistogram,
    total_distance: u64,
    pair_count: u64,
}

impl Distribution {
    /// Collects the distribution on the calling thread.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::distribution::Distribution;
    /// use pathscope::edge::Edge;
    /// use pathscope::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]);
    /// let distribution = Distribution::collect(&graph);
    ///
    /// assert_eq!(distribution.histogram().count(1), 6);
    /// assert_eq!(distribution.total_distance(), 20);
    /// assert_eq!(distribution.mean(), 20.0 / 12.0);
    /// ```
    pub fn collect<T>(graph: &Graph<T>) -> Self
    where
        Edge<T>: Eq + Hash,
        T: Copy + Eq + Hash + Ord + Debug,
    {
        Self::collect_with_threads(graph, 1)
    }

    /// Collects the distribution, spreading the per-vertex searches over `num_threads`
    /// workers. The result doesn't depend on the thread count.
    pub fn collect_with_threads<T>(graph: &Graph<T>, num_threads: usize) -> Self
    where
        Edge<T>: Eq + Hash,
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let sources: Vec<usize> = (0..graph.vertex_count()).collect();

        let partials = compute::for_each_source(
            graph.adjacency(),
            &sources,
            num_threads,
            Distribution::default,
            |acc, source, levels| {
                for (target, level) in levels.iter().enumerate() {
                    if target == source {
                        continue;
                    }

                    if let Some(hops) = level {
                        acc.record(*hops);
                    }
                }
            },
        );

        let mut distribution = Distribution::default();
        for partial in &partials {
            distribution.merge(partial);
        }

        info!(
            pairs = distribution.pair_count,
            mean = distribution.mean(),
            "collected path length distribution"
        );

        distribution
    }

    pub fn histogram(&self) -> &PathLengthHistogram {
        &self.histogram
    }

    /// The sum of all counted path lengths.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// The number of counted ordered pairs.
    pub fn pair_count(&self) -> u64 {
        self.pair_count
    }

    /// The mean shortest path length, 0.0 when no pair is reachable.
    pub fn mean(&self) -> f64 {
        if self.pair_count == 0 {
            return 0.0;
        }

        self.total_distance as f64 / self.pair_count as f64
    }

    /// The mean over the pairs whose length doesn't exceed `max_len`, 0.0 when there are none.
    pub fn mean_within(&self, max_len: u32) -> f64 {
        let (sum, count) = self
            .histogram
            .iter()
            .filter(|(length, _)| *length <= max_len)
            .fold((0u64, 0u64), |(sum, count), (length, n)| {
                (sum + u64::from(length) * n, count + n)
            });

        if count == 0 {
            return 0.0;
        }

        sum as f64 / count as f64
    }

    /// The share of counted pairs whose length doesn't exceed `max_len`, 0.0 when there are
    /// no pairs.
    pub fn fraction_within(&self, max_len: u32) -> f64 {
        if self.pair_count == 0 {
            return 0.0;
        }

        let within: u64 = self
            .histogram
            .iter()
            .filter(|(length, _)| *length <= max_len)
            .map(|(_, n)| n)
            .sum();

        within as f64 / self.pair_count as f64
    }

    /// Returns whether the mean path length is within `max_len` hops, e.g. [`SIX_DEGREES`].
    ///
    /// A graph without any reachable pair doesn't qualify.
    pub fn is_small_world(&self, max_len: u32) -> bool {
        self.pair_count > 0 && self.mean() <= f64::from(max_len)
    }

    //
    // Private
    //

    fn record(&mut self, hops: u32) {
        self.histogram.increment(hops);
        self.total_distance += u64::from(hops);
        self.pair_count += 1;
    }

    fn merge(&mut self, other: &Self) {
        self.histogram.merge(&other.histogram);
        self.total_distance += other.total_distance;
        self.pair_count += other.pair_count;
    }
}
