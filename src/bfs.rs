//! Breadth-first traversal over the graph's index-based adjacency lists.

use std::collections::VecDeque;

/// Hop counts from one source, indexed like the adjacency lists. `None` marks vertices the
/// source can't reach; the source itself holds `Some(0)`.
pub(crate) type Levels = Vec<Option<u32>>;

/// Fills `levels` with the hop count from `source` to every vertex.
///
/// Both buffers are cleared first so a worker can reuse them across sources without
/// reallocating.
pub(crate) fn levels_into(
    adjacency: &[Vec<usize>],
    source: usize,
    levels: &mut Levels,
    queue: &mut VecDeque<usize>,
) {
    levels.clear();
    levels.resize(adjacency.len(), None);
    queue.clear();

    levels[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        // Every queued vertex has been assigned a level before being pushed.
        let next = levels[current].map_or(0, |level| level + 1);

        for &neighbour in &adjacency[current] {
            if levels[neighbour].is_none() {
                levels[neighbour] = Some(next);
                queue.push_back(neighbour);
            }
        }
    }
}

/// Allocating convenience wrapper around [`levels_into`].
pub(crate) fn levels(adjacency: &[Vec<usize>], source: usize) -> Levels {
    let mut levels = Vec::with_capacity(adjacency.len());
    let mut queue = VecDeque::new();
    levels_into(adjacency, source, &mut levels, &mut queue);

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1 - 2 - 3    4 - 5
    fn two_components() -> Vec<Vec<usize>> {
        vec![vec![1], vec![0, 2], vec![1, 3], vec![2], vec![5], vec![4]]
    }

    #[test]
    fn levels_along_a_chain() {
        let adjacency = two_components();

        assert_eq!(
            levels(&adjacency, 0),
            vec![Some(0), Some(1), Some(2), Some(3), None, None]
        );
    }

    #[test]
    fn levels_stop_at_component_boundary() {
        let adjacency = two_components();

        assert_eq!(
            levels(&adjacency, 5),
            vec![None, None, None, None, Some(1), Some(0)]
        );
    }

    #[test]
    fn levels_take_the_shortest_route() {
        // A square with a tail: 0-1, 1-2, 2-3, 3-0, 2-4.
        let adjacency = vec![vec![1, 3], vec![0, 2], vec![1, 3, 4], vec![2, 0], vec![2]];

        assert_eq!(
            levels(&adjacency, 0),
            vec![Some(0), Some(1), Some(2), Some(1), Some(3)]
        );
    }

    #[test]
    fn self_loop_is_ignored() {
        let adjacency = vec![vec![0, 1], vec![0]];

        assert_eq!(levels(&adjacency, 0), vec![Some(0), Some(1)]);
    }

    #[test]
    fn buffers_are_reset_between_sources() {
        let adjacency = two_components();
        let mut levels = Vec::new();
        let mut queue = VecDeque::new();

        levels_into(&adjacency, 0, &mut levels, &mut queue);
        levels_into(&adjacency, 4, &mut levels, &mut queue);

        assert_eq!(levels, vec![None, None, None, None, Some(0), Some(1)]);
        assert!(queue.is_empty());
    }
}
