//! A module for running breadth-first searches from many sources, optionally over a pool of
//! worker threads.

use std::{
    collections::VecDeque,
    panic,
    sync::{Mutex, PoisonError},
    thread,
    time::Instant,
};

use tracing::debug;

use crate::bfs::{self, Levels};

const MIN_NUM_THREADS: usize = 1;
const MAX_NUM_THREADS: usize = 128;

/// Runs a breadth-first search from every index in `sources` and folds each result into a
/// per-worker accumulator.
///
/// `init` creates one accumulator per worker and `visit` receives the accumulator, the source
/// index and that source's levels. The accumulators are returned unmerged, in no particular
/// order; callers must combine them with an order-independent operation.
pub(crate) fn for_each_source<A, I, V>(
    adjacency: &[Vec<usize>],
    sources: &[usize],
    num_threads: usize,
    init: I,
    visit: V,
) -> Vec<A>
where
    A: Send,
    I: Fn() -> A + Sync,
    V: Fn(&mut A, usize, &Levels) + Sync,
{
    let start = Instant::now();
    let num_threads = num_threads
        .clamp(MIN_NUM_THREADS, MAX_NUM_THREADS)
        .min(sources.len().max(1));

    debug!(num_threads, sources = sources.len(), "starting source traversal");

    let accumulators = if num_threads == 1 {
        let counter = Mutex::new(0);
        vec![source_task(adjacency, sources, &counter, &init, &visit, start)]
    } else {
        let counter = Mutex::new(0);

        thread::scope(|scope| {
            let handles: Vec<_> = (0..num_threads)
                .map(|_| {
                    scope.spawn(|| source_task(adjacency, sources, &counter, &init, &visit, start))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        })
    };

    debug!(elapsed = ?start.elapsed(), "source traversal done");

    accumulators
}

/// The worker loop: grabs the next unprocessed source, exits once none are left.
fn source_task<A, I, V>(
    adjacency: &[Vec<usize>],
    sources: &[usize],
    counter: &Mutex<usize>,
    init: &I,
    visit: &V,
    start: Instant,
) -> A
where
    I: Fn() -> A,
    V: Fn(&mut A, usize, &Levels),
{
    // Each worker keeps its own accumulator and search buffers.
    let mut acc = init();
    let mut levels = Vec::with_capacity(adjacency.len());
    let mut queue = VecDeque::new();

    loop {
        let next = {
            let mut counter = counter.lock().unwrap_or_else(PoisonError::into_inner);
            let next = *counter;
            *counter += 1;
            next
        };

        let Some(&source) = sources.get(next) else {
            break;
        };

        if next % 100 == 0 {
            debug!(source = next, elapsed = ?start.elapsed(), "traversal progress");
        }

        bfs::levels_into(adjacency, source, &mut levels, &mut queue);
        visit(&mut acc, source, &levels);
    }

    acc
}
