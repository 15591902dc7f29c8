//! Flat text dumps of the computed structures.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{distribution::Distribution, error::Error, region::RegionMatrix};

/// Writes one `path length L: count` line per histogram bucket, shortest first, followed by
/// the mean with two decimals.
///
/// # Examples
///
/// ```
/// use pathscope::distribution::Distribution;
/// use pathscope::edge::Edge;
/// use pathscope::graph::Graph;
/// use pathscope::report::write_distribution;
///
/// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3)]);
/// let mut out = Vec::new();
/// write_distribution(&mut out, &Distribution::collect(&graph)).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "path length 1: 4\npath length 2: 2\naverage shortest path length: 1.33\n"
/// );
/// ```
pub fn write_distribution<W: Write>(writer: &mut W, distribution: &Distribution) -> io::Result<()> {
    for (length, count) in distribution.histogram().iter() {
        writeln!(writer, "path length {length}: {count}")?;
    }
    writeln!(writer, "average shortest path length: {:.2}", distribution.mean())
}

/// Writes one `Region i to Region j: value` line per ordered region pair, row by row, with
/// 1-based region numbers and four decimals.
pub fn write_region_matrix<W: Write>(writer: &mut W, matrix: &RegionMatrix) -> io::Result<()> {
    let n = matrix.len();

    for i in 0..n {
        for j in 0..n {
            writeln!(
                writer,
                "Region {} to Region {}: {:.4}",
                i + 1,
                j + 1,
                matrix.get(i, j)
            )?;
        }
    }

    Ok(())
}

/// Creates (or truncates) `path` and writes the region matrix dump to it.
pub fn save_region_matrix(path: &Path, matrix: &RegionMatrix) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    write_region_matrix(&mut writer, matrix)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(path, e))
}
