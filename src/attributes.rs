//! Per-vertex attribute lists, one `<id>.txt` file per vertex.
//!
//! Attributes only enrich the analysis result; problems loading them never abort a run.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{error::AttributeWarning, graph::NodeId};

/// Attribute lists keyed by vertex id, plus the warnings raised while loading them.
#[derive(Debug, Default)]
pub struct Attributes {
    values: HashMap<NodeId, Vec<String>>,
    warnings: Vec<AttributeWarning>,
}

impl Attributes {
    /// Returns the attributes of a vertex, `None` if it wasn't requested.
    pub fn get(&self, id: &NodeId) -> Option<&[String]> {
        self.values.get(id).map(Vec::as_slice)
    }

    /// Returns the number of vertices with an attribute slot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn warnings(&self) -> &[AttributeWarning] {
        &self.warnings
    }

    /// The largest attribute count of any vertex, 0 when there are none.
    pub fn max_count(&self) -> usize {
        self.values.values().map(Vec::len).max().unwrap_or(0)
    }
}

/// Returns the attribute file path for a vertex.
pub fn attribute_path(dir: &Path, id: NodeId) -> PathBuf {
    dir.join(format!("{id}.txt"))
}

/// Loads the attribute file of every id in `ids` from `dir`.
///
/// Every id ends up with a slot. Missing, non UTF-8 or otherwise unreadable files leave the
/// slot empty and are recorded as warnings.
pub fn load<'a, I>(dir: &Path, ids: I) -> Attributes
where
    I: IntoIterator<Item = &'a NodeId>,
{
    let mut attributes = Attributes::default();

    for &id in ids {
        let path = attribute_path(dir, id);

        let values = match read_attribute_file(&path) {
            Ok(values) => values,
            Err(warning) => {
                warn!("{warning}");
                attributes.warnings.push(warning);
                Vec::new()
            }
        };

        attributes.values.insert(id, values);
    }

    info!(
        vertices = attributes.len(),
        warnings = attributes.warnings.len(),
        "loaded vertex attributes"
    );

    attributes
}

fn read_attribute_file(path: &Path) -> Result<Vec<String>, AttributeWarning> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.lines().map(|line| line.trim().to_owned()).collect()),
        Err(e) => {
            let path = path.to_path_buf();

            Err(match e.kind() {
                ErrorKind::NotFound => AttributeWarning::Missing { path },
                ErrorKind::InvalidData => AttributeWarning::Undecodable { path, source: e },
                _ => AttributeWarning::Unreadable { path, source: e },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_trimmed_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "  tall \nfriendly\n").unwrap();

        let attributes = load(dir.path(), &[1]);

        assert_eq!(
            attributes.get(&1),
            Some(&["tall".to_owned(), "friendly".to_owned()][..])
        );
        assert!(attributes.warnings().is_empty());
        assert_eq!(attributes.max_count(), 2);
    }

    #[test]
    fn load_missing_file_is_empty_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "x\n").unwrap();

        let attributes = load(dir.path(), &[1, 2]);

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get(&2), Some(&[][..]));
        assert_eq!(attributes.warnings().len(), 1);
        assert!(matches!(
            &attributes.warnings()[0],
            AttributeWarning::Missing { path } if path.ends_with("2.txt")
        ));
    }

    #[test]
    fn load_invalid_utf8_is_empty_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("3.txt"), [0x66, 0xff, 0xfe, 0x0a]).unwrap();

        let attributes = load(dir.path(), &[3]);

        assert_eq!(attributes.get(&3), Some(&[][..]));
        assert!(matches!(&attributes.warnings()[0], AttributeWarning::Undecodable { .. }));
        assert!(attributes.warnings()[0].path().ends_with("3.txt"));
    }

    #[test]
    fn load_directory_in_place_of_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("4.txt")).unwrap();

        let attributes = load(dir.path(), &[4]);

        assert_eq!(attributes.get(&4), Some(&[][..]));
        assert_eq!(attributes.warnings().len(), 1);
        assert!(!matches!(&attributes.warnings()[0], AttributeWarning::Missing { .. }));
    }

    #[test]
    fn load_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let attributes = load(dir.path(), &[]);

        assert!(attributes.is_empty());
        assert_eq!(attributes.max_count(), 0);
    }

    #[test]
    fn attribute_path_uses_id() {
        assert_eq!(
            attribute_path(Path::new("attrs"), 42),
            Path::new("attrs").join("42.txt")
        );
    }
}
