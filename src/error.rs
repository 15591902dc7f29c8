//! Error types shared across the crate.

use std::{io, path::PathBuf};

/// Errors that abort an analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edge-list line didn't hold exactly two non-negative integers.
    #[error("malformed edge on line {line}: {content:?}")]
    MalformedEdge {
        /// 1-based line number in the edge list.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },

    /// Regions must hold at least one vertex.
    #[error("region size must be at least 1")]
    InvalidRegionSize,

    /// A vertex was referenced that isn't part of the graph.
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(String),

    /// Reading from an already opened stream failed.
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// Opening, creating or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Non-fatal problems raised while loading per-vertex attribute files.
///
/// Each warning leaves the affected vertex with an empty attribute list.
#[derive(Debug, thiserror::Error)]
pub enum AttributeWarning {
    #[error("attribute file {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("attribute file {} is not valid UTF-8: {source}", path.display())]
    Undecodable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("attribute file {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AttributeWarning {
    /// Returns the path of the file the warning refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Missing { path }
            | Self::Undecodable { path, .. }
            | Self::Unreadable { path, .. } => path,
        }
    }
}
