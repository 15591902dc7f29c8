//! Configuration for an analysis run.

use std::path::PathBuf;

use crate::region::DEFAULT_REGION_SIZE;

/// Everything an analysis run needs to know, passed explicitly to [`run`](crate::analysis::run).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// The edge-list file.
    pub links: PathBuf,
    /// Where to write the region matrix dump, skipped when `None`.
    pub output: Option<PathBuf>,
    /// Maximum number of vertices per region.
    pub region_size: usize,
    /// Worker threads for the breadth-first searches.
    pub threads: usize,
    /// Optional `"<id> <label>"` file.
    pub lexicon: Option<PathBuf>,
    /// Optional directory of `<id>.txt` attribute files.
    pub attributes: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Creates a configuration for `links` with every other setting at its default.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::config::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::new("links.txt").with_region_size(50);
    ///
    /// assert_eq!(config.region_size, 50);
    /// assert_eq!(config.threads, 1);
    /// assert!(config.output.is_none());
    /// ```
    pub fn new(links: impl Into<PathBuf>) -> Self {
        Self {
            links: links.into(),
            output: None,
            region_size: DEFAULT_REGION_SIZE,
            threads: 1,
            lexicon: None,
            attributes: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_region_size(mut self, region_size: usize) -> Self {
        self.region_size = region_size;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_lexicon(mut self, lexicon: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(lexicon.into());
        self
    }

    pub fn with_attributes(mut self, attributes: impl Into<PathBuf>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }
}
