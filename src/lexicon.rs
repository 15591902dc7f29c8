//! Display labels for vertices, read from `"<id> <label>"` lines.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use crate::{error::Error, graph::NodeId};

/// A mapping of vertex ids to display labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    labels: HashMap<NodeId, String>,
}

impl Lexicon {
    pub fn label(&self, id: &NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &str)> + '_ {
        self.labels.iter().map(|(id, label)| (id, label.as_str()))
    }
}

/// Reads a lexicon from a stream.
///
/// Blank lines and lines that don't split into exactly two tokens are skipped. A two token
/// line whose id isn't a non-negative integer is skipped with a warning. Later lines win over
/// earlier ones for the same id.
///
/// # Examples
///
/// ```
/// use pathscope::lexicon::read_lexicon;
///
/// let lexicon = read_lexicon("1 alice\n\n2 bob\n3 too many tokens\n".as_bytes()).unwrap();
///
/// assert_eq!(lexicon.len(), 2);
/// assert_eq!(lexicon.label(&2), Some("bob"));
/// ```
pub fn read_lexicon<R: BufRead>(reader: R) -> Result<Lexicon, Error> {
    let mut labels = HashMap::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let [id, label] = tokens.as_slice() else {
            if !tokens.is_empty() {
                debug!(line = n + 1, tokens = tokens.len(), "skipping lexicon line");
            }
            continue;
        };

        match id.parse::<NodeId>() {
            Ok(id) => {
                labels.insert(id, (*label).to_owned());
            }
            Err(e) => warn!(
                line = n + 1,
                id = *id,
                error = %e,
                "skipping lexicon line with invalid id"
            ),
        }
    }

    Ok(Lexicon { labels })
}

/// Opens and reads a lexicon file.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, Error> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    read_lexicon(BufReader::new(file))
}
