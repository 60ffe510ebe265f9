//! Plain-text pattern files.
//!
//! One line per row, one character per column, zero-based from the top-left.
//! Every character other than a space is a live cell. Lines may have any
//! length; there is no header, comment or run-length syntax.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::sparselife::{Coordinate, World};

pub const PATTERN_EXTENSION: &str = "life";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("pattern is not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatternError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Live coordinates described by `text`.
pub fn parse_cells(text: &str) -> impl Iterator<Item = Coordinate> + '_ {
    text.lines().enumerate().flat_map(|(row, line)| {
        // `lines` keeps a lone trailing `\r` on the final line.
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.chars()
            .enumerate()
            .filter(|&(_, ch)| ch != ' ')
            .map(move |(col, _)| Coordinate::new(col as i64, row as i64))
    })
}

/// Generation-0 world holding the cells described by `text`.
pub fn parse_world(text: &str) -> World {
    parse_cells(text).collect()
}

/// Read and parse the pattern file at `path`.
///
/// Fails without producing a world if the path is missing, is not a regular
/// file, or cannot be read. Bytes that are not valid UTF-8 decode to U+FFFD
/// and so count as live cells.
pub fn load_world(path: impl AsRef<Path>) -> Result<World, PatternError> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| PatternError::io(path, e))?;
    if !meta.is_file() {
        return Err(PatternError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| PatternError::io(path, e))?;
    let world = parse_world(&String::from_utf8_lossy(&bytes));
    info!(
        path = %path.display(),
        cells = world.population(),
        "loaded pattern"
    );
    Ok(world)
}

/// A directory of `<name>.life` pattern files.
#[derive(Clone, Debug)]
pub struct SampleLibrary {
    dir: PathBuf,
}

impl SampleLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PATTERN_EXTENSION}"))
    }

    /// Sorted names of the samples in the library.
    pub fn list(&self) -> Result<Vec<String>, PatternError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| PatternError::io(&self.dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| PatternError::io(&self.dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PATTERN_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        debug!(dir = %self.dir.display(), samples = names.len(), "listed samples");
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<World, PatternError> {
        load_world(self.path_for(name))
    }
}
