// ============================================================
// Manifest Parser
// ============================================================
// Reads a '|'-separated manifest into a Manifest. Every
// non-empty line must hold exactly three fields:
//
//   id|speaker|text
//
// There is no escaping, so a '|' inside the transcript is a
// parse error rather than part of the text. Referenced files are
// not checked here; a missing array shows up when its index is
// loaded.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::domain::{Manifest, ManifestEntry};
use crate::error::{DatasetError, Result};

pub const FIELD_SEPARATOR: char = '|';

pub fn parse_manifest(path: &Path) -> Result<Manifest> {
    let io_err = |source| DatasetError::Io { path: path.to_path_buf(), source };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut entries = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [id, speaker, text] = fields[..] else {
            return Err(DatasetError::Manifest {
                path:  path.to_path_buf(),
                line:  i + 1,
                found: fields.len(),
            });
        };
        entries.push(ManifestEntry::new(id, speaker, text));
    }

    tracing::debug!("Parsed {} manifest entries from '{}'", entries.len(), path.display());
    Ok(Manifest::new(entries))
}
