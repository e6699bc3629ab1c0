use log::debug;
use rustc_hash::FxHashSet;
use std::io::BufRead;

use crate::error::{AfMatchError, Result};
use crate::records_iterator::open_vcf;

/// Marker that starts the column header line of a VCF.
pub const HEADER_MARKER: &str = "#CHROM";

/// The ordered column names of one VCF, taken from its `#CHROM` line.
///
/// Names are unique and always include `POS` and `INFO`; the indices of
/// those two columns are resolved once here so records can be read
/// positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
    pos_idx: usize,
    info_idx: usize,
}

impl Header {
    /// Build a header from column names, checking uniqueness and the
    /// presence of `POS` and `INFO`. `path` is only used in errors.
    pub fn new(columns: Vec<String>, path: &str) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for c in columns.iter() {
            if !seen.insert(c.as_str()) {
                return Err(AfMatchError::DuplicateColumn {
                    path: path.to_string(),
                    column: c.clone(),
                });
            }
        }
        let find = |name: &'static str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| AfMatchError::MissingColumn {
                    path: path.to_string(),
                    column: name,
                })
        };
        let pos_idx = find("POS")?;
        let info_idx = find("INFO")?;
        Ok(Header {
            columns,
            pos_idx,
            info_idx,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn pos_index(&self) -> usize {
        self.pos_idx
    }

    pub fn info_index(&self) -> usize {
        self.info_idx
    }
}

/// Parse a `#CHROM` line into column names. Returns `None` for any other line.
fn parse_header_line(line: &str) -> Option<Vec<String>> {
    if !line.starts_with(HEADER_MARKER) {
        return None;
    }
    let line = line.trim_end_matches(['\n', '\r']);
    let line = &line[1..];
    Some(line.split('\t').map(|s| s.to_string()).collect())
}

/// Scan `reader` up to and including the first `#CHROM` line.
///
/// Nothing after the header line is consumed.
pub fn read_header<R: BufRead>(reader: &mut R, path: &str) -> Result<Header> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| AfMatchError::io(path, e))?;
        if n == 0 {
            return Err(AfMatchError::MissingHeader {
                path: path.to_string(),
            });
        }
        if let Some(columns) = parse_header_line(&line) {
            debug!("{}: header has {} columns", path, columns.len());
            return Header::new(columns, path);
        }
    }
}

/// Open the compressed VCF at `path` and extract its header.
/// The file is closed before returning.
pub fn read_header_from_path(path: &str) -> Result<Header> {
    let mut reader = open_vcf(path)?;
    read_header(&mut reader, path)
}
