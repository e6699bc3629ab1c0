//! Allele-frequency filtering of parsed records.

use log::{debug, info};
use std::fmt;

use crate::error::{AfMatchError, Result};
use crate::header::{read_header_from_path, Header};
use crate::records_iterator::read_records;
use crate::variant::VariantRecord;

/// A validated AF cutoff: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AfThreshold(f64);

impl AfThreshold {
    pub const DEFAULT: AfThreshold = AfThreshold(0.01);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AfMatchError::InvalidThreshold(value));
        }
        Ok(AfThreshold(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strict comparison; an AF equal to the threshold does not pass.
    pub fn passes(&self, af: f64) -> bool {
        af < self.0
    }
}

impl Default for AfThreshold {
    fn default() -> Self {
        AfThreshold::DEFAULT
    }
}

impl fmt::Display for AfThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// True when the record has a numeric AF below `threshold`.
/// Records without an AF, or with one that does not parse, never pass.
pub fn passes_af(record: &VariantRecord, header: &Header, threshold: AfThreshold) -> bool {
    record.af(header).is_some_and(|af| threshold.passes(af))
}

/// Keep the records passing [`passes_af`], in their original order.
pub fn filter_by_af(
    records: Vec<VariantRecord>,
    header: &Header,
    threshold: AfThreshold,
) -> Vec<VariantRecord> {
    records
        .into_iter()
        .filter(|r| passes_af(r, header, threshold))
        .collect()
}

/// A VCF read in full and reduced to its low-AF records.
#[derive(Debug)]
pub struct FilteredVcf {
    pub header: Header,
    /// Data rows read before filtering.
    pub total: usize,
    pub records: Vec<VariantRecord>,
}

/// Extract the header of `path`, read all of its rows and keep those with
/// AF below `threshold`.
pub fn read_filtered(path: &str, threshold: AfThreshold) -> Result<FilteredVcf> {
    let header = read_header_from_path(path)?;
    let records = read_records(path, &header)?;
    let total = records.len();
    let records = filter_by_af(records, &header, threshold);
    debug!(
        "{}: {} of {} records excluded by AF filter",
        path,
        total - records.len(),
        total
    );
    info!(
        "{}: {} of {} records have AF < {}",
        path,
        records.len(),
        total,
        threshold
    );
    Ok(FilteredVcf {
        header,
        total,
        records,
    })
}
