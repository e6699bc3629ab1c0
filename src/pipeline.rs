use log::{debug, info, warn};

use crate::error::Result;
use crate::filter::{read_filtered, AfThreshold};
use crate::header::read_header_from_path;
use crate::intersect::{intersect, PositionSet};
use crate::records_iterator::read_records;
use crate::writer::export_csv;

/// What to do with the matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Only count them.
    Count,
    /// Write them as CSV to a path, or stdout for `-`.
    Csv(String),
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// VCF whose records are reported.
    pub query_vcf: String,
    /// VCF filtered by AF to produce the positions of interest.
    pub reference_vcf: String,
    pub af_threshold: AfThreshold,
    pub output: OutputMode,
}

impl Config {
    /// Validates the threshold, so a bad value is reported before any file
    /// is opened.
    pub fn new(
        query_vcf: String,
        reference_vcf: String,
        af_threshold: f64,
        output: OutputMode,
    ) -> Result<Self> {
        Ok(Config {
            query_vcf,
            reference_vcf,
            af_threshold: AfThreshold::new(af_threshold)?,
            output,
        })
    }
}

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub reference_records: usize,
    /// Reference records with AF below the threshold.
    pub reference_passing: usize,
    /// Distinct positions among the passing reference records.
    pub positions: usize,
    pub query_records: usize,
    /// Query records at one of those positions.
    pub matched: usize,
}

/// Filter the reference VCF by AF, then report the query VCF records that
/// share a POS with a passing reference record.
///
/// Nothing is written unless both files were read without error.
pub fn run(config: &Config) -> Result<Summary> {
    let reference = read_filtered(&config.reference_vcf, config.af_threshold)?;
    let positions = PositionSet::from_records(&reference.records, &reference.header);
    debug!(
        "{}: {} distinct positions below AF {}",
        config.reference_vcf,
        positions.len(),
        config.af_threshold
    );

    let header = read_header_from_path(&config.query_vcf)?;
    let records = read_records(&config.query_vcf, &header)?;
    let query_records = records.len();
    if query_records == 0 {
        warn!("{}: no data rows after the header", config.query_vcf);
    }
    let matched = intersect(records, &header, &positions);
    info!(
        "{}: {} of {} records at low-AF positions",
        config.query_vcf,
        matched.len(),
        query_records
    );

    if let OutputMode::Csv(output) = &config.output {
        export_csv(output, &header, &matched)?;
    }

    Ok(Summary {
        reference_records: reference.total,
        reference_passing: reference.records.len(),
        positions: positions.len(),
        query_records,
        matched: matched.len(),
    })
}
