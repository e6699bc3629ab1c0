//! Find the records of one VCF that sit at positions where another VCF has
//! a variant with allele frequency (INFO `AF`) below a threshold.
//!
//! ```no_run
//! use afmatch::{run, Config, OutputMode};
//!
//! let config = Config::new(
//!     "NA12878.chr21.slice.vcf.gz".to_string(),
//!     "gnomad.chr21.slice.vcf.gz".to_string(),
//!     0.01,
//!     OutputMode::Csv("filtered_NA12878.csv".to_string()),
//! )?;
//! let summary = run(&config)?;
//! println!("{}", summary.matched);
//! # Ok::<(), afmatch::AfMatchError>(())
//! ```

pub mod error;
pub mod filter;
pub mod header;
pub mod intersect;
pub mod pipeline;
pub mod records_iterator;
pub mod variant;
pub mod writer;

pub use error::{AfMatchError, Result};
pub use filter::{filter_by_af, passes_af, read_filtered, AfThreshold, FilteredVcf};
pub use header::{read_header, read_header_from_path, Header};
pub use intersect::{intersect, PositionSet};
pub use pipeline::{run, Config, OutputMode, Summary};
pub use records_iterator::{open_vcf, read_records, RecordsIterator};
pub use variant::{info_af, info_map, info_pairs, VariantRecord};
pub use writer::{export_csv, write_csv};
