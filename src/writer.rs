use log::{debug, warn};
use std::io::Write;

use crate::error::{AfMatchError, Result};
use crate::header::Header;
use crate::variant::VariantRecord;

/// Write `records` as CSV: the header columns first, then one row per record
/// with its raw field values in header order.
pub fn write_csv<W: Write>(
    wtr: W,
    header: &Header,
    records: &[VariantRecord],
) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(wtr);
    wtr.write_record(header.columns())?;
    for record in records {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export `records` to `output`, or to stdout when `output` is `-`.
///
/// A file left incomplete by a failed write is removed.
pub fn export_csv(output: &str, header: &Header, records: &[VariantRecord]) -> Result<()> {
    let csv_err = |e| AfMatchError::Csv {
        path: output.to_string(),
        source: e,
    };
    if output == "-" {
        let stdout = std::io::stdout();
        return write_csv(stdout.lock(), header, records).map_err(csv_err);
    }

    let file = std::fs::File::create(output).map_err(|e| AfMatchError::io(output, e))?;
    let result = write_csv(std::io::BufWriter::new(file), header, records).map_err(csv_err);
    match result {
        Ok(()) => {
            debug!("wrote {} rows to {}", records.len(), output);
            Ok(())
        }
        Err(e) => {
            if let Err(rm) = std::fs::remove_file(output) {
                warn!("could not remove incomplete output {}: {}", output, rm);
            }
            Err(e)
        }
    }
}
