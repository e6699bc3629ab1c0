use rust_htslib::bgzf;
use std::io::{BufRead, BufReader};

use crate::error::{AfMatchError, Result};
use crate::header::Header;
use crate::variant::VariantRecord;

/// Open a VCF for line reading. htslib decompresses BGZF and plain gzip
/// and passes uncompressed text through unchanged.
pub fn open_vcf(path: &str) -> Result<BufReader<bgzf::Reader>> {
    let reader = bgzf::Reader::from_path(path).map_err(|e| AfMatchError::Open {
        path: path.to_string(),
        source: e,
    })?;
    Ok(BufReader::new(reader))
}

/// Iterates the data rows of a VCF from the start of the stream.
///
/// Lines starting with `#` (meta lines and the `#CHROM` line) and blank
/// lines are skipped. Iteration stops after the first error.
pub struct RecordsIterator<'h, R> {
    reader: R,
    header: &'h Header,
    path: String,
    line_no: usize,
    buf: String,
    done: bool,
}

impl<'h, R: BufRead> RecordsIterator<'h, R> {
    pub fn new(reader: R, header: &'h Header, path: &str) -> Self {
        RecordsIterator {
            reader,
            header,
            path: path.to_string(),
            line_no: 0,
            buf: String::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordsIterator<'_, R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_no += 1;
                    let line = self.buf.trim_end_matches(['\n', '\r']);
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    let rec = VariantRecord::parse(line, self.header, self.line_no, &self.path);
                    self.done = rec.is_err();
                    return Some(rec);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(AfMatchError::io(&self.path, e)));
                }
            }
        }
        None
    }
}

/// Read every data row of the VCF at `path`. The file is re-opened and read
/// from the start, so it does not matter that the header was already read.
pub fn read_records(path: &str, header: &Header) -> Result<Vec<VariantRecord>> {
    let reader = open_vcf(path)?;
    RecordsIterator::new(reader, header, path).collect()
}
