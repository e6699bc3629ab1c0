use rustc_hash::FxHashMap;

use crate::error::{AfMatchError, Result};
use crate::header::Header;

/// INFO key holding the allele frequency.
pub const AF_KEY: &str = "AF";

/// One data row of a VCF, split on tab.
///
/// A record always has exactly one field per column of the [`Header`] it was
/// parsed with; the shape is checked in [`VariantRecord::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    line: usize,
    fields: Vec<String>,
}

impl VariantRecord {
    /// Parse a data line (without its trailing newline). `line` is the
    /// 1-based line number within the file and `path` is used in errors.
    pub fn parse(text: &str, header: &Header, line: usize, path: &str) -> Result<Self> {
        let fields: Vec<String> = text.split('\t').map(|s| s.to_string()).collect();
        if fields.len() != header.len() {
            return Err(AfMatchError::RowShape {
                path: path.to_string(),
                line,
                expected: header.len(),
                found: fields.len(),
            });
        }
        Ok(VariantRecord { line, fields })
    }

    /// Line number of this record in its source file.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field value for a column name, if the header has that column.
    pub fn get<'a>(&'a self, header: &Header, column: &str) -> Option<&'a str> {
        header
            .columns()
            .iter()
            .position(|c| c == column)
            .map(|i| self.fields[i].as_str())
    }

    pub fn pos<'a>(&'a self, header: &Header) -> &'a str {
        &self.fields[header.pos_index()]
    }

    pub fn info<'a>(&'a self, header: &Header) -> &'a str {
        &self.fields[header.info_index()]
    }

    /// Allele frequency from the INFO column. See [`info_af`].
    pub fn af(&self, header: &Header) -> Option<f64> {
        info_af(self.info(header))
    }
}

/// Iterate the `key=value` entries of an INFO string.
///
/// Each entry is split on its first `=`, so a value may itself contain `=`.
/// Flag entries (no `=`) are skipped.
pub fn info_pairs(info: &str) -> impl Iterator<Item = (&str, &str)> {
    info.split(';').filter_map(|entry| entry.split_once('='))
}

/// Key to value map of an INFO string. A repeated key keeps its last value.
pub fn info_map(info: &str) -> FxHashMap<&str, &str> {
    info_pairs(info).collect()
}

/// The numeric `AF` value of an INFO string.
///
/// `None` when there is no `AF` key or its value does not parse as a float.
/// Multi-allelic values such as `AF=0.1,0.2` do not parse and give `None`.
pub fn info_af(info: &str) -> Option<f64> {
    info_map(info).get(AF_KEY)?.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> Header {
        Header::new(
            ["CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            "test.vcf.gz",
        )
        .unwrap()
    }

    #[test]
    fn test_parse_record() {
        let h = header();
        let rec =
            VariantRecord::parse("chr21\t100\trs1\tA\tG\t50\tPASS\tNS=3;AF=0.005;DB", &h, 4, "t")
                .unwrap();
        assert_eq!(rec.pos(&h), "100");
        assert_eq!(rec.info(&h), "NS=3;AF=0.005;DB");
        assert_eq!(rec.get(&h, "ID"), Some("rs1"));
        assert_eq!(rec.get(&h, "SAMPLE"), None);
        assert_eq!(rec.line(), 4);
        assert_eq!(rec.af(&h), Some(0.005));
    }

    #[test]
    fn test_row_shape_short() {
        let h = header();
        let err = VariantRecord::parse("chr21\t100\t.\tA", &h, 12, "short.vcf.gz").unwrap_err();
        match err {
            AfMatchError::RowShape {
                path,
                line,
                expected,
                found,
            } => {
                assert_eq!(path, "short.vcf.gz");
                assert_eq!(line, 12);
                assert_eq!(expected, 8);
                assert_eq!(found, 4);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_row_shape_long() {
        let h = header();
        let err = VariantRecord::parse("1\t2\t3\t4\t5\t6\t7\t8\t9", &h, 3, "t").unwrap_err();
        assert!(matches!(err, AfMatchError::RowShape { found: 9, .. }));
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let h = header();
        let rec = VariantRecord::parse("chr1\t5\t\t\t\t\t\t", &h, 1, "t").unwrap();
        assert_eq!(rec.fields().len(), 8);
        assert_eq!(rec.info(&h), "");
    }

    #[test]
    fn test_info_af() {
        assert_eq!(info_af("NS=3;AF=0.005;DB"), Some(0.005));
        assert_eq!(info_af("AF=1e-4"), Some(0.0001));
        assert_eq!(info_af("NS=3;DB"), None);
        assert_eq!(info_af("AF=abc"), None);
        assert_eq!(info_af("AF="), None);
        assert_eq!(info_af("AF"), None);
        assert_eq!(info_af("."), None);
        assert_eq!(info_af(""), None);
        assert_eq!(info_af("AF=0.1,0.2"), None);
    }

    #[test]
    fn test_info_af_is_case_sensitive() {
        assert_eq!(info_af("af=0.001"), None);
        assert_eq!(info_af("AF_popmax=0.001"), None);
        assert_eq!(info_af("MAF=0.001"), None);
    }

    #[test]
    fn test_info_map_splits_on_first_equals() {
        let m = info_map("NS=3;DB;ANN=x=y;AF=0.2");
        assert_eq!(m.get("ANN"), Some(&"x=y"));
        assert_eq!(m.get("NS"), Some(&"3"));
        assert_eq!(m.get("DB"), None);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_info_map_last_value_wins() {
        assert_eq!(info_af("AF=0.5;AF=0.001"), Some(0.001));
    }
}
