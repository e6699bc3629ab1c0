use rustc_hash::FxHashSet;

use crate::header::Header;
use crate::variant::VariantRecord;

/// POS values of a set of records, compared as exact strings.
///
/// No numeric normalization is done, so `"100"` and `"0100"` are different
/// positions. CHROM is not part of the key.
#[derive(Debug, Default, Clone)]
pub struct PositionSet(FxHashSet<String>);

impl PositionSet {
    pub fn from_records(records: &[VariantRecord], header: &Header) -> Self {
        PositionSet(
            records
                .iter()
                .map(|r| r.pos(header).to_string())
                .collect(),
        )
    }

    pub fn contains(&self, pos: &str) -> bool {
        self.0.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Keep the records whose POS is in `positions`, in their original order.
pub fn intersect(
    records: Vec<VariantRecord>,
    header: &Header,
    positions: &PositionSet,
) -> Vec<VariantRecord> {
    records
        .into_iter()
        .filter(|r| positions.contains(r.pos(header)))
        .collect()
}
