//! # Record Store
//!
//! Append-only, insertion-ordered purchase records for one session.
//!
//! Records are held typed. The `/`-delimited form only appears when the
//! store is exported with [`RecordStore::encoded`] or rebuilt from lines
//! with [`RecordStore::from_encoded`].

use serde::Serialize;

use crate::codec::{decode_purchase, encode_purchase};
use crate::error::DecodeError;
use crate::types::PurchaseRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordStore {
    records: Vec<PurchaseRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Rebuilds a store from wire lines.
    ///
    /// Stops at the first malformed line and reports its 1-based position;
    /// nothing from a failed restore is kept.
    pub fn from_encoded<I, S>(lines: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                decode_purchase(line.as_ref()).map_err(|e| DecodeError::AtLine {
                    line: i + 1,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecordStore { records })
    }

    /// Appends a record at the end.
    pub fn append(&mut self, record: PurchaseRecord) {
        self.records.push(record);
    }

    /// Read-only view in insertion order.
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseRecord> {
        self.records.iter()
    }

    /// Wire lines in insertion order.
    pub fn encoded(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(encode_purchase)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a PurchaseRecord;
    type IntoIter = std::slice::Iter<'a, PurchaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
