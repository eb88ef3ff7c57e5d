use crate::errors::{AppError, AppResult};
use crate::models::record::{Record, RecordId};

/// The whole schedule, in file order. Always loaded and written in full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index >= self.records.len() {
            return Err(AppError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    /// Validate and append at the end; returns the stored (normalized) entry.
    pub fn insert(&mut self, record: Record) -> AppResult<&Record> {
        record.validate()?;
        let mut record = record.normalized();
        if record.id.is_empty() {
            record.id = RecordId::generate();
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Validate and replace in place. The stored entry keeps its id.
    /// Returns `false` when the replacement is identical to the current entry,
    /// either as stored or once both are normalized; the stored row is then
    /// left as is.
    pub fn replace(&mut self, index: usize, record: Record) -> AppResult<bool> {
        self.check_index(index)?;
        let slot = &mut self.records[index];

        if slot.same_content(&record) {
            return Ok(false);
        }

        record.validate()?;
        let mut record = record.normalized();
        if slot.clone().normalized().same_content(&record) {
            return Ok(false);
        }

        record.id = if slot.id.is_empty() {
            RecordId::generate()
        } else {
            slot.id.clone()
        };
        *slot = record;
        Ok(true)
    }

    /// Remove the entry at `index`, shifting the following ones down.
    pub fn remove(&mut self, index: usize) -> AppResult<Record> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    /// Distinct locations in first-appearance order.
    pub fn known_locations(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.location.as_str()))
    }

    /// Distinct categories in first-appearance order.
    pub fn known_categories(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.category.as_str()))
    }

    /// Distinct days in first-appearance order.
    pub fn days(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.day.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        let v = v.trim();
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
