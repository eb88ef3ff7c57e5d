//! CSV encoding of the schedule.
//!
//! Columns are matched by name, so files written by older tools (no `Website`
//! or `ID` column, or English header names) load fine. Output always carries
//! the full German header in fixed order.
//!
//! Stored ids are read back verbatim. A file without an `ID` column gets ids
//! derived from row number and row content, so every load of the same bytes
//! yields the same ids until the first save writes them out.

use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordId, RecordSet};
use crate::store::local::content_hash;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

/// Header written to the backing file, in column order.
pub const HEADERS: [&str; 7] = ["Tag", "Ort", "Foodtruck", "Küche", "Zeit", "Website", "ID"];

/// Accepted alternative names, same order as [`HEADERS`].
const ALIASES: [&str; 7] = [
    "day",
    "location",
    "vendor_name",
    "category",
    "time_range",
    "website",
    "id",
];

const WEBSITE: usize = 5;
const ID: usize = 6;

fn column_for(name: &str) -> Option<usize> {
    let name = name.trim().to_lowercase();
    HEADERS
        .iter()
        .position(|h| h.to_lowercase() == name)
        .or_else(|| ALIASES.iter().position(|a| *a == name))
}

fn strip_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw)
}

/// Decode the backing file content into a record set.
pub fn decode(raw: &[u8]) -> AppResult<RecordSet> {
    let raw = strip_bom(raw);
    if raw.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(RecordSet::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(raw);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Format(format!("unreadable header: {e}")))?
        .clone();

    let positions = map_headers(&headers)?;

    let mut records = Vec::new();
    for (n, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| AppError::Format(describe_csv_error(&e)))?;

        let field = |col: usize| -> String {
            positions[col]
                .and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let mut record = Record {
            id: RecordId::from(field(ID).as_str()),
            day: field(0),
            location: field(1),
            vendor_name: field(2),
            category: field(3),
            time_range: field(4),
            website: field(WEBSITE),
        };
        if positions[ID].is_none() {
            record.id = derived_id(n, &record);
        }
        records.push(record);
    }

    Ok(RecordSet::from(records))
}

/// Id for row `n` of a file that has no `ID` column.
fn derived_id(n: usize, r: &Record) -> RecordId {
    let row = n.to_string();
    let material = [
        row.as_str(),
        r.day.as_str(),
        r.location.as_str(),
        r.vendor_name.as_str(),
        r.category.as_str(),
        r.time_range.as_str(),
        r.website.as_str(),
    ]
    .join("\u{1f}");
    let hash = content_hash(material.as_bytes());
    RecordId::from(format!("row{}-{}", n + 1, &hash.as_str()[..12]).as_str())
}

/// Column index in the file for each logical column.
fn map_headers(headers: &StringRecord) -> AppResult<[Option<usize>; 7]> {
    let mut positions: [Option<usize>; 7] = [None; 7];

    for (i, name) in headers.iter().enumerate() {
        let col = column_for(name)
            .ok_or_else(|| AppError::Format(format!("unexpected column '{}'", name)))?;
        if positions[col].is_some() {
            return Err(AppError::Format(format!("duplicate column '{}'", name)));
        }
        positions[col] = Some(i);
    }

    let missing: Vec<&str> = (0..WEBSITE)
        .filter(|c| positions[*c].is_none())
        .map(|c| HEADERS[c])
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Format(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    Ok(positions)
}

fn describe_csv_error(e: &csv::Error) -> String {
    match e.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
            format!("line {line}: expected {expected_len} fields, found {len}")
        }
        _ => e.to_string(),
    }
}

/// Encode the record set with the full header, one row per record.
pub fn encode(set: &RecordSet) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(HEADERS)?;

    for r in set {
        wtr.write_record([
            r.day.as_str(),
            r.location.as_str(),
            r.vendor_name.as_str(),
            r.category.as_str(),
            r.time_range.as_str(),
            r.website.as_str(),
            r.id.as_str(),
        ])?;
    }

    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}
