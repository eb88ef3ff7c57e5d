//! Internal operation log: one CSV line per executed command
//! (`date, operation, target, message`). Holds which entry was touched,
//! never the entry contents.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Append a line to the operation log at `path`.
pub fn append(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if is_new {
        wtr.write_record(["date", "operation", "target", "message"])?;
    }

    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;
    Ok(())
}

/// Log an operation; a failing log write only prints a warning.
pub fn oplog(operation: &str, target: &str, message: &str) {
    if let Err(e) = append(&Config::log_file(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Rows of the log at `path`, oldest first. A missing file is an empty log.
pub fn read_entries(path: &Path) -> AppResult<Vec<(String, String, String, String)>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut entries = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let get = |i: usize| row.get(i).unwrap_or_default().to_string();
        entries.push((get(0), get(1), get(2), get(3)));
    }
    Ok(entries)
}

fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "conflict" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_entries(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|(_, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        let id_w = entries.len().to_string().len();
        let date_w = entries
            .iter()
            .map(|(date, _, _, _)| date.len())
            .max()
            .unwrap_or(25);

        println!("📜 Internal log:\n");

        for (i, (raw_date, operation, target, message)) in entries.into_iter().enumerate() {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let color = color_for_operation(&operation);

            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                // --- TRUNCATE a 60 caratteri SENZA ANSI ---
                let room = 60usize.saturating_sub(operation.len() + 3);
                let t: String = if target.chars().count() > room {
                    let mut s: String = target.chars().take(room.saturating_sub(3)).collect();
                    s.push_str("...");
                    s
                } else {
                    target.clone()
                };
                colored.push_str(&format!(" ({t})"));
            }

            // padding (calcolato sulle dimensioni reali SENZA ANSI)
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
