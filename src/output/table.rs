//
//  webmate-sdk
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table building and cell formatting.
//!
//! ```rust,no_run
//! use webmate_sdk::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "NAME"])
//!     .row(["4a0b3c1e-...", "Login test"])
//!     .print();
//! ```

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder around a `comfy_table::Table`.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a test run or result status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_uppercase().as_str() {
        "PASSED" | "SUCCESS" | "FINISHED" => style(status).green().to_string(),
        "FAILED" | "FAILURE" | "ERROR" => style(status).red().to_string(),
        "SKIPPED" | "WARNING" | "PENDING" | "RUNNING" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer message", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("ääääää", 5), "ää...");
    }

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("FAILED", false), "FAILED");
    }

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 5).unwrap();
        assert_eq!(format_time(&time), "2025-02-01 10:00:05 UTC");
    }

    #[test]
    fn test_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["ID", "NAME"])
            .row(["1", "Login test"])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("Login test"));
    }
}
