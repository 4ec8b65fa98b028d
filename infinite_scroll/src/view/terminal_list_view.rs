// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          io::{Result as IoResult, Write}};

use crossterm::{cursor::{MoveTo, MoveToColumn},
                queue,
                style::Print,
                terminal::{Clear, ClearType}};

use crate::{ListView, Record, format_record_line, format_status};

pub const LOADER_TEXT: &str = "⏳ Loading...";

/// Renders the list straight into a terminal that is in raw mode. Records scroll up the
/// screen as they are appended, and the line under the cursor is a footer that shows
/// the search input, the status, and the loading indicator:
///
/// ```text
/// Item #48 | ID: 48 | Processed: 0ZQ4J8V1KXA | Date: 2026-10-12T03:10:44.120Z
/// Item #49 | ID: 49 | Processed: 9MB3LQ2TT0C | Date: 2026-10-08T21:52:09.874Z
/// 🔍 45 │ Items: 50 │ ⏳ Loading...
/// ```
pub struct TerminalListView<W: Write> {
    writer: W,
    rows_rendered: u64,
    total_items_loaded: u64,
    search_input: String,
    is_loader_visible: bool,
}

impl<W: Write> Debug for TerminalListView<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TerminalListView")
            .field("rows_rendered", &self.rows_rendered)
            .field("total_items_loaded", &self.total_items_loaded)
            .field("search_input", &self.search_input)
            .field("is_loader_visible", &self.is_loader_visible)
            .finish_non_exhaustive()
    }
}

impl<W: Write> TerminalListView<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_rendered: 0,
            total_items_loaded: 0,
            search_input: String::new(),
            is_loader_visible: false,
        }
    }

    #[must_use]
    pub fn rows_rendered(&self) -> u64 { self.rows_rendered }

    #[must_use]
    pub fn into_inner(self) -> W { self.writer }

    #[must_use]
    pub fn footer_text(&self) -> String {
        let mut acc = format!(
            "🔍 {} │ {}",
            self.search_input,
            format_status(self.total_items_loaded)
        );
        if self.is_loader_visible {
            acc.push_str(" │ ");
            acc.push_str(LOADER_TEXT);
        }
        acc
    }

    fn try_render_footer(&mut self) -> IoResult<()> {
        let footer = self.footer_text();
        queue!(
            self.writer,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(footer)
        )?;
        self.writer.flush()
    }

    fn try_append(&mut self, records: &[Record]) -> IoResult<()> {
        queue!(self.writer, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for record in records {
            queue!(self.writer, Print(format_record_line(record)), Print("\r\n"))?;
        }
        self.try_render_footer()
    }

    fn try_clear(&mut self) -> IoResult<()> {
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        self.try_render_footer()
    }
}

impl<W: Write> ListView for TerminalListView<W> {
    fn append(&mut self, records: Vec<Record>) {
        let count = u64::try_from(records.len()).unwrap_or(u64::MAX);
        self.rows_rendered = self.rows_rendered.saturating_add(count);
        log_if_err(self.try_append(&records));
    }

    fn clear(&mut self) {
        self.rows_rendered = 0;
        log_if_err(self.try_clear());
    }

    fn set_status(&mut self, total_items_loaded: u64) {
        self.total_items_loaded = total_items_loaded;
        log_if_err(self.try_render_footer());
    }

    fn show_loader(&mut self) {
        self.is_loader_visible = true;
        log_if_err(self.try_render_footer());
    }

    fn hide_loader(&mut self) {
        self.is_loader_visible = false;
        log_if_err(self.try_render_footer());
    }

    fn echo_search_input(&mut self, text: &str) {
        text.clone_into(&mut self.search_input);
        log_if_err(self.try_render_footer());
    }
}

fn log_if_err(result: IoResult<()>) {
    if let Err(error) = result {
        tracing::error!(message = "🖥️ could not write to terminal", %error);
    }
}
