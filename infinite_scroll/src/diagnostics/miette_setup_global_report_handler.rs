// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pretty printing of the [`miette::Report`]s that the `isl` binary returns from `main`.
//! Every error type in this crate derives [`miette::Diagnostic`] with a code (and
//! sometimes a help message), which this handler renders.

use miette::MietteHandlerOpts;

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// The hook is lazily evaluated, so the terminal width is only queried when a report is
/// actually rendered.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = crossterm::terminal::size()
            .map_or(FALLBACK_TERMINAL_WIDTH, |(columns, _rows)| columns);
        tracing::debug!(message = "miette::set_hook", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(usize::from(terminal_width))
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
