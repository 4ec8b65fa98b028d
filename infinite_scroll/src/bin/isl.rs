// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `isl` loads a large mock dataset page by page. Type to search (a number jumps
//! straight to the page holding that id), press Down to load more.
//!
//! ```text
//! isl                                   # interactive
//! isl --headless --search 450 --scroll 2
//! isl --headless --json | jq .generation
//! ```

use std::io::{IsTerminal, Write, stdout};

use clap::Parser;
use crossterm::{event::EventStream,
                terminal::{disable_raw_mode, enable_raw_mode}};
use futures_util::StreamExt;
use miette::IntoDiagnostic;
use r3bl_infinite_scroll::{CLIArg, Controller, FetcherResponse, HeadlessOption,
                           HeadlessScript, ISSUES_URL, InMemoryListView, MockDataSource,
                           PagerConfig, TerminalInput, TerminalListView, TracingConfig,
                           UiEvent, WireMessage, format_record_line, run_event_loop,
                           run_headless_session,
                           setup_default_miette_global_report_handler, spawn_fetcher};
use tokio::sync::mpsc;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        TracingConfig::from(tracing_core::LevelFilter::DEBUG).install_global()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    setup_default_miette_global_report_handler(ISSUES_URL);

    let config = PagerConfig::try_from(&cli_arg.pager_options)?;
    let is_headless = cli_arg.headless_options.headless || !stdout().is_terminal();

    if is_headless {
        run_headless(&config, &cli_arg.headless_options).await?;
    } else {
        run_interactive(&config).await?;
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}

async fn run_headless(config: &PagerConfig, options: &HeadlessOption) -> miette::Result<()> {
    let mut fetcher = spawn_fetcher(MockDataSource::from(config), config.channel_capacity);
    let mut controller =
        Controller::new(config, InMemoryListView::default(), fetcher.request_sender);
    let script = HeadlessScript {
        search: options.search.clone(),
        scroll_count: options.scroll,
    };

    let print_json = options.json;
    run_headless_session(
        &mut controller,
        &mut fetcher.response_receiver,
        &script,
        |response: &FetcherResponse| {
            if print_json {
                print_json_line(response);
            }
        },
    )
    .await?;

    if !print_json {
        let view = controller.view();
        for record in &view.records {
            println!("{}", format_record_line(record));
        }
        println!("{}", view.status);
    }

    // Closes the request channel, which stops the fetcher task.
    drop(controller);
    fetcher.join_handle.await.into_diagnostic()?;

    Ok(())
}

fn print_json_line(response: &FetcherResponse) {
    match response.try_encode() {
        Ok(buffer) => println!("{}", String::from_utf8_lossy(&buffer)),
        Err(error) => tracing::error!(message = "could not encode response", %error),
    }
}

async fn run_interactive(config: &PagerConfig) -> miette::Result<()> {
    let fetcher = spawn_fetcher(MockDataSource::from(config), config.channel_capacity);
    let (ui_event_sender, ui_event_receiver) = mpsc::channel(config.channel_capacity);

    let raw_mode = RawModeGuard::try_start()?;
    println!("📜 Type to search, Down/PageDown/End/Space to load more, Esc to quit.\r");

    let view = TerminalListView::new(stdout());
    let controller = Controller::new(config, view, fetcher.request_sender);
    let input_task = tokio::spawn(read_terminal_input(ui_event_sender));

    let controller =
        run_event_loop(controller, ui_event_receiver, fetcher.response_receiver, config)
            .await;

    input_task.abort();
    let total_items_loaded = controller.state().total_items_loaded;
    let mut stdout = controller.into_view().into_inner();
    writeln!(stdout, "\r").into_diagnostic()?;
    drop(raw_mode);

    tracing::debug!(message = "interactive session ended", total_items_loaded);
    Ok(())
}

/// Forwards terminal input to the event loop until the user quits, or the terminal
/// stops producing events.
async fn read_terminal_input(ui_event_sender: mpsc::Sender<UiEvent>) {
    let mut event_stream = EventStream::new();
    let mut terminal_input = TerminalInput::default();

    while let Some(maybe_event) = event_stream.next().await {
        let event = match maybe_event {
            Ok(event) => event,
            Err(error) => {
                tracing::error!(message = "could not read terminal event", %error);
                break;
            }
        };
        let Some(ui_event) = terminal_input.on_event(&event) else {
            continue;
        };
        let is_shutdown = ui_event == UiEvent::Shutdown;
        if ui_event_sender.send(ui_event).await.is_err() || is_shutdown {
            break;
        }
    }
}

/// Raw mode stays on until this is dropped, even on an early return.
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn try_start() -> miette::Result<Self> {
        enable_raw_mode().into_diagnostic()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(message = "could not disable raw mode", %error);
        }
    }
}
