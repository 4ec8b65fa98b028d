// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{ScrollMetrics, UiEvent};

/// Turns crossterm terminal events into [`UiEvent`]s, and owns the text of the search
/// input while it is being edited.
///
/// | Key                                 | Event                                      |
/// |-------------------------------------|--------------------------------------------|
/// | Printable character                 | [`UiEvent::SearchInput`] with it appended  |
/// | Backspace                           | [`UiEvent::SearchInput`] with one removed  |
/// | Down, `PageDown`, End, Space        | [`UiEvent::Scroll`] to the bottom          |
/// | Esc, Ctrl+C                         | [`UiEvent::Shutdown`]                      |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalInput {
    search_input: String,
}

impl TerminalInput {
    #[must_use]
    pub fn search_input(&self) -> &str { &self.search_input }

    pub fn on_event(&mut self, event: &Event) -> Option<UiEvent> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.on_key_press(*key_event)
            }
            _ => None,
        }
    }

    fn on_key_press(&mut self, key_event: KeyEvent) -> Option<UiEvent> {
        let KeyEvent {
            code, modifiers, ..
        } = key_event;

        match code {
            KeyCode::Esc => Some(UiEvent::Shutdown),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UiEvent::Shutdown)
            }
            // The terminal always shows the tail of the list.
            KeyCode::Down | KeyCode::PageDown | KeyCode::End | KeyCode::Char(' ') => {
                Some(UiEvent::Scroll(ScrollMetrics::default()))
            }
            KeyCode::Backspace => {
                self.search_input.pop()?;
                Some(UiEvent::SearchInput(self.search_input.clone()))
            }
            KeyCode::Char(ch)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search_input.push(ch);
                Some(UiEvent::SearchInput(self.search_input.clone()))
            }
            _ => None,
        }
    }
}
