//! Keyboard input handling and interactive loop.
//!
//! This module maps terminal key events onto picker actions and drives the
//! raw-mode loop that renders a [`Picker`] until the user finishes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::picker::{Effect, Key, PickOption, Picker};

use super::render::{render_dropdown, render_field, render_help_bar, DropdownLine, LineKind};
use super::terminal::TerminalCapabilities;
use super::theme::{colors, Icons};

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Forwarded to [`Picker::handle_key`]
    Picker(Key),
    /// Typed character for the search field
    Insert(char),
    /// Backspace: edits the query, or removes the last tag when it is empty
    DeleteChar,
    ClearAll,
    Confirm,
    Abort,
}

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Confirm,
    Abort,
}

/// Convert a keyboard event to a TerminalAction
pub fn key_to_action(key: KeyEvent) -> Option<TerminalAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TerminalAction::Abort),
            KeyCode::Char('d') => Some(TerminalAction::Confirm),
            KeyCode::Char('u') => Some(TerminalAction::ClearAll),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(TerminalAction::Picker(Key::ArrowUp)),
        KeyCode::Down => Some(TerminalAction::Picker(Key::ArrowDown)),
        KeyCode::Left => Some(TerminalAction::Picker(Key::ArrowLeft)),
        KeyCode::Right => Some(TerminalAction::Picker(Key::ArrowRight)),
        KeyCode::Enter => Some(TerminalAction::Picker(Key::Enter)),
        KeyCode::Esc => Some(TerminalAction::Picker(Key::Escape)),
        KeyCode::Tab => Some(TerminalAction::Picker(Key::Tab)),
        KeyCode::Backspace => Some(TerminalAction::DeleteChar),
        KeyCode::Char(c) => Some(TerminalAction::Insert(c)),
        _ => None,
    }
}

/// Apply one action to the picker
///
/// Escape on an already closed picker finishes the session.
pub fn apply_action(picker: &mut Picker, action: TerminalAction) -> LoopControl {
    match action {
        TerminalAction::Picker(Key::Escape) if !picker.state().is_open => LoopControl::Confirm,
        TerminalAction::Picker(key) => {
            picker.handle_key(key);
            LoopControl::Continue
        }
        TerminalAction::Insert(c) => {
            if picker.config().searchable {
                let mut query = picker.state().search_query.clone();
                query.push(c);
                picker.set_search(query);
            }
            LoopControl::Continue
        }
        TerminalAction::DeleteChar => {
            let mut query = picker.state().search_query.clone();
            if query.pop().is_some() {
                picker.set_search(query);
            } else {
                picker.handle_key(Key::Backspace);
            }
            LoopControl::Continue
        }
        TerminalAction::ClearAll => {
            if picker.config().clearable {
                picker.clear_all();
            }
            LoopControl::Continue
        }
        TerminalAction::Confirm => LoopControl::Confirm,
        TerminalAction::Abort => LoopControl::Abort,
    }
}

/// Window of dropdown lines that fits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// Shift the window so that `line` is inside it
    pub fn scroll_to(&mut self, line: usize) {
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + self.height {
            self.offset = line + 1 - self.height;
        }
    }

    /// Scroll to the line rendering visible entry `index`
    pub fn scroll_into_view(&mut self, lines: &[DropdownLine], index: usize) {
        if let Some(line) = lines.iter().position(|l| l.entry == Some(index)) {
            // Keep a group header in view together with its first entry.
            let line = match line.checked_sub(1) {
                Some(prev) if lines[prev].kind == LineKind::GroupHeader && line < self.offset => {
                    prev
                }
                _ => line,
            };
            self.scroll_to(line);
        }
    }

    /// Pull the window back when the list got shorter
    pub fn fit(&mut self, total: usize) {
        self.offset = self.offset.min(total.saturating_sub(self.height));
    }

    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        start..(start + self.height).min(total)
    }
}

/// Lines used by the field, separator, status and help bar
const CHROME_LINES: u16 = 7;

/// Run the picker interactively
/// Returns the selection if confirmed, None if aborted
pub fn run_interactive(
    picker: &mut Picker,
    caps: TerminalCapabilities,
) -> std::io::Result<Option<Vec<PickOption>>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::stdout;

    let icons = Icons::new(caps.supports_unicode);
    let mut viewport = Viewport::new(caps.height.saturating_sub(CHROME_LINES) as usize);

    terminal::enable_raw_mode()?;
    let _guard = RawModeGuard;
    let mut stdout = stdout();
    execute!(stdout, cursor::Hide)?;

    picker.open();
    let result = loop {
        let lines = render_dropdown(&picker.view(), &icons);
        for effect in picker.take_effects() {
            match effect {
                Effect::ScrollIntoView(index) => viewport.scroll_into_view(&lines, index),
                // The search line always has focus in the terminal.
                Effect::FocusSearch => {}
            }
        }
        viewport.fit(lines.len());
        draw(&mut stdout, picker, &lines, &viewport, &icons, caps)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        log::trace!("terminal action {:?}", action);
        match apply_action(picker, action) {
            LoopControl::Continue => {}
            LoopControl::Confirm => break Some(picker.selected().to_vec()),
            LoopControl::Abort => break None,
        }
    };

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    Ok(result)
}

/// Restores the cursor and cooked mode when dropped, including on error paths
/// out of [`run_interactive`].
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

fn draw(
    stdout: &mut std::io::Stdout,
    picker: &Picker,
    lines: &[DropdownLine],
    viewport: &Viewport,
    icons: &Icons,
    caps: TerminalCapabilities,
) -> std::io::Result<()> {
    use crossterm::{
        cursor, queue,
        style::{Print, ResetColor, SetForegroundColor},
        terminal::{self, ClearType},
    };
    use std::io::Write;

    let width = caps.width as usize;
    let view = picker.view();
    let fit = |text: &str| super::render::truncate_to_width(text, width, icons);

    queue!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print(fit(&render_field(&view, icons))),
        Print("\r\n"),
        Print(icons.horizontal.repeat(width.min(63))),
        Print("\r\n")
    )?;

    for line in &lines[viewport.range(lines.len())] {
        let color = match line.kind {
            LineKind::Option {
                highlighted: true, ..
            } => Some(colors::INFO),
            LineKind::Option { disabled: true, .. } => Some(colors::DIM),
            LineKind::Option { .. } => None,
            LineKind::GroupHeader => Some(colors::DIM),
            LineKind::Message => Some(colors::WARNING),
        };
        match color.filter(|_| caps.supports_color) {
            Some(color) => queue!(
                stdout,
                SetForegroundColor(color),
                Print(fit(&line.text)),
                ResetColor
            )?,
            None => queue!(stdout, Print(fit(&line.text)))?,
        }
        queue!(stdout, Print("\r\n"))?;
    }

    let count = picker.selected().len();
    let status = match picker.config().max_selected {
        Some(max) => format!("{} of {} selected", count, max),
        None => format!("{} selected", count),
    };
    if caps.supports_color {
        queue!(
            stdout,
            Print("\r\n"),
            SetForegroundColor(colors::SUCCESS),
            Print(status),
            ResetColor,
            Print("\r\n")
        )?;
    } else {
        queue!(stdout, Print("\r\n"), Print(status), Print("\r\n"))?;
    }

    for help in render_help_bar(view.nested).lines() {
        queue!(stdout, Print(fit(help)), Print("\r\n"))?;
    }

    stdout.flush()
}
