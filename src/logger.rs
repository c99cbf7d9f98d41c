//! Terminal output for quo.
//!
//! Every line is `[module] message`, with the module tag colored by stage:
//!
//! ```text
//! [parse] reading 42 files
//! [entry] [██████████░░░░░░░░░░] 21/42
//! [index] 3 terms excluded above threshold
//! ```
//!
//! While entry pages are written in parallel a single progress line sits at
//! the bottom of the output. Log lines printed meanwhile replace it and the
//! next tick draws it again.

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

/// Columns used when the terminal size is unknown (pipes, CI logs).
const FALLBACK_WIDTH: usize = 100;

/// Bar body width bounds, in cells.
const BAR_CELLS: (usize, usize) = (10, 40);

static WIDTH: OnceLock<usize> = OnceLock::new();

/// Set while an [`EntryProgress`] owns the last terminal line.
static BAR_SHOWN: AtomicBool = AtomicBool::new(false);

/// Serializes writes so log lines and bar redraws never interleave.
static OUTPUT: Mutex<()> = Mutex::new(());

fn terminal_width() -> usize {
    *WIDTH.get_or_init(|| size().map_or(FALLBACK_WIDTH, |(w, _)| w as usize))
}

/// Log a message under a module tag, e.g. `log!("parse"; "reading {} files", n)`.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Print one `[module] message` line, cut to the terminal width.
///
/// Multi-line messages (error chains) are printed whole.
pub fn log(module: &str, message: &str) {
    let _guard = OUTPUT.lock().ok();
    let mut out = stdout().lock();

    if BAR_SHOWN.load(Ordering::Relaxed) {
        write!(out, "\r").ok();
        execute!(out, Clear(ClearType::CurrentLine)).ok();
    }

    let message = if message.contains('\n') {
        message
    } else {
        fit_message(module, message, terminal_width())
    };
    writeln!(out, "{} {message}", tag(module)).ok();
    out.flush().ok();
}

/// `[module]` colored by build stage.
fn tag(module: &str) -> ColoredString {
    let tag = format!("[{module}]");
    match module {
        "error" => tag.bright_red().bold(),
        "index" | "search" => tag.bright_cyan().bold(),
        "new" | "view" => tag.bright_green().bold(),
        "config" => tag.bright_magenta().bold(),
        _ => tag.bright_yellow().bold(),
    }
}

/// Longest prefix of `message` that fits after `[module] ` in `width` columns.
fn fit_message<'a>(module: &str, message: &'a str, width: usize) -> &'a str {
    let room = width.saturating_sub(module.chars().count() + 3);
    match message.char_indices().nth(room) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}

// ============================================================================
// Entry Progress
// ============================================================================

/// Progress line for the parallel entry page writes.
///
/// Safe to tick from rayon workers; the line is cleared on drop.
pub struct EntryProgress {
    done: AtomicUsize,
    total: usize,
}

impl EntryProgress {
    /// Returns `None` for zero or one entry, where a bar is just noise.
    pub fn new(total: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        BAR_SHOWN.store(true, Ordering::Relaxed);
        Some(Self {
            done: AtomicUsize::new(0),
            total,
        })
    }

    /// Count one written entry and redraw.
    pub fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        let line = bar_line(done, self.total, terminal_width());

        let _guard = OUTPUT.lock().ok();
        let mut out = stdout().lock();
        write!(out, "\r").ok();
        execute!(out, Clear(ClearType::CurrentLine)).ok();
        write!(out, "{} {line}", tag("entry")).ok();
        out.flush().ok();
    }

    /// Remove the progress line.
    pub fn finish(&self) {
        if !BAR_SHOWN.swap(false, Ordering::Relaxed) {
            return;
        }
        let _guard = OUTPUT.lock().ok();
        let mut out = stdout().lock();
        write!(out, "\r").ok();
        execute!(out, Clear(ClearType::CurrentLine)).ok();
        out.flush().ok();
    }
}

impl Drop for EntryProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

/// `[████░░░░] done/total`, sized to fit after `[entry] ` in `width` columns.
fn bar_line(done: usize, total: usize, width: usize) -> String {
    let count = format!("{done}/{total}");
    let overhead = "[entry] ".len() + "[] ".len() + count.len();
    let cells = width.saturating_sub(overhead).clamp(BAR_CELLS.0, BAR_CELLS.1);

    let filled = if total == 0 { 0 } else { done.min(total) * cells / total };
    format!("[{}{}] {count}", "█".repeat(filled), "░".repeat(cells - filled))
}

// ============================================================================
// Tests
// ============================================================================
