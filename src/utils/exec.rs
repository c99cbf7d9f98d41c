//! Launching configured external programs.
//!
//! `[new] editor` and `[view] browser` are both a program followed by its
//! arguments. The target path is appended and the program runs detached.

use anyhow::{Context, Result};
use std::{path::Path, process::Command};

/// Spawn `command` with `path` appended, without waiting for it.
///
/// Returns `false` if `command` is empty (nothing configured).
pub fn open_with(command: &[String], path: &Path) -> Result<bool> {
    let Some((program, args)) = command.split_first() else {
        return Ok(false);
    };

    Command::new(program)
        .args(args)
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to launch `{program}`"))?;
    Ok(true)
}
