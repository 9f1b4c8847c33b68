use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn ask_yn(prompt: &str) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .report(true)
        .wait_for_newline(true)
        .interact()
        .unwrap()
}

pub fn read_passage(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read passage from {}", path.display()))?;

    if text.trim().is_empty() {
        bail!("the passage at {} is empty", path.display());
    }
    Ok(text.trim().to_string())
}
