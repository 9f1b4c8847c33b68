use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use dialoguer::{Input, theme::ColorfulTheme};

use crate::exercise::{BlankOutcome, Difficulty};
use crate::palette::Palette;
use crate::selector::blank_passage;
use crate::utils::{ask_yn, pluralize, read_passage, word_count};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let text = match path {
        Some(path) => read_passage(&path)?,
        None => prompt_for_passage()?,
    };

    println!(
        "\n{} {}\n",
        Palette::dim("Word count:"),
        Palette::paint(Palette::INFO, word_count(&text))
    );

    loop {
        let difficulty = prompt_for_difficulty()?;

        let passage = match blank_passage(&text, difficulty) {
            Ok(BlankOutcome::Blanked(passage)) => passage,
            Ok(BlankOutcome::NothingToRemove) => {
                println!(
                    "\n{}\n",
                    Palette::paint(
                        Palette::WARNING,
                        "No words will be removed. Adjust the difficulty level."
                    )
                );
                continue;
            }
            Err(err) => {
                eprintln!(
                    "{}",
                    Palette::paint(Palette::DANGER, format!("Processing failed: {err:#}"))
                );
                println!("{}", Palette::dim("Try a different level."));
                continue;
            }
        };

        println!("\n{}", Palette::dim("Blanked passage:"));
        println!("{}\n", passage.text);
        println!(
            "{}\n",
            Palette::paint(
                Palette::INFO,
                format!("Hidden: {}", pluralize("word", passage.removed.len()))
            )
        );

        if ask_yn("Is the result correct?") {
            reveal(&passage.removed);
            return Ok(());
        }
        println!(
            "\n{}\n",
            Palette::dim("Let's change the difficulty level.")
        );
    }
}

fn prompt_for_passage() -> Result<String> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter a passage")
        .interact_text()
        .context("failed to read the passage")?;

    if text.trim().is_empty() {
        bail!("the passage cannot be empty");
    }
    Ok(text.trim().to_string())
}

fn prompt_for_difficulty() -> Result<Difficulty> {
    loop {
        let level: u8 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Difficulty level ({}-{})",
                Difficulty::MIN,
                Difficulty::MAX
            ))
            .interact_text()
            .context("failed to read the difficulty level")?;

        match Difficulty::new(level) {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => eprintln!("{}", Palette::paint(Palette::DANGER, err)),
        }
    }
}

fn reveal(removed: &[String]) {
    println!("\n{}", Palette::paint(Palette::ACCENT, "Hidden words"));
    for (ordinal, word) in removed.iter().enumerate() {
        println!(
            "{} {}",
            Palette::dim(format!("({})", ordinal + 1)),
            Palette::paint(Palette::SUCCESS, word)
        );
    }
    println!("\n{}", Palette::dim("Thanks for practicing with gapfill."));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_prints_without_panicking() {
        reveal(&["again".to_string(), "notebooks.".to_string()]);
        reveal(&[]);
    }
}
