use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::exercise::{BlankOutcome, Difficulty};
use crate::palette::Palette;
use crate::selector::blank_passage;
use crate::utils::{pluralize, read_passage};

pub fn run(path: &Path, level: u8, json: bool) -> Result<()> {
    let difficulty = Difficulty::new(level)?;
    let text = read_passage(path)?;

    match blank_passage(&text, difficulty)? {
        BlankOutcome::Blanked(passage) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&passage)?);
            } else {
                println!("{}\n", passage.text);
                println!(
                    "{}",
                    Palette::paint(
                        Palette::INFO,
                        format!("Hidden: {}", pluralize("word", passage.removed.len()))
                    )
                );
                for (ordinal, word) in passage.removed.iter().enumerate() {
                    println!("{} {}", Palette::dim(format!("({})", ordinal + 1)), word);
                }
            }
        }
        BlankOutcome::NothingToRemove => {
            if json {
                let report = json!({ "text": null, "removed": [] });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}",
                    Palette::paint(
                        Palette::WARNING,
                        "No words would be removed at this level. Try a higher one."
                    )
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn passage_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();
        file
    }

    #[test]
    fn blanks_a_file_in_both_output_modes() {
        let file = passage_file("The quick brown fox jumps over the lazy dog again");

        assert!(run(file.path(), 10, false).is_ok());
        assert!(run(file.path(), 10, true).is_ok());
    }

    #[test]
    fn reports_nothing_to_remove_at_low_levels() {
        let file = passage_file("The quick brown fox jumps over the lazy dog again");

        assert!(run(file.path(), 1, false).is_ok());
        assert!(run(file.path(), 1, true).is_ok());
    }

    #[test]
    fn rejects_an_out_of_range_level() {
        let file = passage_file("some words here");

        assert!(run(file.path(), 0, false).is_err());
        assert!(run(file.path(), 11, false).is_err());
    }
}
