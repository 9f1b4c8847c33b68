use std::collections::HashSet;

use anyhow::Result;

use crate::classify::is_removable;
use crate::exercise::{BlankOutcome, BlankedPassage, Difficulty, placeholder};
use crate::normalize::{reattach_punctuation, separate_punctuation};

/// Blanks a passage: normalizes punctuation, picks an evenly spaced set of
/// candidate words sized by the difficulty level, hides the ones the
/// classifier allows, and reassembles the text with punctuation attached
/// naturally again.
pub fn blank_passage(text: &str, difficulty: Difficulty) -> Result<BlankOutcome> {
    let normalized = separate_punctuation(text);
    let mut words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();

    let quota = difficulty.removal_quota(words.len());
    if quota == 0 {
        return Ok(BlankOutcome::NothingToRemove);
    }

    let candidates = candidate_positions(words.len(), quota);
    let removed = substitute_candidates(&mut words, &candidates);

    Ok(BlankOutcome::Blanked(BlankedPassage {
        text: reattach_punctuation(&words.join(" ")),
        removed,
    }))
}

/// Evenly spaced 0-based candidate indices for a passage of `word_count`
/// words: every `distance`-th word, where `distance = word_count / quota`.
/// Rounding can yield more candidates than the quota; the excess is dropped
/// from the end so the earliest candidates always survive.
fn candidate_positions(word_count: usize, quota: usize) -> Vec<usize> {
    let distance = (word_count / quota).max(1);
    let mut positions: Vec<usize> = (1..)
        .map(|step| step * distance)
        .take_while(|&pos| pos <= word_count)
        .map(|pos| pos - 1)
        .collect();
    positions.truncate(quota);
    positions
}

/// Replaces accepted candidates with numbered placeholders, in place, and
/// returns the hidden words in acceptance order.
///
/// A candidate the classifier rejects redirects to the next word, then the
/// previous one. Whichever word is chosen is still dropped if an equal word
/// (case-insensitively) was already hidden; the quota is a target, not a
/// guarantee. Each index is substituted at most once.
fn substitute_candidates(words: &mut [String], candidates: &[usize]) -> Vec<String> {
    let word_count = words.len();
    let mut removed: Vec<String> = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for &index in candidates {
        if processed.contains(&index) {
            continue;
        }

        let target = if is_removable(&words[index]) {
            Some(index)
        } else if index + 1 < word_count
            && is_removable(&words[index + 1])
            && !processed.contains(&(index + 1))
        {
            Some(index + 1)
        } else if index >= 1
            && is_removable(&words[index - 1])
            && !processed.contains(&(index - 1))
        {
            Some(index - 1)
        } else {
            None
        };

        if let Some(target) = target
            && !in_ledger(&removed, &words[target])
        {
            removed.push(words[target].clone());
            words[target] = placeholder(removed.len());
            processed.insert(target);
        }
    }

    removed
}

fn in_ledger(removed: &[String], word: &str) -> bool {
    let folded = word.to_lowercase();
    removed.iter().any(|entry| entry.to_lowercase() == folded)
}
