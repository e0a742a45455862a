//! Formatting utilities for terminal output

use crate::core::{CoreError, LetterResult, MAX_TRIES, Score, to_emoji};
use colored::{ColoredString, Colorize};

/// A single colored letter tile, e.g. " A " on green
#[must_use]
pub fn letter_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", letter.to_uppercase()).bold();
    match result {
        LetterResult::Correct => tile.black().on_green(),
        LetterResult::WrongPosition => tile.black().on_yellow(),
        LetterResult::Wrong => tile.white().on_bright_black(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &str, results: &[LetterResult]) -> String {
    guess
        .chars()
        .zip(results)
        .map(|(letter, &result)| letter_tile(letter, result).to_string())
        .collect()
}

/// "1 try" / "4 tries"
#[must_use]
pub fn tries_label(count: usize) -> String {
    if count == 1 {
        "1 try".to_string()
    } else {
        format!("{count} tries")
    }
}

/// Shareable text in the game's own format
///
/// ```text
/// Wordle 264 3/6
///
/// 🟨⬛🟨⬛⬛
/// 🟨🟨⬛⬛⬛
/// 🟩🟩🟩🟩🟩
/// ```
///
/// Games solved after more than six guesses are shown as `X/6`.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if a guess differs in length from the word.
pub fn share_text(score: &Score) -> Result<String, CoreError> {
    let rows = score.results()?;
    let attempts = if score.is_won() {
        score.tries.len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle {} {attempts}/{MAX_TRIES}\n", score.id);
    for row in &rows {
        text.push('\n');
        text.push_str(&to_emoji(row));
    }
    Ok(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DayDate;
    use crate::scores::fixtures::sample_scores;
    use pretty_assertions::assert_eq;

    #[test]
    fn tries_label_pluralizes() {
        assert_eq!(tries_label(1), "1 try");
        assert_eq!(tries_label(4), "4 tries");
        assert_eq!(tries_label(0), "0 tries");
    }

    #[test]
    fn share_text_for_solved_game() {
        let lapse = sample_scores().into_iter().find(|s| s.id == 264).unwrap();
        assert_eq!(
            share_text(&lapse).unwrap(),
            "Wordle 264 3/6\n\n🟨⬛🟨⬛⬛\n🟨🟨⬛⬛⬛\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_for_failed_game() {
        let score = Score::new(
            7,
            DayDate::new(2021, 6, 26),
            "nymph",
            vec!["mommy".into(), "yelps".into()],
        );
        assert_eq!(
            share_text(&score).unwrap(),
            "Wordle 7 X/6\n\n⬛⬛🟩⬛🟨\n🟨⬛⬛🟩⬛"
        );
    }

    #[test]
    fn share_text_marks_overlong_game_as_failed() {
        let mut tries = vec!["mommy".to_string(); MAX_TRIES];
        tries.push("nymph".into());
        let score = Score::new(8, DayDate::new(2021, 6, 27), "nymph", tries);

        let text = share_text(&score).unwrap();
        assert!(text.starts_with("Wordle 8 X/6\n"), "{text}");
        assert_eq!(text.lines().count(), 2 + 7);
    }

    #[test]
    fn share_text_rejects_bad_guess() {
        let score = Score::new(1, DayDate::new(2021, 6, 20), "nymph", vec!["toolong".into()]);
        assert!(share_text(&score).is_err());
    }

    #[test]
    fn tile_row_has_one_tile_per_letter() {
        let row = tile_row("yelps", &[LetterResult::Wrong; 5]);
        for letter in ["Y", "E", "L", "P", "S"] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
