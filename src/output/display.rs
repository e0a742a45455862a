//! Display functions for command results

use super::formatters::{create_progress_bar, share_text, tile_row, tries_label};
use crate::commands::{CheckResult, ListResult, PuzzleNumber, ScoreStatistics};
use crate::core::{MAX_TRIES, Score};
use colored::Colorize;

/// Print a single score as a header line and a grid of colored tiles
pub fn print_score(score: &Score) {
    let status = if score.is_solved() {
        tries_label(score.tries.len()).green()
    } else {
        "not solved".red()
    };

    println!(
        "\n{} {}  {}  {}",
        "Wordle".bright_cyan().bold(),
        score.id.to_string().bright_yellow().bold(),
        score.date.to_string().bright_black(),
        status
    );

    match score.results() {
        Ok(rows) => {
            for (guess, results) in score.tries.iter().zip(&rows) {
                println!("  {}", tile_row(guess, results));
            }
        }
        Err(error) => println!("  {}", format!("⚠ {error}").yellow()),
    }
}

/// Print listed scores, newest last
pub fn print_list_result(result: &ListResult) {
    if let Some(error) = &result.fetch_error {
        println!(
            "{}",
            format!("⚠ Could not fetch scores ({error}); showing cached results").yellow()
        );
    }

    if result.scores.is_empty() {
        println!("No scores recorded yet.");
        return;
    }

    for score in &result.scores {
        print_score(score);
    }
    println!();
}

/// Print a freshly added score with its share text
pub fn print_added_score(score: &Score) {
    println!("{}", "✅ Score added".green().bold());
    print_score(score);
    if let Ok(text) = share_text(score) {
        println!("\n{text}\n");
    }
}

/// Print checked guesses
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Word: {}", result.word.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    for (i, checked) in result.guesses.iter().enumerate() {
        println!("{:>2}. {}", i + 1, tile_row(&checked.guess, &checked.results));
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {}", tries_label(result.guesses.len()))
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Not solved".red().bold());
    }
}

/// Print a puzzle number lookup
pub fn print_puzzle_number(result: &PuzzleNumber) {
    println!(
        "{} is Wordle {}",
        result.date.to_string().bright_black(),
        result.number.to_string().bright_yellow().bold()
    );
}

/// Print aggregated statistics with a guess distribution chart
pub fn print_statistics(stats: &ScoreStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:          {}", stats.total);
    println!("   Solved:          {}", stats.solved.to_string().green());
    if stats.failed > 0 {
        println!("   Failed:          {}", stats.failed.to_string().red());
    }
    println!(
        "   Average guesses: {}",
        format!("{:.2}", stats.average_tries).bright_yellow().bold()
    );
    println!("   Longest streak:  {}", stats.longest_streak);

    let letters = stats.letters;
    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    println!("   Correct:         {}", letters.correct);
    println!("   Wrong position:  {}", letters.wrong_position);
    println!("   Wrong:           {}", letters.wrong);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = stats.distribution.values().copied().max().unwrap_or(0);
    for tries in 1..=MAX_TRIES {
        let count = stats.distribution.get(&tries).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {tries}: {} {count}", bar.green());
    }

    if !stats.invalid.is_empty() {
        let ids: Vec<String> = stats.invalid.iter().map(ToString::to_string).collect();
        println!(
            "\n{}",
            format!("⚠ Skipped unreadable puzzles: {}", ids.join(", ")).yellow()
        );
    }
}
