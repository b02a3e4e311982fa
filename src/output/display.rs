//! Display functions for command results

use super::formatters::{colored_clue, create_progress_bar};
use crate::commands::{CheckReport, ClueReport, SimulationResult};
use crate::core::Palette;
use colored::Colorize;

/// Print a scored guess
pub fn print_clue_report(report: &ClueReport, palette: Palette) {
    println!(
        "\n{} vs {}",
        report.guess.text().to_uppercase().bright_white().bold(),
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        colored_clue(&report.clue),
        report.clue.to_emoji(palette)
    );
    println!("  {}", report.clue.describe().bright_black());
    if report.clue.is_solved() {
        println!("  {}", "That's the target!".green().bold());
    }
}

/// Print the verdict on a candidate guess
pub fn print_check_report(report: &CheckReport) {
    println!(
        "\n{} at {} difficulty:",
        report.candidate.text().to_uppercase().bright_white().bold(),
        report.difficulty.to_string().bright_cyan()
    );

    if report.is_accepted() {
        println!("  {}", "Allowed".green().bold());
        return;
    }
    if !report.known_word {
        println!("  {}", "Not a valid word".red().bold());
    }
    if report.violations.is_empty() {
        return;
    }
    println!("  {}", "Word not allowed".red().bold());
    for message in report.violations.messages() {
        println!("    {}", message.red());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Random bot:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Difficulty:       {}", result.difficulty);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best score:       {}",
        result.max_score.to_string().green()
    );
    println!(
        "   Worst score:      {}",
        result.min_score.to_string().yellow()
    );
    println!("   Hit the target:   {}", result.solved);
    println!(
        "   Survived:         {} (limit {})",
        result.survived, result.max_guesses
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let peak = result.distribution.values().copied().max().unwrap_or(0);
    for (&score, &count) in &result.distribution {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("   {score:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
