//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{CheckReport, SimulationResult};
use colored::Colorize;

/// Number of rejected entries listed by [`print_check_report`]
const MAX_REJECTED_SHOWN: usize = 20;

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION:".bright_cyan().bold(),
        format!("{} level, {} guesser", result.level, result.guesser).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Wins / losses:    {} / {}",
        result.wins.to_string().green(),
        (result.rounds - result.wins).to_string().red()
    );
    println!("   Avg wrong guesses: {:.2}", result.average_wrong_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Lives remaining:".bright_cyan().bold());
    let mut lives: Vec<(&u32, &usize)> = result.lives_distribution.iter().collect();
    lives.sort_unstable_by(|a, b| b.0.cmp(a.0));
    for (left, count) in lives {
        let pct = if result.rounds == 0 {
            0.0
        } else {
            (*count as f64 / result.rounds as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if *left == 0 { bar.red() } else { bar.green() };
        println!("   {left:2}: {bar} {count:5} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n💀 {}", "Lost most often:".bright_cyan().bold());
        for (secret, count) in &result.hardest {
            println!("   {:<30} {count}", secret.bright_white());
        }
    }
    println!();
}

/// Print the result of checking a word list
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} ({} level)",
        report.path.display().to_string().bright_yellow().bold(),
        report.level
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Accepted: {}", report.accepted.to_string().green().bold());
    println!("   Rejected: {}", report.rejected.len().to_string().red().bold());

    if !report.rejected.is_empty() {
        println!("\n   Rejected entries:");
        for entry in report.rejected.iter().take(MAX_REJECTED_SHOWN) {
            println!("     • {entry}");
        }
        let hidden = report.rejected.len().saturating_sub(MAX_REJECTED_SHOWN);
        if hidden > 0 {
            println!("     … and {hidden} more");
        }
    }

    println!();
    if report.is_usable() {
        println!("{}", "✅ List is usable".green().bold());
    } else {
        println!(
            "{}",
            "❌ No usable entries; the built-in list would be used instead"
                .red()
                .bold()
        );
    }
}
