//! Terminal rendering

use std::io::{self, Write};

use console::{style, Style};
use triage_engine::{EvaluationResult, Symptom, Tier};
use triage_kb::DISCLAIMER;

const RULE_WIDTH: usize = 70;

#[derive(Debug, Default, Clone, Copy)]
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self) {
        let line = "═".repeat(RULE_WIDTH);
        println!();
        println!("{}", style(&line).bold());
        println!(
            "{}",
            style("  NEUTRAL MINDS  -  Medical Triage Expert System").bold()
        );
        println!("{}", style("  Rule-Based Urgency Classification").dim());
        println!("{}", style(&line).bold());
    }

    pub fn print_disclaimer(&self) {
        println!();
        println!("{}", style("  DISCLAIMER").yellow().bold());
        for line in wrap(DISCLAIMER, RULE_WIDTH - 4) {
            println!("  {}", style(line).yellow());
        }
        println!();
    }

    pub fn print_symptom_menu(&self, symptoms: &[Symptom]) {
        println!();
        println!("{}", style("Available Symptoms:").bold());
        println!("{}", "-".repeat(50));
        for (i, symptom) in symptoms.iter().enumerate() {
            println!(
                "  {:>2}. {} {}",
                i + 1,
                symptom.description,
                style(format!("({})", symptom.id)).dim()
            );
        }
        println!("{}", "-".repeat(50));
        println!("  {}", style(" 0.  Done - Run triage").bold());
        println!("  {}", style("-1.  Clear all symptoms").bold());
        println!("  {}", style("-2.  Quit").bold());
        println!("  {}", style("rm <number|id>  Remove a symptom").dim());
        println!();
    }

    /// Numbered vocabulary without the menu commands
    pub fn print_symptom_list(&self, symptoms: &[Symptom]) {
        for (i, symptom) in symptoms.iter().enumerate() {
            println!("{:>3}. {:<24} {}", i + 1, symptom.id, symptom.description);
        }
    }

    pub fn print_selected<'a, I>(&self, selected: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        println!();
        println!("{}", style("Currently selected symptoms:").bold());
        for (id, description) in selected {
            println!(
                "  {} {} {}",
                style("✓").green(),
                description,
                style(format!("({id})")).dim()
            );
        }
    }

    pub fn print_result(&self, result: &EvaluationResult) {
        let stdout = io::stdout();
        if let Err(e) = self.write_result(&mut stdout.lock(), result) {
            self.print_error(&format!("Failed to print result: {e}"));
        }
    }

    /// Render a triage result with its lower-priority findings
    pub fn write_result<W: Write>(&self, out: &mut W, result: &EvaluationResult) -> io::Result<()> {
        let level = result.level();
        let primary = tier_style(level);
        let label = level.as_str().to_uppercase();

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "{}", primary.apply_to(format!("  TRIAGE RESULT:  {label}")).bold())?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            style(format!("Triggered Rules (highest priority - {label}):")).bold()
        )?;
        for (i, explanation) in result.explanations().iter().enumerate() {
            writeln!(
                out,
                "  {} {}",
                primary.apply_to(format!("▸ Rule {}:", i + 1)),
                explanation
            )?;
        }

        let mut lower = result.lower_findings().peekable();
        if lower.peek().is_some() {
            writeln!(out)?;
            writeln!(out, "{}", style("Other matching levels (lower priority):").bold())?;
            for findings in lower {
                writeln!(out)?;
                let tag = format!("[{}]", findings.tier.as_str().to_uppercase());
                writeln!(out, "  {}", tier_style(findings.tier).apply_to(tag))?;
                for rule in &findings.fired {
                    writeln!(out, "    ▸ {}", rule.explanation)?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", style("Recommended Action:").bold())?;
        writeln!(out, "  {}", primary.apply_to(result.recommended_action()))?;
        writeln!(out)
    }

    pub fn print_success(&self, message: &str) {
        println!("  {} {}", style("✓").green(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("  {} {}", style("ⓘ").cyan(), message);
    }

    pub fn print_warning(&self, message: &str) {
        println!("  {} {}", style("⚠").yellow(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("  {} {}", style("✗").red().bold(), message);
    }

    pub fn print_goodbye(&self) {
        println!();
        println!("Goodbye! Remember: consult a real medical professional.");
        println!();
    }
}

fn tier_style(tier: Tier) -> Style {
    match tier {
        Tier::Critical => Style::new().red(),
        Tier::Urgent => Style::new().yellow(),
        Tier::Moderate => Style::new().cyan(),
        Tier::Low => Style::new().green(),
        Tier::None => Style::new().dim(),
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
