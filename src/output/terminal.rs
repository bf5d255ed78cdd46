// Colored terminal output for `analyze` and `compare`.

use colored::Colorize;

use super::truncate_chars;
use crate::analysis::{DocumentSignals, RelationshipResult, RelationshipType};

/// Longest text excerpt echoed back in headers.
const EXCERPT_CHARS: usize = 60;

/// Display the signals extracted from one text.
pub fn display_signals(text: &str, signals: &DocumentSignals) {
    println!(
        "\n{}",
        format!("=== Analysis of \"{}\" ===", truncate_chars(text, EXCERPT_CHARS)).bold()
    );

    println!("\n  {}", "Entities".dimmed());
    if signals.entities.is_empty() {
        println!("    (none)");
    }
    for entity in &signals.entities {
        println!(
            "    {:<30} {:<12} {}",
            entity.text,
            entity.label.as_str().cyan(),
            format!("[{}..{}]", entity.start, entity.end).dimmed()
        );
    }

    println!("\n  {}", "Key phrases".dimmed());
    if signals.key_phrases.is_empty() {
        println!("    (none)");
    }
    for phrase in &signals.key_phrases {
        println!("    {}", phrase);
    }

    println!("\n  {}", "Tags".dimmed());
    let tags: Vec<&str> = signals.tags.iter().map(String::as_str).collect();
    if tags.is_empty() {
        println!("    (none)");
    } else {
        println!("    {}", tags.join(", "));
    }
    println!();
}

/// Display the comparison of two texts.
pub fn display_relationship(text1: &str, text2: &str, result: &RelationshipResult) {
    println!("\n{}", "=== Relationship ===".bold());
    println!("  1: {}", truncate_chars(text1, EXCERPT_CHARS));
    println!("  2: {}", truncate_chars(text2, EXCERPT_CHARS));
    println!();
    println!("  Similarity:   {:.3}", result.similarity);
    println!(
        "  Relationship: {}",
        colorize_relationship(result.relationship_type)
    );

    println!("\n  {}", "Shared entities".dimmed());
    if result.shared_entities.is_empty() {
        println!("    (none)");
    }
    for entity in &result.shared_entities {
        println!("    {:<30} {}", entity.text, entity.label.as_str().cyan());
    }
    println!();
}

fn colorize_relationship(kind: RelationshipType) -> String {
    match kind {
        RelationshipType::VerySimilar => kind.as_str().green().bold().to_string(),
        RelationshipType::Related => kind.as_str().yellow().to_string(),
        RelationshipType::SomewhatRelated => kind.as_str().normal().to_string(),
    }
}
