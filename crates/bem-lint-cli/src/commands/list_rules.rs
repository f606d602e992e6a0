//! List rules command implementation.

use bem_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<24} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<8} {:<24} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nUse --rules to run a subset, e.g.:");
    println!("  bem-lint check --rules no-parent-block,recursive-block");
    println!("  bem-lint check --rules BEM004,BEM005");
}
