//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "bem-lint.toml";

const DEFAULT_CONFIG: &str = r#"# bem-lint configuration

# Lowest severity that makes `bem-lint check` exit non-zero:
# "info", "warning" or "error"
fail_on = "error"

[analyzer]
# Directory patterns are resolved against
root = "."

# Documents to check
include = ["**/*.html"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Rule configurations
# Each rule can be disabled or have its severity overridden.
# Run `bem-lint list-rules` for the full list.

[rules.no-parent-block]
enabled = true

[rules.mixin-before-block]
enabled = true
# severity = "warning"

# [rules.modifier-before-parent]
# severity = "info"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: bem-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
