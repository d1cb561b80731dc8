//! Shared issue reporting for `check`, `validate` and `quick-check`.

use anyhow::Result;
use colored::Colorize;

use condgraph::domain::conditions::ValidationResult;

/// Severity level for a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single issue against one question
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    /// Question id, or `"graph"` for snapshot-wide findings
    pub item_id: String,
    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, item_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            item_id: item_id.into(),
            message: message.into(),
        }
    }

    /// Display the issue with colored output
    pub fn display(&self) {
        let icon = match self.severity {
            Severity::Warning => "⚠".yellow(),
            Severity::Error => "✗".red(),
        };
        println!("  {} {}: {}", icon, self.item_id.cyan(), self.message);
    }
}

/// Issues collected across a run, with per-item pass/warn/fail counts
#[derive(Debug, Default)]
pub struct CheckOutcome {
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    pub issues: Vec<Issue>,
}

impl CheckOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one validated item.
    pub fn add_result(&mut self, item_id: &str, result: &ValidationResult) {
        self.total += 1;
        if !result.errors.is_empty() {
            self.failed += 1;
        } else if !result.warnings.is_empty() {
            self.warned += 1;
        } else {
            self.passed += 1;
        }

        for error in &result.errors {
            self.issues.push(Issue::new(Severity::Error, item_id, error));
        }
        for warning in &result.warnings {
            self.issues
                .push(Issue::new(Severity::Warning, item_id, warning));
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn display_issues(&self) {
        for issue in &self.issues {
            issue.display();
        }
    }

    /// Display a summary of the run
    pub fn display_summary(&self, label: &str) {
        println!();
        println!("{}", "━".repeat(60).cyan());

        let status_icon = if self.is_valid() {
            "✓".green()
        } else {
            "✗".red()
        };

        print!("{} {}: ", status_icon, label);
        if self.total > 0 {
            print!("{} checked", self.total);
            if self.passed > 0 {
                print!(", {} {}", self.passed, "passed".green());
            }
            if self.warned > 0 {
                print!(", {} {}", self.warned, "warned".yellow());
            }
            if self.failed > 0 {
                print!(", {} {}", self.failed, "failed".red());
            }
            println!();
        } else {
            println!("no conditions to check");
        }

        let error_count = self.count(Severity::Error);
        let warning_count = self.count(Severity::Warning);
        if error_count > 0 || warning_count > 0 {
            print!("  ");
            if error_count > 0 {
                print!(
                    "{} {}",
                    error_count,
                    if error_count == 1 { "error" } else { "errors" }.red()
                );
            }
            if error_count > 0 && warning_count > 0 {
                print!(", ");
            }
            if warning_count > 0 {
                print!(
                    "{} {}",
                    warning_count,
                    if warning_count == 1 {
                        "warning"
                    } else {
                        "warnings"
                    }
                    .yellow()
                );
            }
            println!();
        }

        println!("{}", "━".repeat(60).cyan());
    }

    /// Fail when any error was recorded, so the binary exits non-zero
    pub fn ensure_valid(&self) -> Result<()> {
        let error_count = self.count(Severity::Error);
        if error_count > 0 {
            anyhow::bail!(
                "{} condition error(s) in {} question(s)",
                error_count,
                self.failed
            );
        }
        Ok(())
    }
}
