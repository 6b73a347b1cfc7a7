//! The four generators and the report they hand back to the CLI.

pub mod component;
pub mod service;
pub mod store;
pub mod structure;

use std::path::PathBuf;

/// What a single generator run did.
///
/// Generators never print; the CLI renders the report once the run succeeded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// First status line, e.g. `Creating component: Button`
    pub heading: String,
    /// Absolute directory the files went into
    pub location: PathBuf,
    /// Created entries, relative to `location`
    pub created: Vec<PathBuf>,
    /// Conditions worth mentioning that did not stop the run
    pub warnings: Vec<String>,
    pub summary: String,
    /// Follow-up hints printed after the summary
    pub notes: Vec<String>,
}

impl Report {
    /// Renders the status lines shown on stdout.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.heading.clone(), format!("  Location: {}", self.location.display())];
        lines.extend(self.created.iter().map(|p| format!("  Created: {}", p.display())));
        lines.push(String::new());
        lines.push(self.summary.clone());
        if !self.notes.is_empty() {
            lines.push(String::new());
            lines.extend(self.notes.iter().cloned());
        }
        lines
    }
}
