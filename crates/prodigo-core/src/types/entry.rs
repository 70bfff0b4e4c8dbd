//! Entry-point classification.

use std::fmt;

/// Kind of externally reachable entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// A portal rule, reached through the web UI.
    Web,
    /// A workflow whose name marks it as a main flow.
    Workflow,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Workflow => "workflow",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
