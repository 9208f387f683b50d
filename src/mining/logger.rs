//! Progress logging for mining runs.
//!
//! Plain leveled logging to stderr. Tests run with
//! [`Verbosity::Silent`]; the demo binary runs at [`Verbosity::Info`].

/// Verbosity level for mining progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Per-phase and per-level progress lines.
    #[default]
    Info,
    /// Additional detail (individual candidate counts).
    Debug,
}

/// Leveled logger used by the miner and rule generator.
#[derive(Debug, Clone)]
pub struct MiningLogger {
    verbosity: Verbosity,
}

impl MiningLogger {
    /// Create a logger with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log a message at Info level.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[apriori] {message}");
        }
    }

    /// Log a message at Debug level.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            eprintln!("[apriori] {message}");
        }
    }

    /// Log one mining level: candidates generated and survivors kept.
    pub fn log_level(&self, level: usize, candidates: usize, frequent: usize) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[apriori] level {level}: {candidates} candidates, {frequent} frequent");
        }
    }
}
