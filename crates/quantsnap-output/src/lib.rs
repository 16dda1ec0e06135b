#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantsnap/quantsnap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod leaderboard;
pub mod report;

pub use export::{ExportError, ExportFormat, Exporter, LeaderboardRow};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use report::{ReportError, TickerReport, TickerReportBuilder};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
