#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantsnap/quantsnap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod universe;

// Re-export main types from sub-crates
pub use quantsnap_data as data;
pub use quantsnap_factors as factors;
pub use quantsnap_output as output;
pub use quantsnap_score as score;

// Re-export the engine and common universe types
pub use engine::{ScoringEngine, TickerData};
pub use universe::{PopularStocks, Universe, WorldTopStocks};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
