//! Roulette Analyst - rolling-history pattern analysis for European roulette
//!
//! Records the last twenty spins and runs five ordered heuristics over them,
//! producing one diagnosis/strategy pair per history update.
//!
//! ```ignore
//! use roulette_analyst::Analyst;
//!
//! let mut analyst = Analyst::new()?;
//! for n in [3, 3, 3, 20, 10] {
//!     analyst.add(n);
//! }
//! println!("{}", analyst.analyze().strategy);
//! ```

pub mod analyst;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod patterns;
pub mod reporters;
pub mod wheel;

pub use analyst::{Analyst, MIN_HISTORY};
pub use error::{AnalystError, AnalystResult};
pub use history::{History, HISTORY_CAPACITY};
pub use models::{
    Analysis, NumberInfo, NumberView, PatternKind, PatternSummary, Section, SessionReport,
};
pub use patterns::{Pattern, PatternContext, PatternEngine, PatternEngineBuilder};
pub use wheel::WheelTables;
