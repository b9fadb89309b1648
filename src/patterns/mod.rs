//! History patterns
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PatternEngine                          │
//! │  - Registers patterns in priority order                     │
//! │  - Evaluates them one by one                                │
//! │  - Returns the first analysis that fires                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Pattern Trait                          │
//! │  - kind() / name(): identifier                              │
//! │  - evaluate(ctx): Some(Analysis) when the trigger holds     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Patterns (priority order)
//! 1. `DoubleHalfPattern` - a spin about double/half of the previous one
//! 2. `HorseWithBreakPattern` - lateral horse pair after a triad break
//! 3. `BackAndForthPattern` - section alternation A, B, A
//! 4. `FalseTruePattern` - digit-sum terminal turns into a real terminal
//! 5. `TerminalDominationPattern` - one terminal owns the last seven spins

mod base;
mod engine;

mod back_and_forth;
mod double_half;
mod false_true;
mod horse_with_break;
mod terminal_domination;

pub use base::{Pattern, PatternContext};
pub use engine::{default_patterns, PatternEngine, PatternEngineBuilder};

pub use back_and_forth::BackAndForthPattern;
pub use double_half::DoubleHalfPattern;
pub use false_true::FalseTruePattern;
pub use horse_with_break::HorseWithBreakPattern;
pub use terminal_domination::TerminalDominationPattern;
