//! # Syntax Tour
//!
//! A fixed, ordered tour of basic language features. Each feature is a
//! demonstration step that prints to an output sink; the [`Runner`] executes
//! them top to bottom and returns a [`Report`].
//!
//! ## Steps
//!
//! - Function call, `if`/`elif`/`else`, `while` countdown
//! - `for` over three ranges
//! - `try`/`except`/`finally` around a division by zero
//! - Lambda call, boolean and negative literals, list indexing
//! - A reference to a list that was never declared, which fails every run
//!
//! ## Example
//!
//! ```
//! use syntax_tour::{ErrorPolicy, Runner};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let report = Runner::new(ErrorPolicy::Continue).run(&mut out);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Mayor a 10\n5\n"));
//! assert!(text.ends_with("14\nNaranja\n"));
//! assert_eq!(report.first_failure().unwrap().step, "undefined-reference");
//! ```
//!
//! With [`ErrorPolicy::Halt`] (the default) the run stops at the first
//! failing step and the remaining steps are reported as skipped.

pub mod error;
pub mod ops;
pub mod runner;
pub mod scope;
pub mod session;
pub mod steps;
pub mod value;

// Re-export main types for convenience
pub use error::{RuntimeError, StepError};
pub use runner::{ErrorPolicy, Report, Runner, StepOutcome, StepStatus};
pub use scope::Scope;
pub use session::{guarded, Session};
pub use steps::{Step, STEPS};
pub use value::Value;
