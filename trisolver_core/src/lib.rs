//! # trisolver_core - Triangle Solving Engine
//!
//! `trisolver_core` solves a triangle from three known values in one of the
//! four classical configurations (SSS, SAS, ASA, SSA) and derives its area,
//! perimeter, type and class. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Typed angles**: Degrees and radians never mix
//! - **Rich Errors**: Usage mistakes and impossible triangles are distinct
//!
//! ## Quick Start
//!
//! ```rust
//! use trisolver_core::command::{parse_line, Command};
//! use trisolver_core::report::format_result;
//! use trisolver_core::settings::SolverSettings;
//! use trisolver_core::solvers::solve;
//!
//! let settings = SolverSettings::default();
//! if let Command::Solve(input) = parse_line("SSS 3 4 5").unwrap() {
//!     let text = format_result(solve(&input, &settings), &settings).unwrap();
//!     assert!(text.contains("Type      = scalene, right"));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`command`] - Line parsing into commands
//! - [`solvers`] - SSS, SAS, ASA and SSA solvers and the dispatcher
//! - [`triangle`] - Solved triangle, type and class
//! - [`equations`] - Law of cosines, law of sines, Heron's formula
//! - [`report`] - Terminal output formatting
//! - [`settings`] - Equality rule and output precision
//! - [`units`] - Degree and radian wrappers
//! - [`errors`] - Structured error types

pub mod command;
pub mod equations;
pub mod errors;
pub mod report;
pub mod settings;
pub mod solvers;
pub mod triangle;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use command::{parse_line, Command};
pub use errors::{TriError, TriResult};
pub use settings::{Comparison, SolverSettings};
pub use solvers::{solve, Mode, SolveInput, SolveOutcome};
pub use triangle::{Solution, Triangle, TriangleClass, TriangleType};
