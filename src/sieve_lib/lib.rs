//! A library for simplifying boolean formulas written in conjunctive normal form.
//!
//! otter_sieve does not search for a model.
//! Instead, a formula is canonicalised, its clauses are grouped by the atoms they mention, and two cheap techniques are interleaved over the groups:
//! - A majority heuristic, which fixes the value of an atom when enough of the (still open) clauses of a group agree on its polarity.
//! - Unit propagation, run to a fixpoint after each group.
//!
//! A solve ends with either a [contradiction](crate::types::err::Contradiction), in which case the formula is unsatisfiable, or with a (possibly partial) [assignment](crate::reports::Assignment).
//! In the second case the formula is only reported as satisfiable *as long as there exists at least one assignment*, as no contradiction being found is not a proof of satisfiability.
//!
//! # Orientation
//!
//! As with other otter crates, the library is designed around a [context].
//!
//! - Clauses are added to a context either [programatically](crate::context::Context::add_clause) or through a [DIMACS](crate::context::Context::read_dimacs) representation.
//! - A [solve](crate::procedures::solve) canonicalises the clauses [preprocessing], then visits each group of clauses in turn.
//! - Each group is first [narrowed](crate::procedures::narrow) and then [propagated](crate::procedures::propagate).
//! - The outcome is read as a [verdict](crate::reports::Verdict).
//!
//! # Example
//!
//! ```rust
//! # use sieve_lib::config::Config;
//! # use sieve_lib::context::Context;
//! # use sieve_lib::reports::{Report, Verdict};
//! # use sieve_lib::structures::domain::Domain;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clause(vec![1, -3]).is_ok());
//! assert!(the_context.add_clause(vec![2, 3, -1]).is_ok());
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//!
//! let Ok(Verdict::Satisfiable(assignment)) = the_context.verdict() else {
//!     panic!("Expected an assignment");
//! };
//! assert!(assignment.iter().all(|(_, domain)| domain == Domain::Free));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No logger is provided by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod misc;
pub mod preprocessing;
pub mod reports;
