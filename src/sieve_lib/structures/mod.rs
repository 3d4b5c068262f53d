//! Key structures, such as literals, clauses, and the domains of atoms.
//!
//! As elsewhere, a structure is made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula is a collection of [clauses](clause), interpreted as the conjunction of those clauses.
//! The formula given to a [context](crate::context) is kept as given, and a [canonical](crate::preprocessing::canonical) copy is made for each solve.
//!
//! ## Domains
//!
//! Rather than a (partial) valuation, each atom is paired with the set of values it may still take.
//! See [domain] and [valuation].

pub mod atom;
pub mod clause;
pub mod domain;
pub mod literal;
pub mod valuation;
