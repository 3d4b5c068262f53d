/*!
Procedures of a solve.

A solve is a sequence of procedures applied to a context:
- [solve] canonicalises the formula, builds the groups, and drives the remaining procedures over each group in turn.
- [narrow] applies the majority heuristic to a single group.
- [propagate] applies unit propagation to the whole (canonical) formula, until nothing changes.

Each procedure which may find a [contradiction](crate::types::err::Contradiction) returns it as an error, and a solve stops at the first contradiction returned.
*/

pub mod narrow;
pub mod propagate;
pub mod solve;
