/*!
Tools for building a context.

Clauses are added to a context as given, with canonicalisation deferred to a solve.
Still, each clause is checked on addition:
- An empty clause is rejected with [EmptyClause](crate::types::err::BuildError::EmptyClause).
- A clause containing `0` is rejected with [ZeroLiteral](crate::types::err::BuildError::ZeroLiteral).
- A clause containing a literal whose atom exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX) is rejected with [AtomLimit](crate::types::err::BuildError::AtomLimit).

Adding a clause after a solve returns the context to the [input](crate::context::ContextState::Input) state.

# Examples

```rust
# use sieve_lib::context::Context;
# use sieve_lib::config::Config;
# use sieve_lib::reports::Report;
# use sieve_lib::types::err::BuildError;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, -2]).is_ok());
assert!(the_context.clause_from_string("-1 2").is_ok());
assert_eq!(the_context.add_clause(vec![]), Err(BuildError::EmptyClause));
assert_eq!(the_context.add_clause(vec![3, 0]), Err(BuildError::ZeroLiteral));
assert_eq!(the_context.add_clause(vec![i32::MIN]), Err(BuildError::AtomLimit));

assert_eq!(the_context.formula().len(), 2);
assert_eq!(the_context.solve(), Report::Satisfiable);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{
        atom::ATOM_MAX,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Checks a clause may be added to a context, without adding the clause.
pub(crate) fn check_clause(clause: &CClause) -> Result<(), err::BuildError> {
    if clause.is_empty() {
        log::warn!(target: targets::BUILD, "Rejected an empty clause");
        return Err(err::BuildError::EmptyClause);
    }

    if clause.contains(&0) {
        log::warn!(target: targets::BUILD, "Rejected {clause:?} as it contains 0");
        return Err(err::BuildError::ZeroLiteral);
    }

    if clause.iter().any(|literal| literal.atom() > ATOM_MAX) {
        log::warn!(target: targets::BUILD, "Rejected {clause:?} as some atom exceeds {ATOM_MAX}");
        return Err(err::BuildError::AtomLimit);
    }

    Ok(())
}

impl Context {
    /// Adds a clause to the formula of the context.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<(), err::BuildError> {
        let clause = clause.into();
        check_clause(&clause)?;

        log::trace!(target: targets::BUILD, "Added {clause:?}");
        self.formula.push(clause);
        self.state = ContextState::Input;
        Ok(())
    }

    /// Adds a clause given as whitespace separated integers, e.g. `"1 -3"`.
    ///
    /// An item which is not an integer is reported by its (zero-based) position in the string.
    pub fn clause_from_string(&mut self, string: &str) -> Result<(), err::ErrorKind> {
        let mut clause = CClause::default();
        for (index, item) in string.split_whitespace().enumerate() {
            match item.parse::<CLiteral>() {
                Ok(literal) => clause.push(literal),
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Item(index))),
            }
        }
        self.add_clause(clause)?;
        Ok(())
    }
}
