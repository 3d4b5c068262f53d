/*!
Unit propagation, to a fixpoint.

Each pass examines every clause of the canonical formula, in order, with respect to the current domains:
- A satisfied clause is skipped.
- A [falsified](crate::structures::clause::ClauseStatus::Falsified) clause is a [contradiction](Contradiction::Falsified).
- A [unit](crate::structures::clause::ClauseStatus::Unit) clause fixes the atom of its only free literal to the polarity of the literal.
- Any other clause is skipped.

Values fixed during a pass are seen by later clauses of the same pass.
A pass which fixes some atom is followed by another pass, and propagation ends with a pass which fixes nothing.

As each pass either fixes some (free) atom or ends propagation, and the atoms of a formula are finite, propagation always terminates.

```rust
# use sieve_lib::context::Context;
# use sieve_lib::config::Config;
# use sieve_lib::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1]).is_ok());
assert!(the_context.add_clause([-1, 2]).is_ok());
assert!(the_context.add_clause([-2, -3]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.value_of(2), Some(true));
assert_eq!(the_context.value_of(3), Some(false));
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseStatus},
        valuation::FixOk,
    },
    types::err::Contradiction,
};

impl Context {
    /// For documentation see [procedures::propagate](crate::procedures::propagate).
    ///
    /// Returns the count of atoms fixed.
    pub fn propagate(&mut self) -> Result<usize, Contradiction> {
        let mut total = 0;

        loop {
            self.counters.propagation_passes += 1;
            let mut fixed = 0;

            for clause in &self.canonical {
                match clause.status_on(&self.domains) {
                    ClauseStatus::Satisfied | ClauseStatus::Open => {}

                    ClauseStatus::Falsified => {
                        log::trace!(target: targets::PROPAGATION, "Falsified {clause:?}");
                        return Err(Contradiction::Falsified(clause.clone()));
                    }

                    ClauseStatus::Unit(literal) => match self.domains.fix(literal)? {
                        FixOk::Fixed => {
                            log::trace!(target: targets::PROPAGATION, "Consequence of {clause:?} is {literal}");
                            fixed += 1;
                        }
                        FixOk::Unchanged => {}
                    },
                }
            }

            log::trace!(target: targets::PROPAGATION, "Pass {} fixed {fixed}", self.counters.propagation_passes);
            self.counters.propagated += fixed;
            total += fixed;

            if fixed == 0 {
                break;
            }
        }

        Ok(total)
    }
}
