/*!
A solve, from the formula of a context to a [report](crate::reports::Report).

# Overview

1. The formula of the context is [canonicalised](crate::preprocessing::canonical).
2. Every atom of the formula (as given) is made free.
3. The canonical clauses are [grouped](crate::preprocessing::groups) by support.
4. For each group, in order:
   - The group is [narrowed](crate::procedures::narrow).
   - If some clause of the group was active, the formula is [propagated](crate::procedures::propagate).
5. If no contradiction was found the context is consistent, otherwise the context is unsatisfiable.

The order of groups is fixed, and determines which contradiction (if any) is found first.

A group skipped as inactive is not followed by propagation.
This makes no difference, as the previous group already ended with propagation to a fixpoint and no domain has changed since.

# Example

```rust
# use sieve_lib::context::Context;
# use sieve_lib::config::Config;
# use sieve_lib::reports::Report;
# use sieve_lib::types::err::Contradiction;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

assert_eq!(the_context.solve(), Report::Unsatisfiable);
assert_eq!(
    the_context.contradiction(),
    Some(&Contradiction::Exhaustion { support: vec![1], clauses: 2 })
);
```
*/

use std::time::Instant;

use crate::{
    context::{Context, ContextState, Counters},
    misc::log::targets::{self},
    preprocessing::{
        canonical::canonicalise,
        groups::{group_by_support, Group},
    },
    procedures::narrow::NarrowOk,
    reports::Report,
    structures::{clause::Clause, valuation::DomainMap},
    types::err::Contradiction,
};

impl Context {
    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Report {
        let start = Instant::now();

        self.state = ContextState::Solving;
        self.counters = Counters::default();

        self.canonical = canonicalise(self.formula.iter().cloned());
        self.domains = DomainMap::fresh(self.formula.iter().flat_map(|clause| clause.atoms()));

        let groups = group_by_support(&self.canonical);
        let result = self.sieve(&groups);

        self.counters.time = start.elapsed();

        match result {
            Ok(()) => {
                log::info!(target: targets::PROPAGATION, "No contradiction, with {} of {} atoms fixed", self.domains.fixed_count(), self.domains.atom_count());
                self.state = ContextState::Consistent;
            }

            Err(contradiction) => {
                log::info!(target: targets::PROPAGATION, "Contradiction: {contradiction}");
                self.state = ContextState::Unsatisfiable(contradiction);
            }
        }

        self.report()
    }

    /// Narrows and propagates each group in turn, stopping at the first contradiction.
    fn sieve(&mut self, groups: &[Group]) -> Result<(), Contradiction> {
        for group in groups {
            self.counters.groups += 1;

            match self.narrow(group)? {
                NarrowOk::Inactive => self.counters.inactive_groups += 1,

                NarrowOk::Narrowed(_) => {
                    self.propagate()?;
                }
            }
        }
        Ok(())
    }
}
