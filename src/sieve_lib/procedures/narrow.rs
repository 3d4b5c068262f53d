/*!
The majority heuristic, applied to a [group](crate::preprocessing::groups::Group) of clauses.

For a group of *g* clauses over *n* atoms:

# Exhaustion

If *g* ≥ 2^*n* the group is taken to be unsatisfiable, and a [contradiction](Contradiction::Exhaustion) is returned.
This is a test on the count of clauses only.
No check is made that each of the 2^*n* sign combinations is present, and so the test is a (loose) over-approximation.

# Narrowing

Otherwise, the *active* clauses of the group are those without a true literal.
For each active clause and each free atom of the clause, the polarity of the first literal of the clause on the atom is counted.
Then, for each free atom of the group, in ascending order:
- If the positive count is greater than 2^(*n*-1), the atom is fixed to true.
- Else, if the negative count is greater than 2^(*n*-1), the atom is fixed to false.

The positive count is always checked first.

This is a heuristic, and not a sound rule of inference.
An atom may be fixed to a value on which the formula is unsatisfiable, though the formula is satisfiable on the other value.

```rust
# use sieve_lib::context::Context;
# use sieve_lib::config::Config;
# use sieve_lib::reports::Report;
# use sieve_lib::structures::domain::Domain;
let mut the_context = Context::from_config(Config::default());

// Five clauses over three atoms, with 1 positive in each.
// 5 > 2^(3-1), and so 1 is fixed to true.
for clause in [[1, 2, 3], [1, 3, 2], [2, 1, 3], [1, -2, 3], [1, 2, -3]] {
    assert!(the_context.add_clause(clause).is_ok());
}

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.domain_of(1), Domain::Fixed(true));
assert_eq!(the_context.domain_of(2), Domain::Free);
assert_eq!(the_context.domain_of(3), Domain::Free);
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    context::Context,
    misc::log::targets::{self},
    preprocessing::groups::Group,
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::FixOk,
    },
    types::err::Contradiction,
};

/// Ok results when narrowing a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NarrowOk {
    /// Every clause of the group was satisfied, and so the group was skipped.
    Inactive,

    /// The given count of atoms were fixed.
    Narrowed(usize),
}

/// A count of the polarities of an atom across the active clauses of a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolarityCount {
    pub positive: usize,
    pub negative: usize,
}

/// 2^exponent, if representable.
pub fn power_of_two(exponent: usize) -> Option<usize> {
    u32::try_from(exponent)
        .ok()
        .and_then(|exponent| 1_usize.checked_shl(exponent))
}

/// Whether the count of clauses in the group is at least 2^width.
///
/// A group too wide for 2^width to be represented is never exhausted.
pub fn is_exhausted(group: &Group) -> bool {
    power_of_two(group.width()).is_some_and(|bound| group.size() >= bound)
}

impl Context {
    /// For documentation see [procedures::narrow](crate::procedures::narrow).
    pub fn narrow(&mut self, group: &Group) -> Result<NarrowOk, Contradiction> {
        if self.config.switch.exhaustion && is_exhausted(group) {
            log::trace!(target: targets::NARROWING, "{} clauses exhaust {:?}", group.size(), group.support);
            return Err(Contradiction::Exhaustion {
                support: group.support.clone(),
                clauses: group.size(),
            });
        }

        let active = group
            .clauses
            .iter()
            .map(|index| &self.canonical[*index])
            .filter(|clause| !clause.satisfied_on(&self.domains))
            .collect::<Vec<_>>();

        if active.is_empty() {
            log::trace!(target: targets::NARROWING, "Skipped inactive group {:?}", group.support);
            return Ok(NarrowOk::Inactive);
        }

        if !self.config.switch.narrowing {
            return Ok(NarrowOk::Narrowed(0));
        }

        let mut counts: BTreeMap<Atom, PolarityCount> = group
            .support
            .iter()
            .map(|atom| (*atom, PolarityCount::default()))
            .collect();

        for clause in active {
            let mut counted = BTreeSet::new();
            for literal in clause.literals() {
                if self.domains.domain_of(literal.atom()).is_fixed() {
                    continue;
                }
                if !counted.insert(literal.atom()) {
                    continue;
                }
                if let Some(count) = counts.get_mut(&literal.atom()) {
                    match literal.polarity() {
                        true => count.positive += 1,
                        false => count.negative += 1,
                    }
                }
            }
        }

        // Above 2^(n-1), and so a width of zero never narrows.
        let Some(threshold) = group.width().checked_sub(1).and_then(power_of_two) else {
            return Ok(NarrowOk::Narrowed(0));
        };

        let forced = counts
            .into_iter()
            .filter(|(atom, _)| !self.domains.domain_of(*atom).is_fixed())
            .filter_map(|(atom, count)| {
                if count.positive > threshold {
                    Some(CLiteral::new(atom, true))
                } else if count.negative > threshold {
                    Some(CLiteral::new(atom, false))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        let mut narrowed = 0;
        for literal in forced {
            match self.domains.fix(literal)? {
                FixOk::Fixed => {
                    log::trace!(target: targets::NARROWING, "Majority of {:?} fixed {literal}", group.support);
                    narrowed += 1;
                }
                FixOk::Unchanged => {}
            }
        }

        self.counters.narrowed += narrowed;
        Ok(NarrowOk::Narrowed(narrowed))
    }
}
