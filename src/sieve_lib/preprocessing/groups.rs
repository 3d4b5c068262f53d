/*!
Groups of clauses, bucketed by support.

The support of a clause is the (sorted) set of atoms in the clause, and two clauses belong to the same group exactly when their supports are equal.

Groups are ordered by the size of their support and then by the support itself, so groups over few atoms --- where a contradiction is cheap to find --- are visited first.

```rust
# use sieve_lib::preprocessing::groups::group_by_support;
let formula = vec![vec![2], vec![1, -3], vec![-3, 1, 2], vec![-1, 3]];

let groups = group_by_support(&formula);
let supports = groups.iter().map(|g| g.support.clone()).collect::<Vec<_>>();
assert_eq!(supports, vec![vec![2], vec![1, 3], vec![1, 2, 3]]);

assert_eq!(groups[1].clauses, vec![1, 3]);
```
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
    },
};

/// A group of clauses with the same support.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// The atoms of each clause in the group, in ascending order.
    pub support: Vec<Atom>,

    /// Indicies of the clauses in the group, relative to the formula the group was built from.
    pub clauses: Vec<usize>,
}

impl Group {
    /// The number of clauses in the group.
    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    /// The number of atoms in the support of the group.
    pub fn width(&self) -> usize {
        self.support.len()
    }
}

/// Partitions the clauses of a formula into groups of equal support, in group order.
///
/// Within a group, clauses keep the order of the formula.
pub fn group_by_support(formula: &[CClause]) -> Vec<Group> {
    let mut buckets: BTreeMap<(usize, Vec<Atom>), Vec<usize>> = BTreeMap::new();

    for (index, clause) in formula.iter().enumerate() {
        let support = clause.support();
        buckets
            .entry((support.len(), support))
            .or_default()
            .push(index);
    }

    log::info!(target: targets::GROUPING, "{} clauses in {} groups", formula.len(), buckets.len());

    buckets
        .into_iter()
        .map(|((_, support), clauses)| Group { support, clauses })
        .collect()
}
