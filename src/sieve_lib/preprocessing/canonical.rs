/*!
Canonicalisation of a collection of clauses.

In order:
1. Repeated literals are removed from each clause, keeping the first occurrence.
   A literal is not removed due to its negation, so `[1, -1]` remains `[1, -1]`.
2. Clauses which are identical are collapsed to a single clause.
3. Clauses which are the reversal of some other clause are removed.
   Clauses are visited in lexicographic order (on signed values) and the first of a pair is kept.
4. The remaining clauses are sorted by length, then by the sequence of atoms, then by the sequence of (signed) literals.

The final order is total, and so the canonical form of a collection of clauses does not depend on the order in which the clauses were given.

```rust
# use sieve_lib::preprocessing::canonical::canonicalise;
let clauses = vec![vec![2, 1], vec![1, 2], vec![-3, 1, 1], vec![1, -3]];

assert_eq!(canonicalise(clauses), vec![vec![1, 2], vec![-3, 1]]);
```
*/

use std::collections::{BTreeSet, HashSet};

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
    },
};

/// Removes repeated literals within each clause, keeping the first occurrence of each literal.
pub fn dedup_literals(clauses: impl IntoIterator<Item = CClause>) -> Vec<CClause> {
    clauses
        .into_iter()
        .map(|clause| {
            let mut seen = HashSet::with_capacity(clause.len());
            clause
                .into_iter()
                .filter(|literal| seen.insert(*literal))
                .collect()
        })
        .collect()
}

/// Collapses identical clauses, returning the distinct clauses in lexicographic order.
pub fn remove_duplicates(clauses: impl IntoIterator<Item = CClause>) -> Vec<CClause> {
    clauses
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Removes each clause which is the reversal of a (lexicographically) earlier clause.
///
/// The returned clauses are in lexicographic order.
pub fn remove_reversals(mut clauses: Vec<CClause>) -> Vec<CClause> {
    clauses.sort();

    let mut seen: HashSet<CClause> = HashSet::with_capacity(clauses.len() * 2);
    let mut kept = Vec::with_capacity(clauses.len());

    for clause in clauses {
        let reversed = clause.reversed();
        if seen.contains(&clause) || seen.contains(&reversed) {
            log::trace!(target: targets::CANONICAL, "Dropped reversal {clause:?}");
            continue;
        }
        seen.insert(reversed);
        seen.insert(clause.clone());
        kept.push(clause);
    }

    kept
}

/// Sorts clauses by length, then atoms, then literals.
pub fn canonical_order(clauses: &mut [CClause]) {
    clauses.sort_by_cached_key(order_key);
}

fn order_key(clause: &CClause) -> (usize, Vec<Atom>, CClause) {
    (clause.size(), clause.atoms().collect(), clause.clone())
}

/// The canonical form of a collection of clauses.
pub fn canonicalise(clauses: impl IntoIterator<Item = CClause>) -> Vec<CClause> {
    let deduped = dedup_literals(clauses);
    let given = deduped.len();

    let distinct = remove_duplicates(deduped);
    let mut canonical = remove_reversals(distinct);
    canonical_order(&mut canonical);

    log::info!(target: targets::CANONICAL, "{given} clauses canonicalised to {}", canonical.len());
    canonical
}

/// Whether the literals of each clause are distinct, no clause is equal to or the reversal of another, and the clauses are in canonical order.
pub fn is_canonical(clauses: &[CClause]) -> bool {
    let mut seen = HashSet::with_capacity(clauses.len());
    for clause in clauses {
        if clause.literals().collect::<HashSet<_>>().len() != clause.size() {
            return false;
        }

        if !seen.insert(clause.clone()) {
            return false;
        }

        // a palindrome is its own reversal
        let reversed = clause.reversed();
        if reversed != *clause && seen.contains(&reversed) {
            return false;
        }
    }

    clauses
        .windows(2)
        .all(|pair| order_key(&pair[0]) <= order_key(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let deduped = dedup_literals(vec![vec![3, 1, 3, -1, 1]]);
        assert_eq!(deduped, vec![vec![3, 1, -1]]);
    }

    #[test]
    fn reversal_keeps_lexicographic_first() {
        let kept = remove_reversals(vec![vec![3, -2, 1], vec![1, -2, 3]]);
        assert_eq!(kept, vec![vec![1, -2, 3]]);
    }

    #[test]
    fn palindromes_survive() {
        let kept = remove_reversals(vec![vec![1, 2, 1], vec![4]]);
        assert_eq!(kept, vec![vec![1, 2, 1], vec![4]]);
    }

    #[test]
    fn order_is_length_then_atoms_then_literals() {
        let mut clauses = vec![vec![-2, 1, 3], vec![2, 1], vec![-1, 2], vec![1, 2], vec![-3]];
        canonical_order(&mut clauses);
        assert_eq!(
            clauses,
            vec![vec![-3], vec![-1, 2], vec![1, 2], vec![2, 1], vec![-2, 1, 3]]
        );
    }

    #[test]
    fn empty_clause_does_not_panic() {
        assert_eq!(canonicalise(vec![vec![], vec![1], vec![]]), vec![vec![], vec![1]]);
    }
}
