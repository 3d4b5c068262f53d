//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of integer literals.
//! Order matters: two clauses with the same literals in a different order are distinct clauses, though a clause and its [reversal](Clause::reversed) are identified during [canonicalisation](crate::preprocessing::canonical).
//!
//! ```rust
//! # use sieve_lib::structures::clause::{CClause, Clause, ClauseStatus};
//! # use sieve_lib::structures::valuation::DomainMap;
//! let clause: CClause = vec![3, -1, 2];
//!
//! assert_eq!(clause.support(), vec![1, 2, 3]);
//! assert_eq!(clause.reversed(), vec![2, -1, 3]);
//! assert_eq!(clause.as_dimacs(true), " 3 -1  2 0");
//!
//! let mut domains = DomainMap::fresh(clause.atoms());
//! assert_eq!(clause.status_on(&domains), ClauseStatus::Open);
//!
//! let _ = domains.fix(-3);
//! let _ = domains.fix(1);
//! assert_eq!(clause.status_on(&domains), ClauseStatus::Unit(2));
//!
//! let _ = domains.fix(-2);
//! assert_eq!(clause.status_on(&domains), ClauseStatus::Falsified);
//! ```
//!
//! - The empty clause is always false (never true).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::DomainMap,
};

/// The status of a clause relative to some domain map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Falsified,

    /// Exactly one literal of the clause has a free atom, and every other literal is false.
    Unit(CLiteral),

    /// At least two literals of the clause have free atoms, and no literal is true.
    Open,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The distinct atoms of the clause, in ascending order.
    fn support(&self) -> Vec<Atom>;

    /// The clause read backwards.
    fn reversed(&self) -> CClause;

    /// Whether some literal of the clause is true on the given domains.
    fn satisfied_on(&self, domains: &DomainMap) -> bool;

    /// The [status](ClauseStatus) of the clause on the given domains.
    ///
    /// Literals, rather than atoms, are counted when determining whether a clause is unit.
    /// So, a clause containing both `p` and `-p` with `p` free is open.
    fn status_on(&self, domains: &DomainMap) -> ClauseStatus;
}

/// The implementation of a clause as a vector of integers.
pub type IntClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = IntClause;

impl Clause for IntClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self.literals() {
            match literal.polarity() {
                true => dimacs_string.push_str(format!(" {literal} ").as_str()),
                false => dimacs_string.push_str(format!("{literal} ").as_str()),
            };
        }
        if zero {
            dimacs_string += "0";
            dimacs_string
        } else {
            dimacs_string.pop();
            dimacs_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn support(&self) -> Vec<Atom> {
        let mut support = self.atoms().collect::<Vec<_>>();
        support.sort_unstable();
        support.dedup();
        support
    }

    fn reversed(&self) -> CClause {
        self.iter().rev().copied().collect()
    }

    fn satisfied_on(&self, domains: &DomainMap) -> bool {
        self.literals().any(|literal| domains.entails(literal))
    }

    fn status_on(&self, domains: &DomainMap) -> ClauseStatus {
        let mut unfixed = None;
        let mut unfixed_count = 0;

        for literal in self.literals() {
            match domains.value_of(literal.atom()) {
                None => {
                    unfixed_count += 1;
                    unfixed = Some(literal);
                }
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
                Some(_) => continue,
            }
        }

        match (unfixed_count, unfixed) {
            (0, _) => ClauseStatus::Falsified,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complementary_literals_are_open() {
        let clause: CClause = vec![1, -1];
        let domains = DomainMap::fresh(clause.atoms());
        assert_eq!(clause.status_on(&domains), ClauseStatus::Open);
        assert_eq!(clause.support(), vec![1]);
    }

    #[test]
    fn satisfied_before_unit() {
        let clause: CClause = vec![-4, 5, 6];
        let mut domains = DomainMap::fresh(clause.atoms());
        let _ = domains.fix(-4);
        assert!(clause.satisfied_on(&domains));
        assert_eq!(clause.status_on(&domains), ClauseStatus::Satisfied);
    }

    #[test]
    fn empty_clause_is_falsified() {
        let clause: CClause = vec![];
        assert_eq!(clause.status_on(&DomainMap::default()), ClauseStatus::Falsified);
        assert!(clause.support().is_empty());
    }
}
