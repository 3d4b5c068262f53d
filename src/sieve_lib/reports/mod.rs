/*!
Reports for the context.

- A [Report] is a high-level summary of the state of a context.
- A [Verdict] is the outcome of a solve, with an [Assignment] when no contradiction was found.

A verdict without a contradiction is never a proof of satisfiability.
So, the message of a satisfiable verdict always carries a caveat.

```rust
# use sieve_lib::reports::{Verdict, SATISFIABLE_MESSAGE, UNSATISFIABLE_MESSAGE};
assert_eq!(Verdict::Unsatisfiable.message(), UNSATISFIABLE_MESSAGE);
assert_eq!(
    SATISFIABLE_MESSAGE,
    "This formula is satisfiable, as long as there exists at least one assignment."
);
```
*/

use std::collections::BTreeMap;

use crate::{
    context::ContextState,
    structures::{atom::Atom, domain::Domain, literal::{CLiteral, Literal}, valuation::DomainMap},
};

/// The message of an unsatisfiable verdict.
pub const UNSATISFIABLE_MESSAGE: &str = "This formula is unsatisfiable.";

/// The message of a satisfiable verdict.
pub const SATISFIABLE_MESSAGE: &str =
    "This formula is satisfiable, as long as there exists at least one assignment.";

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// No contradiction was found.
    Satisfiable,

    /// A contradiction was found.
    Unsatisfiable,

    /// No (current) solve has taken place.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Consistent => Self::Satisfiable,
            ContextState::Unsatisfiable(_) => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The outcome of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A contradiction was found.
    Unsatisfiable,

    /// No contradiction was found, and each atom of the formula has the given domain.
    Satisfiable(Assignment),
}

impl Verdict {
    /// The (fixed) message of the verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unsatisfiable => UNSATISFIABLE_MESSAGE,
            Self::Satisfiable(_) => SATISFIABLE_MESSAGE,
        }
    }

    pub fn report(&self) -> Report {
        match self {
            Self::Unsatisfiable => Report::Unsatisfiable,
            Self::Satisfiable(_) => Report::Satisfiable,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Unsatisfiable => None,
            Self::Satisfiable(assignment) => Some(assignment),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// The domain of every atom of a formula, in ascending atom order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    domains: BTreeMap<Atom, Domain>,
}

impl From<&DomainMap> for Assignment {
    fn from(value: &DomainMap) -> Self {
        Assignment {
            domains: value.iter().collect(),
        }
    }
}

impl Assignment {
    /// An iterator over atoms and their domains, in ascending atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, Domain)> + '_ {
        self.domains.iter().map(|(atom, domain)| (*atom, *domain))
    }

    /// The domain of an atom, if the atom is part of the assignment.
    pub fn get(&self, atom: Atom) -> Option<Domain> {
        self.domains.get(&atom).copied()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// The literals fixed by the assignment, in ascending atom order.
    pub fn fixed_literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter()
            .filter_map(|(atom, domain)| domain.value().map(|value| CLiteral::new(atom, value)))
    }

    /// One line for each atom, of the form `{prefix}{atom} -> {domain}`.
    ///
    /// ```rust
    /// # use sieve_lib::structures::valuation::DomainMap;
    /// # use sieve_lib::reports::Assignment;
    /// let mut domains = DomainMap::fresh([1, 2]);
    /// let _ = domains.fix(2);
    /// assert_eq!(Assignment::from(&domains).as_lines("x"), vec!["x1 -> [0, 1]", "x2 -> [1]"]);
    /// ```
    pub fn as_lines(&self, prefix: &str) -> Vec<String> {
        self.iter()
            .map(|(atom, domain)| format!("{prefix}{atom} -> {domain}"))
            .collect()
    }

    /// The fixed literals of the assignment as a DIMACS valuation, terminated by `0`.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs_string = String::new();
        for literal in self.fixed_literals() {
            dimacs_string.push_str(format!("{literal} ").as_str());
        }
        dimacs_string += "0";
        dimacs_string
    }
}
