/*!
The context --- to which formulas are added and within which solves take place, etc.

A context owns everything about a solve:
- The formula, as given.
- The canonical form of the formula, derived once at the start of each solve.
- The [domain](crate::structures::domain) of each atom of the formula.
- The [state](ContextState) of the context, which records the contradiction which ended a solve, if any.

Nothing is shared between contexts.

# Example
```rust
# use sieve_lib::context::Context;
# use sieve_lib::config::Config;
# use sieve_lib::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);
assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    reports::{Assignment, Report, Verdict},
    structures::{
        atom::Atom,
        clause::CClause,
        domain::Domain,
        valuation::DomainMap,
    },
    types::err::{self, Contradiction},
};

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no (current) solve has taken place.
    Input,

    /// A solve is in progress.
    Solving,

    /// A solve completed without finding a contradiction.
    Consistent,

    /// A solve found the given contradiction.
    Unsatisfiable(Contradiction),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Consistent => write!(f, "Consistent"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, within which a formula is sieved.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the most recent solve.
    pub counters: Counters,

    /// The formula, as given.
    pub(crate) formula: Vec<CClause>,

    /// The canonical form of the formula, as of the most recent solve.
    pub(crate) canonical: Vec<CClause>,

    /// The domain of each atom in the formula.
    pub(crate) domains: DomainMap,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    /// A context with the given configuration and an empty formula.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            formula: Vec::default(),
            canonical: Vec::default(),
            domains: DomainMap::default(),
            state: ContextState::Input,
        }
    }

    /// The formula of the context, as given.
    pub fn formula(&self) -> &[CClause] {
        &self.formula
    }

    /// The canonical form of the formula, as of the most recent solve.
    pub fn canonical_formula(&self) -> &[CClause] {
        &self.canonical
    }

    /// The domain map, as of the most recent solve.
    pub fn domains(&self) -> &DomainMap {
        &self.domains
    }

    /// The domain of an atom, as of the most recent solve.
    pub fn domain_of(&self, atom: Atom) -> Domain {
        self.domains.domain_of(atom)
    }

    /// The value of an atom, if fixed by the most recent solve.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.domains.value_of(atom)
    }

    /// A high-level report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The contradiction found by the most recent solve, if any.
    pub fn contradiction(&self) -> Option<&Contradiction> {
        match &self.state {
            ContextState::Unsatisfiable(contradiction) => Some(contradiction),
            _ => None,
        }
    }

    /// The verdict of the most recent solve.
    ///
    /// On a contradiction no assignment is given, regardless of any atoms fixed before the contradiction was found.
    pub fn verdict(&self) -> Result<Verdict, err::StateError> {
        match &self.state {
            ContextState::Consistent => Ok(Verdict::Satisfiable(Assignment::from(&self.domains))),
            ContextState::Unsatisfiable(_) => Ok(Verdict::Unsatisfiable),
            ContextState::Input | ContextState::Solving => Err(err::StateError::SolveRequired),
        }
    }
}
