//! Error types used in the library.
//!
//! - A [Contradiction] is the single outcome of a solve which is not a (caveated) assignment.
//!   Contradictions are expected, and are used to control the flow of a solve: on a contradiction a solve stops and the formula is reported as unsatisfiable.
//! - The remaining errors are external --- e.g. an attempt to add an empty clause, or a malformed DIMACS file.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
    State(StateError),
    Contradiction(Contradiction),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::Contradiction(c) => write!(f, "Contradiction: {c}"),
        }
    }
}

/// Noted errors when adding a clause to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Some attempt was made to add an empty clause.
    EmptyClause,

    /// A clause contained `0`, which is not a literal.
    ZeroLiteral,

    /// A clause contained a literal whose atom exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    AtomLimit,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some item on the given line is not a literal.
    Line(usize),

    /// The item at the given position of a clause string is not a literal.
    Item(usize),

    /// Reading from the input failed after the given line.
    Io(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from requests made of a context in the wrong state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A verdict was requested before (or after input to) a solve.
    SolveRequired,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// A contradiction derived during a solve.
///
/// On a contradiction all further work stops, and the formula is unsatisfiable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contradiction {
    /// A group of clauses over the given support contains at least 2^|support| clauses.
    Exhaustion {
        /// The atoms of each clause in the group, in ascending order.
        support: Vec<Atom>,

        /// The number of clauses in the group.
        clauses: usize,
    },

    /// Every literal of the clause is false.
    Falsified(CClause),

    /// The literal was required, though the atom of the literal was fixed to the other value.
    Conflict(CLiteral),
}

impl std::fmt::Display for Contradiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhaustion { support, clauses } => write!(
                f,
                "{clauses} distinct clauses over the {} atoms {support:?}",
                support.len()
            ),
            Self::Falsified(clause) => write!(f, "the clause {clause:?} is falsified"),
            Self::Conflict(literal) => write!(f, "{literal} is required, though {} is fixed", -literal),
        }
    }
}

impl From<Contradiction> for ErrorKind {
    fn from(e: Contradiction) -> Self {
        ErrorKind::Contradiction(e)
    }
}
