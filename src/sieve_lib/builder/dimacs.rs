use std::io::BufRead;

use crate::{
    builder::check_clause,
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Information about a DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the preamble, if a preamble was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the preamble, if a preamble was found.
    pub expected_clauses: Option<usize>,

    /// The count of distinct atoms in the clauses read.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use sieve_lib::context::Context;
    /// # use sieve_lib::config::Config;
    /// # use sieve_lib::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c a comment
    /// p cnf 2 2
    ///  1 -2 0
    ///  2  1 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).expect("parse failure");
    /// assert_eq!(info.expected_atoms, Some(2));
    /// assert_eq!(info.added_clauses, 2);
    /// assert_eq!(the_context.solve(), Report::Satisfiable);
    /// ```
    ///
    /// Literals are read until `0`, and a clause may span many lines.
    /// A `%` at the start of a line ends the formula.
    ///
    /// Clauses are only added once the whole input has been read, so on an error the formula of the context is unchanged.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut atoms = std::collections::BTreeSet::new();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer = CClause::default();
        let mut clauses: Vec<CClause> = Vec::default();

        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Io(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(2);

                    let mut parse_count = || -> Result<usize, err::ParseError> {
                        match problem_details.next().map(|count| count.parse::<usize>()) {
                            Some(Ok(count)) => Ok(count),
                            _ => Err(err::ParseError::ProblemSpecification),
                        }
                    };

                    info.expected_atoms = Some(parse_count()?);
                    info.expected_clauses = Some(parse_count()?);
                    log::info!(target: targets::BUILD, "Expecting {:?} atoms and {:?} clauses", info.expected_atoms, info.expected_clauses);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item.parse::<CLiteral>() {
                            Ok(0) => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                check_clause(&the_clause)?;
                                clauses.push(the_clause);
                            }

                            Ok(literal) => clause_buffer.push(literal),

                            Err(_) => {
                                return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)))
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::BUILD, "Final clause is missing a terminating 0");
            check_clause(&clause_buffer)?;
            clauses.push(clause_buffer);
        }

        for clause in clauses {
            atoms.extend(clause.iter().map(|l| l.atom()));
            self.add_clause(clause)?;
            info.added_clauses += 1;
        }

        info.added_atoms = atoms.len();
        Ok(info)
    }
}
