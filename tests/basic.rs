use sieve_lib::{
    config::Config,
    context::Context,
    reports::{Report, Verdict, SATISFIABLE_MESSAGE, UNSATISFIABLE_MESSAGE},
    structures::domain::Domain,
    types::err::{Contradiction, StateError},
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.clause_from_string("1").is_ok());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.value_of(1), Some(true));
    }

    #[test]
    fn nothing_to_narrow() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, -3]).is_ok());
        assert!(the_context.add_clause(vec![2, 3, -1]).is_ok());
        assert_eq!(the_context.solve(), Report::Satisfiable);

        let Ok(Verdict::Satisfiable(assignment)) = the_context.verdict() else {
            panic!("expected an assignment");
        };
        assert_eq!(
            assignment.as_lines("x"),
            vec!["x1 -> [0, 1]", "x2 -> [0, 1]", "x3 -> [0, 1]"]
        );
    }

    #[test]
    fn tautology_is_open() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, -1]).is_ok());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.domain_of(1), Domain::Free);
    }

    #[test]
    fn unit_chain() {
        let mut the_context = Context::from_config(Config::default());
        for clause in [vec![1], vec![-1, 2], vec![-2, 3], vec![-3, 4]] {
            assert!(the_context.add_clause(clause).is_ok());
        }
        assert_eq!(the_context.solve(), Report::Satisfiable);

        for atom in 1..=4 {
            assert_eq!(the_context.value_of(atom), Some(true));
        }

        let Ok(verdict) = the_context.verdict() else {
            panic!("no verdict");
        };
        assert_eq!(verdict.message(), SATISFIABLE_MESSAGE);
        assert_eq!(verdict.assignment().map(|a| a.as_dimacs()), Some("1 2 3 4 0".to_string()));
    }
}

mod contradiction {
    use super::*;

    #[test]
    fn unit_and_negation() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert!(the_context.add_clause(vec![-1]).is_ok());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(
            the_context.contradiction(),
            Some(&Contradiction::Exhaustion {
                support: vec![1],
                clauses: 2
            })
        );
    }

    #[test]
    fn every_sign_pattern() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.clause_from_string("1 2").is_ok());
        assert!(the_context.clause_from_string("-1 -2").is_ok());
        assert!(the_context.clause_from_string("1 -2").is_ok());
        assert!(the_context.clause_from_string("-1 2").is_ok());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(
            the_context.contradiction(),
            Some(&Contradiction::Exhaustion {
                support: vec![1, 2],
                clauses: 4
            })
        );
    }

    #[test]
    fn exhaustion_counts_clauses_only() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, -1]).is_ok());
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn falsified_by_propagation() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert!(the_context.add_clause(vec![-1, 2]).is_ok());
        assert!(the_context.add_clause(vec![-1, -2]).is_ok());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(
            the_context.contradiction(),
            Some(&Contradiction::Falsified(vec![-1, 2]))
        );
    }

    #[test]
    fn no_assignment_on_contradiction() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![2]).is_ok());
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert!(the_context.add_clause(vec![-1]).is_ok());
        the_context.solve();

        let Ok(verdict) = the_context.verdict() else {
            panic!("no verdict");
        };
        assert_eq!(verdict, Verdict::Unsatisfiable);
        assert_eq!(verdict.message(), UNSATISFIABLE_MESSAGE);
        assert!(verdict.assignment().is_none());
    }
}

mod state {
    use super::*;

    #[test]
    fn verdict_requires_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(the_context.verdict(), Err(StateError::SolveRequired));
    }

    #[test]
    fn input_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause(vec![1]).is_ok());
        assert_eq!(the_context.solve(), Report::Satisfiable);

        assert!(the_context.add_clause(vec![-1]).is_ok());
        assert_eq!(the_context.verdict(), Err(StateError::SolveRequired));
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn resolve_is_repeatable() {
        let mut the_context = Context::from_config(Config::default());
        for clause in [vec![1, 2], vec![-1], vec![2, 3, 4]] {
            assert!(the_context.add_clause(clause).is_ok());
        }

        assert_eq!(the_context.solve(), Report::Satisfiable);
        let first = the_context.verdict();
        let first_groups = the_context.counters.groups;

        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.verdict(), first);
        assert_eq!(the_context.counters.groups, first_groups);
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Report::Satisfiable);

        let Ok(Verdict::Satisfiable(assignment)) = the_context.verdict() else {
            panic!("expected an assignment");
        };
        assert!(assignment.is_empty());
        assert_eq!(assignment.as_dimacs(), "0");
    }
}
