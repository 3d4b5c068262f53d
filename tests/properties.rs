use sieve_lib::{
    config::Config,
    context::Context,
    preprocessing::{canonical::canonicalise, groups::group_by_support},
    reports::{Report, Verdict},
    structures::{
        clause::{CClause, Clause, ClauseStatus},
        domain::Domain,
    },
    types::err::Contradiction,
};

fn majority_formula() -> Vec<CClause> {
    vec![
        vec![1, 2, 3],
        vec![1, 3, 2],
        vec![2, 1, 3],
        vec![1, -2, 3],
        vec![1, 2, -3],
    ]
}

fn context_with(config: Config, formula: Vec<CClause>) -> Context {
    let mut the_context = Context::from_config(config);
    for clause in formula {
        assert!(the_context.add_clause(clause).is_ok());
    }
    the_context
}

mod switches {
    use super::*;

    #[test]
    fn narrowing_fixes_majority() {
        let mut the_context = context_with(Config::default(), majority_formula());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.domain_of(1), Domain::Fixed(true));
        assert_eq!(the_context.counters.narrowed, 1);
    }

    #[test]
    fn narrowing_off() {
        let mut config = Config::default();
        config.switch.narrowing = false;

        let mut the_context = context_with(config, majority_formula());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.domains().fixed_count(), 0);
        assert_eq!(the_context.counters.narrowed, 0);
    }

    #[test]
    fn negative_majority() {
        let formula = majority_formula()
            .into_iter()
            .map(|clause| clause.into_iter().map(|literal| -literal).collect())
            .collect();
        let mut the_context = context_with(Config::default(), formula);
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.domain_of(1), Domain::Fixed(false));
    }

    #[test]
    fn exhaustion_off() {
        let mut config = Config::default();
        config.switch.exhaustion = false;

        let mut the_context = context_with(config, vec![vec![1], vec![-1]]);
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(
            the_context.contradiction(),
            Some(&Contradiction::Falsified(vec![1]))
        );
    }
}

mod properties {
    use super::*;

    fn formulas() -> Vec<Vec<CClause>> {
        vec![
            majority_formula(),
            vec![vec![1, -3], vec![2, 3, -1]],
            vec![vec![1, 2], vec![-1], vec![2, 3, 4], vec![-4, -2, 5]],
            vec![vec![-1, 2], vec![-2, 3], vec![-3, 4], vec![1]],
            vec![vec![1, 2, 3], vec![-1, -2], vec![-1, 2], vec![3, -2, 1], vec![6, -7]],
        ]
    }

    #[test]
    fn propagation_fixpoint_on_consistent() {
        for formula in formulas() {
            let mut the_context = context_with(Config::default(), formula);
            if the_context.solve() != Report::Satisfiable {
                continue;
            }

            for clause in the_context.canonical_formula() {
                let status = clause.status_on(the_context.domains());
                assert!(!matches!(status, ClauseStatus::Unit(_) | ClauseStatus::Falsified));
            }
        }
    }

    #[test]
    fn assignment_covers_formula() {
        for formula in formulas() {
            let atoms = formula
                .iter()
                .flat_map(|clause| clause.atoms())
                .collect::<std::collections::BTreeSet<_>>();

            let mut the_context = context_with(Config::default(), formula);
            the_context.solve();

            if let Ok(Verdict::Satisfiable(assignment)) = the_context.verdict() {
                assert_eq!(assignment.len(), atoms.len());
                assert!(atoms.iter().all(|atom| assignment.get(*atom).is_some()));
            }
        }
    }

    #[test]
    fn verdict_independent_of_clause_order() {
        for formula in formulas() {
            let mut forward = context_with(Config::default(), formula.clone());
            forward.solve();

            let mut backward_formula = formula;
            backward_formula.reverse();
            let mut backward = context_with(Config::default(), backward_formula);
            backward.solve();

            assert_eq!(forward.canonical_formula(), backward.canonical_formula());
            assert_eq!(forward.verdict(), backward.verdict());
            assert_eq!(forward.contradiction(), backward.contradiction());
        }
    }

    #[test]
    fn groups_visited_in_order() {
        for formula in formulas() {
            let groups = group_by_support(&canonicalise(formula));
            assert!(groups
                .windows(2)
                .all(|pair| (pair[0].width(), &pair[0].support) < (pair[1].width(), &pair[1].support)));
        }
    }

    #[test]
    fn every_group_counted_when_consistent() {
        let formula = vec![vec![1, 2], vec![-1], vec![2, 3, 4], vec![-4, -2, 5]];
        let groups = group_by_support(&canonicalise(formula.clone()));

        let mut the_context = context_with(Config::default(), formula);
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.counters.groups, groups.len());
    }
}
