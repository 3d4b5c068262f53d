use sieve_lib::{
    config::Config,
    context::Context,
    preprocessing::canonical::{canonicalise, is_canonical},
    structures::clause::CClause,
};

fn sample_formula() -> Vec<CClause> {
    vec![
        vec![3, -1, 2],
        vec![2, -1, 3],
        vec![-4],
        vec![1, 1, -2],
        vec![1, -2],
        vec![-2, 1],
        vec![5, -5],
        vec![2, 3],
    ]
}

mod canonical {
    use super::*;

    #[test]
    fn idempotent() {
        let once = canonicalise(sample_formula());
        assert!(is_canonical(&once));
        assert_eq!(canonicalise(once.clone()), once);
    }

    #[test]
    fn reversed_pair_collapses() {
        assert_eq!(canonicalise(vec![vec![1, 2], vec![2, 1]]), vec![vec![1, 2]]);
    }

    #[test]
    fn duplicate_collapses() {
        assert_eq!(canonicalise(vec![vec![1, -2], vec![1, -2]]), vec![vec![1, -2]]);
    }

    #[test]
    fn permutation_of_clauses_is_irrelevant() {
        let formula = sample_formula();
        let expected = canonicalise(formula.clone());

        let mut reversed = formula.clone();
        reversed.reverse();
        assert_eq!(canonicalise(reversed), expected);

        let mut rotated = formula.clone();
        rotated.rotate_left(3);
        assert_eq!(canonicalise(rotated), expected);
    }

    #[test]
    fn sample_form() {
        assert_eq!(
            canonicalise(sample_formula()),
            vec![
                vec![-4],
                vec![-2, 1],
                vec![2, 3],
                vec![5, -5],
                vec![2, -1, 3],
            ]
        );
    }

    #[test]
    fn non_canonical_detected() {
        assert!(!is_canonical(&[vec![1, 2], vec![-1]]));
        assert!(!is_canonical(&[vec![1, 2], vec![2, 1]]));
        assert!(!is_canonical(&[vec![1, 1]]));
        assert!(is_canonical(&[vec![-1], vec![1, 2]]));
    }
}

mod context {
    use super::*;

    #[test]
    fn formula_kept_as_given() {
        let mut the_context = Context::from_config(Config::default());
        for clause in sample_formula() {
            assert!(the_context.add_clause(clause).is_ok());
        }
        the_context.solve();

        assert_eq!(the_context.formula(), sample_formula().as_slice());
        assert!(is_canonical(the_context.canonical_formula()));
    }
}
