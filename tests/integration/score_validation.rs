use laddergram::{ChartError, ChartConfig, ScoreSet};

fn bounds() -> laddergram::config::ScoreBounds {
    ChartConfig::default().scores
}

#[test]
fn boundary_scores_are_inclusive() {
    assert!(ScoreSet::new(vec![1.0, 1.0, 1.0, 1.0, 1.0], bounds()).is_ok());
    assert!(ScoreSet::new(vec![5.0, 5.0, 5.0, 5.0, 5.0], bounds()).is_ok());
}

#[test]
fn out_of_range_score_fails_before_any_drawing() {
    // Validation happens at ScoreSet construction, so an invalid assessment
    // never reaches a surface: there is nothing to draw on yet.
    let err = ScoreSet::new(vec![3.0, 2.0, 4.0, 1.0, 6.0], bounds()).unwrap_err();
    match err {
        ChartError::ContractViolation(reason) => {
            assert!(reason.contains("Influence"), "names the dimension: {reason}");
            assert!(reason.contains('6'), "names the offending value: {reason}");
        }
        other => panic!("expected contract violation, got {other}"),
    }
}

#[test]
fn near_boundary_values_are_rejected() {
    assert!(ScoreSet::new(vec![0.99, 3.0, 3.0, 3.0, 3.0], bounds()).is_err());
    assert!(ScoreSet::new(vec![3.0, 3.0, 3.0, 3.0, 5.01], bounds()).is_err());
}

#[test]
fn score_count_must_match_dimension_count() {
    for count in [0, 4, 6] {
        let err = ScoreSet::new(vec![3.0; count], bounds()).unwrap_err();
        assert!(matches!(err, ChartError::ContractViolation(_)));
    }
}
