use super::*;
use crate::input::demo::demo_roster;

#[test]
fn test_question_stats_demo() {
    let stats = question_stats(&demo_roster(), 5.0).unwrap();
    let ids = stats.iter().map(|s| s.question.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["Q1", "Q2", "Q3"]);
    assert_eq!(stats[0].avg_score, 3.625);
    assert_eq!(stats[1].avg_score, 3.75);
    assert_eq!(stats[2].avg_score, 4.0);
    assert!(stats.iter().all(|s| s.answered == 4));
    assert_eq!(stats[2].avg_ratio, 0.8);
}

#[test]
fn test_question_stats_partial_answers() {
    let records = vec![
        StudentRecord::new("A", 1.0, 2.0).with_questions(&[("Q1", 1.0), ("Q10", 2.0)]),
        StudentRecord::new("B", 1.0, 2.0).with_questions(&[("Q2", 3.0)]),
    ];
    let stats = question_stats(&records, 5.0).unwrap();
    let ids = stats.iter().map(|s| s.question.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["Q1", "Q2", "Q10"]);
    assert!(stats.iter().all(|s| s.answered == 1));
}

#[test]
fn test_question_score_out_of_range() {
    let records = vec![StudentRecord::new("A", 1.0, 2.0).with_questions(&[("Q1", 6.0)])];
    let err = question_stats(&records, 5.0).unwrap_err();
    assert!(matches!(err, DeriveError::InvalidRecord { .. }));
}

#[test]
fn test_hard_questions_hardest_first() {
    let records = vec![
        StudentRecord::new("A", 1.0, 2.0).with_questions(&[
            ("Q1", 4.5),
            ("Q2", 2.5),
            ("Q3", 1.0),
        ]),
    ];
    let stats = question_stats(&records, 5.0).unwrap();
    let hard = hard_questions(&stats, 0.6);
    let ids = hard.iter().map(|s| s.question.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["Q3", "Q2"]);
}

#[test]
fn test_concept_counts_order_and_top_n() {
    let counts = concept_counts(&demo_roster(), 10);
    assert_eq!(
        counts,
        vec![
            ConceptCount {
                concept: "Kinematics".to_string(),
                count: 3
            },
            ConceptCount {
                concept: "Thermodynamics".to_string(),
                count: 3
            },
            ConceptCount {
                concept: "Entanglement".to_string(),
                count: 1
            },
        ]
    );
    assert_eq!(concept_counts(&demo_roster(), 1).len(), 1);
    assert!(concept_counts(&[], 10).is_empty());
}

#[test]
fn test_score_matrix_partial_answers() {
    use crate::model::summary::TiePolicy;
    use crate::pipeline::stage1_rank::derive_summary;

    let records = vec![
        StudentRecord::new("Low", 10.0, 50.0).with_questions(&[("Q10", 1.0), ("Q1", 2.0)]),
        StudentRecord::new("High", 40.0, 50.0).with_questions(&[("Q2", 4.5)]),
        StudentRecord::new("Blank", 20.0, 50.0),
    ];
    let summaries = derive_summary(&records, TiePolicy::Ordinal).unwrap();
    let m = score_matrix(&summaries);
    assert_eq!(m.questions, vec!["Q1", "Q2", "Q10"]);
    let rows = m
        .rows
        .iter()
        .map(|r| (r.student.as_str(), r.scores.clone()))
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            ("High", vec![0.0, 4.5, 0.0]),
            ("Blank", vec![0.0, 0.0, 0.0]),
            ("Low", vec![2.0, 0.0, 1.0]),
        ]
    );
}

#[test]
fn test_score_matrix_empty() {
    let m = score_matrix(&[]);
    assert!(m.questions.is_empty());
    assert!(m.rows.is_empty());
}
