use super::*;

fn rec(name: &str, total: f64) -> StudentRecord {
    StudentRecord::new(name, total, 50.0)
}

fn demo() -> Vec<StudentRecord> {
    vec![
        rec("Alice", 45.0),
        rec("Bob", 38.0),
        rec("Charlie", 48.0),
        rec("Diana", 25.0),
    ]
}

#[test]
fn test_ranks_dense_and_sorted() {
    let out = derive_summary(&demo(), TiePolicy::Ordinal).unwrap();
    assert_eq!(out.len(), 4);
    let names = out.iter().map(|s| s.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob", "Diana"]);
    let ranks = out.iter().map(|s| s.rank).collect::<Vec<_>>();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(out.windows(2).all(|w| w[0].percentage >= w[1].percentage));
    assert_eq!(out[0].percentage, 96.0);
    assert_eq!(out[3].percentage, 50.0);
}

#[test]
fn test_ties_keep_input_order() {
    let records = vec![rec("First", 40.0), rec("Top", 49.0), rec("Second", 40.0)];
    let out = derive_summary(&records, TiePolicy::Ordinal).unwrap();
    let names = out.iter().map(|s| s.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Top", "First", "Second"]);
    assert_eq!(out[1].rank, 2);
    assert_eq!(out[2].rank, 3);
}

#[test]
fn test_shared_tie_policy() {
    let records = vec![
        rec("A", 40.0),
        rec("B", 40.0),
        rec("C", 49.0),
        rec("D", 10.0),
    ];
    let out = derive_summary(&records, TiePolicy::Shared).unwrap();
    let ranks = out.iter().map(|s| (s.name(), s.rank)).collect::<Vec<_>>();
    assert_eq!(ranks, vec![("C", 1), ("A", 2), ("B", 2), ("D", 4)]);
}

#[test]
fn test_percentage_recomputed_with_mixed_max() {
    let records = vec![
        StudentRecord::new("A", 8.0, 10.0),
        StudentRecord::new("B", 45.0, 50.0),
    ];
    let out = derive_summary(&records, TiePolicy::Ordinal).unwrap();
    assert_eq!(out[0].name(), "B");
    assert_eq!(out[0].percentage, 90.0);
    assert!((out[1].percentage - 80.0).abs() < 1e-9);
}

#[test]
fn test_empty_roster_ok() {
    let out = derive_summary(&[], TiePolicy::Ordinal).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_invalid_max_total() {
    for max in [0.0, -5.0, f64::NAN] {
        let records = vec![rec("A", 10.0), StudentRecord::new("B", 10.0, max)];
        let err = derive_summary(&records, TiePolicy::Ordinal).unwrap_err();
        match err {
            DeriveError::InvalidRecord { student, .. } => assert_eq!(student, "B"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_invalid_total_and_names() {
    assert!(derive_summary(&[rec("A", -1.0)], TiePolicy::Ordinal).is_err());
    assert!(derive_summary(&[rec(" ", 1.0)], TiePolicy::Ordinal).is_err());
    assert!(derive_summary(&[rec("A", 1.0), rec("A", 2.0)], TiePolicy::Ordinal).is_err());
}

#[test]
fn test_deterministic() {
    let a = derive_summary(&demo(), TiePolicy::Ordinal).unwrap();
    let b = derive_summary(&demo(), TiePolicy::Ordinal).unwrap();
    assert_eq!(a, b);
}
