use super::*;
use crate::input::demo::demo_roster;
use crate::model::profile::AnalysisProfile;
use crate::model::record::StudentRecord;
use crate::pipeline::build_dashboard;

fn demo_dashboard() -> Dashboard {
    build_dashboard(&demo_roster(), &AnalysisProfile::default_v1()).unwrap()
}

#[test]
fn test_leaderboard_podium_order() {
    let content = project_view(View::Leaderboard, &demo_dashboard(), &ViewRequest::default());
    let ViewContent::Leaderboard(lb) = content else {
        panic!("expected leaderboard");
    };
    let podium = lb
        .podium
        .iter()
        .map(|r| (r.rank, r.student.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        podium,
        vec![(2, "Alice Johnson"), (1, "Charlie Brown"), (3, "Bob Smith")]
    );
    assert_eq!(lb.rows.len(), 4);
    assert_eq!(lb.rows[0].score, "48/50");
    assert_eq!(lb.rows[0].percentage_display, "96.0%");
    assert_eq!(lb.showing, 4);
    assert_eq!(lb.total, 4);
}

#[test]
fn test_leaderboard_small_roster_podium() {
    let records = vec![StudentRecord::new("Solo", 10.0, 20.0)];
    let d = build_dashboard(&records, &AnalysisProfile::default_v1()).unwrap();
    let ViewContent::Leaderboard(lb) = project_view(View::Leaderboard, &d, &ViewRequest::default())
    else {
        panic!("expected leaderboard");
    };
    assert_eq!(lb.podium.len(), 1);
    assert_eq!(lb.podium[0].rank, 1);
}

#[test]
fn test_leaderboard_min_percentage_filter() {
    let request = ViewRequest {
        student: None,
        min_percentage: Some(80.0),
    };
    let ViewContent::Leaderboard(lb) = project_view(View::Leaderboard, &demo_dashboard(), &request)
    else {
        panic!("expected leaderboard");
    };
    assert_eq!(lb.showing, 2);
    assert_eq!(lb.total, 4);
    assert_eq!(lb.podium.len(), 3);
}

#[test]
fn test_analytics_view() {
    let ViewContent::Analytics(a) =
        project_view(View::Analytics, &demo_dashboard(), &ViewRequest::default())
    else {
        panic!("expected analytics");
    };
    assert_eq!(a.question_averages.len(), 3);
    assert_eq!(a.score_matrix.questions, vec!["Q1", "Q2", "Q3"]);
    assert_eq!(a.score_matrix.rows[0].student, "Charlie Brown");
    assert_eq!(a.score_matrix.rows[0].scores, vec![5.0, 5.0, 5.0]);
    assert_eq!(a.distribution.labels[0], "0-50%");
    assert_eq!(a.metrics.unwrap().pass_rate, 75.0);
}

#[test]
fn test_insights_view() {
    let records = vec![
        StudentRecord::new("A", 1.0, 2.0)
            .with_questions(&[("Q1", 1.0), ("Q2", 5.0)])
            .with_concepts(&["Entanglement"]),
    ];
    let d = build_dashboard(&records, &AnalysisProfile::default_v1()).unwrap();
    let ViewContent::Insights(i) = project_view(View::Insights, &d, &ViewRequest::default())
    else {
        panic!("expected insights");
    };
    assert_eq!(i.hard_questions.len(), 1);
    assert_eq!(i.hard_questions[0].question, "Q1");
    assert_eq!(i.concepts[0].concept, "Entanglement");
}

#[test]
fn test_profile_view_selected_and_unknown() {
    let d = demo_dashboard();
    let request = ViewRequest {
        student: Some("Bob Smith".to_string()),
        min_percentage: None,
    };
    let ViewContent::Profile(p) = project_view(View::Profile, &d, &request) else {
        panic!("expected profile");
    };
    assert_eq!(p.students.len(), 4);
    let card = p.selected.unwrap();
    assert_eq!(card.rank, 3);
    assert_eq!(card.score, "38/50");
    assert_eq!(card.percentage_display, "76.0%");
    assert_eq!(card.questions.len(), 3);
    assert_eq!(card.questions[0].max_score, 5.0);

    let unknown = ViewRequest {
        student: Some("Nobody".to_string()),
        min_percentage: None,
    };
    let ViewContent::Profile(p) = project_view(View::Profile, &d, &unknown) else {
        panic!("expected profile");
    };
    assert!(p.selected.is_none());
}

#[test]
fn test_view_json_tagged() {
    let content = project_view(View::Insights, &demo_dashboard(), &ViewRequest::default());
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["view"], "insights");
    assert!(json["concepts"].is_array());
}
