use crate::pipeline::Dashboard;
use crate::pipeline::stage4_insights::hard_questions;
use crate::report::json::InputMeta;
use crate::report::{format_f64_6, format_percentage, format_score};

pub fn render_report_text(dashboard: &Dashboard, input: &InputMeta) -> String {
    let mut out = String::new();

    out.push_str("Class Performance Report\n");
    out.push_str("========================\n\n");
    out.push_str(&format!("Roster: {}\n", input.source));
    out.push_str(&format!("Tie policy: {}\n\n", input.tie_policy));

    out.push_str("1. Overview\n");
    match &dashboard.metrics {
        Some(m) => {
            out.push_str(&format!("Students: {}\n", m.count));
            out.push_str(&format!(
                "Average score: {}\n",
                format_percentage(m.average_percentage)
            ));
            out.push_str(&format!(
                "Top score: {}\n",
                format_score(m.top_score, m.top_max_total)
            ));
            out.push_str(&format!(
                "Pass rate (>= {}%): {}\n",
                m.pass_threshold,
                format_percentage(m.pass_rate)
            ));
            out.push_str(&format!(
                "Spread: min {}, median {}, p90 {}, max {}\n",
                format_f64_6(m.spread.min),
                format_f64_6(m.spread.median),
                format_f64_6(m.spread.p90),
                format_f64_6(m.spread.max)
            ));
            out.push_str(&format!("{}\n\n", pass_statement(m.pass_rate)));
        }
        None => out.push_str("No data: roster is empty.\n\n"),
    }

    out.push_str("2. Podium\n");
    if dashboard.summaries.is_empty() {
        out.push_str("(none)\n");
    }
    for s in dashboard.summaries.iter().take(3) {
        out.push_str(&format!(
            "#{} {} {}\n",
            s.rank,
            s.name(),
            format_percentage(s.percentage)
        ));
    }
    out.push('\n');

    out.push_str("3. Score distribution\n");
    for (label, count) in dashboard
        .distribution
        .labels
        .iter()
        .zip(dashboard.distribution.counts.iter())
    {
        out.push_str(&format!("{label}: {count}\n"));
    }
    out.push('\n');

    out.push_str("4. Questions\n");
    if dashboard.questions.is_empty() {
        out.push_str("No per-question scores supplied.\n");
    }
    for q in &dashboard.questions {
        out.push_str(&format!(
            "{}: avg {:.2}/{} ({} answered)\n",
            q.question, q.avg_score, q.max_score, q.answered
        ));
    }
    let hard = hard_questions(&dashboard.questions, dashboard.profile.hard_question_ratio);
    if !hard.is_empty() {
        let names = hard
            .iter()
            .map(|q| q.question.as_str())
            .collect::<Vec<_>>();
        out.push_str(&format!("Hardest questions: {}\n", names.join(", ")));
    }
    out.push('\n');

    out.push_str("5. Concepts\n");
    if dashboard.concepts.is_empty() {
        out.push_str("No concepts recorded.\n");
    }
    for c in &dashboard.concepts {
        out.push_str(&format!("- {}: mentioned {} times\n", c.concept, c.count));
    }

    out
}

fn pass_statement(pass_rate: f64) -> &'static str {
    if pass_rate >= 80.0 {
        "Most of the class meets the pass threshold."
    } else if pass_rate >= 50.0 {
        "A majority passes; revise the lowest-scoring questions."
    } else {
        "Fewer than half pass; focus revision on the hardest questions and most frequent concepts."
    }
}
