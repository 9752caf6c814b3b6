use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::pipeline::Dashboard;
use crate::report::json::{InputMeta, ToolMeta, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{format_f64_6, format_number, format_percentage};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(
    dashboard: &Dashboard,
    tool: &ToolMeta,
    input: &InputMeta,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(dashboard, tool, input)?;
    write_text(&summary_path, &json)?;

    let ranking_path = out_dir.join("ranking.tsv");
    write_ranking_tsv(dashboard, &ranking_path)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(dashboard, input))?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_ranking_tsv(dashboard: &Dashboard, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let questions = dashboard
        .questions
        .iter()
        .map(|q| q.question.as_str())
        .collect::<Vec<_>>();

    let mut header = vec![
        "rank",
        "student",
        "total_score",
        "max_total",
        "percentage",
        "percentage_exact",
        "pass",
    ];
    header.extend(questions.iter().copied());
    writeln!(w, "{}", header.join("\t"))?;

    let threshold = dashboard.profile.pass_threshold;
    for s in &dashboard.summaries {
        let mut row = vec![
            s.rank.to_string(),
            sanitize_field(s.name()),
            format_number(s.record.total_score),
            format_number(s.record.max_total),
            format_percentage(s.percentage),
            format_f64_6(s.percentage),
            (s.percentage >= threshold).to_string(),
        ];
        for q in &questions {
            row.push(
                s.record
                    .question_score(q)
                    .map(format_number)
                    .unwrap_or_default(),
            );
        }
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
