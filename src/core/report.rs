use crate::core::runner::MissionReport;
use crate::domain::model::{Heading, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PoseRecord {
    rover: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading: Option<Heading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CsvRow {
    rover: usize,
    x: i32,
    y: i32,
    heading: Heading,
}

/// Writes the final poses in `format`. Failed rovers only show up in JSON.
pub fn render<W: Write>(report: &MissionReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
    }
}

fn render_text<W: Write>(report: &MissionReport, out: &mut W) -> Result<()> {
    for pose in report.final_poses() {
        writeln!(out, "{}", pose)?;
    }
    Ok(())
}

fn render_json<W: Write>(report: &MissionReport, out: &mut W) -> Result<()> {
    let records: Vec<PoseRecord> = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(pose) => PoseRecord {
                rover: outcome.rover,
                x: Some(pose.position.x),
                y: Some(pose.position.y),
                heading: Some(pose.heading),
                error: None,
            },
            Err(e) => PoseRecord {
                rover: outcome.rover,
                x: None,
                y: None,
                heading: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

fn render_csv<W: Write>(report: &MissionReport, out: &mut W) -> Result<()> {
    // header written by hand so an empty report still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(["rover", "x", "y", "heading"])?;
    let rows = report.outcomes.iter().filter_map(|outcome| {
        outcome.pose().map(|pose| CsvRow {
            rover: outcome.rover,
            x: pose.position.x,
            y: pose.position.y,
            heading: pose.heading,
        })
    });
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
