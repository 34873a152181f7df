//! Rendering of run reports and the step list.
use prettytable::{format, Cell, Row, Table};
use std::io::Write;

use syntax_tour::{Report, Step, StepStatus};

use crate::CliError;

fn status_cell(status: StepStatus, expected_failure: bool) -> Cell {
    match status {
        StepStatus::Passed => Cell::new("passed").style_spec("bFg"),
        StepStatus::Failed if expected_failure => Cell::new("failed (expected)").style_spec("bFy"),
        StepStatus::Failed => Cell::new("failed").style_spec("bFr"),
        StepStatus::Skipped => Cell::new("skipped"),
    }
}

/// One row per step: index, id, status and error text.
pub(crate) fn report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for (i, outcome) in report.outcomes.iter().enumerate() {
        let error = outcome
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let _ = table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(outcome.step),
            status_cell(outcome.status, outcome.expected_failure),
            Cell::new(&error),
        ]));
    }
    table
}

/// One row per step: index, id, description and an expected-failure marker.
pub(crate) fn step_table(steps: &[Step]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for (i, step) in steps.iter().enumerate() {
        let marker = if step.expected_failure {
            "expected failure"
        } else {
            ""
        };
        let _ = table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(step.id),
            Cell::new(step.description),
            Cell::new(marker),
        ]));
    }
    table
}

pub(crate) fn write_text(report: &Report, out: &mut dyn Write) -> Result<(), CliError> {
    let _ = report_table(report).print(out)?;
    writeln!(
        out,
        "{} passed, {} failed, {} skipped",
        report.count(StepStatus::Passed),
        report.count(StepStatus::Failed),
        report.count(StepStatus::Skipped)
    )?;
    Ok(())
}

pub(crate) fn write_json(report: &Report, out: &mut dyn Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax_tour::{ErrorPolicy, Runner, STEPS};

    fn halted_report() -> Report {
        let mut sink: Vec<u8> = Vec::new();
        Runner::new(ErrorPolicy::Halt).run(&mut sink)
    }

    #[test]
    fn test_text_report_lists_every_step() {
        let report = halted_report();
        let mut out: Vec<u8> = Vec::new();
        write_text(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for step in STEPS.iter() {
            assert!(text.contains(step.id), "missing {}", step.id);
        }
        assert!(text.contains("failed (expected)"));
        assert!(text.contains("undefined name 'arreglo'"));
        assert!(text.ends_with("11 passed, 1 failed, 1 skipped\n"));
    }

    #[test]
    fn test_json_report() {
        let report = halted_report();
        let mut out: Vec<u8> = Vec::new();
        write_json(&report, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["policy"], "halt");
        assert_eq!(json["outcomes"].as_array().unwrap().len(), STEPS.len());
        assert_eq!(json["outcomes"][12]["status"], "skipped");
    }

    #[test]
    fn test_step_table_marks_expected_failure() {
        let text = step_table(&STEPS).to_string();
        let line = text
            .lines()
            .find(|l| l.contains("undefined-reference"))
            .unwrap();
        assert!(line.contains("expected failure"));
        assert!(!text
            .lines()
            .find(|l| l.contains("fruit-index"))
            .unwrap()
            .contains("expected failure"));
    }
}
