//! Report rendering for the terminal.

use super::setup::OutputMode;
use anyhow::Result;
use console::style;
use keepmdapp::commands::convert::BatchReport;
use keepmdapp::commands::{CmdMessage, MessageLevel};

const LINE_BREAK: &str = "----------------------------------";

pub fn render_report(report: &BatchReport, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(render_text(report)),
        OutputMode::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

/// Banner, per-note problems, then the summary, each block between separators.
fn render_text(report: &BatchReport) -> String {
    let with_level = |pred: fn(&MessageLevel) -> bool| {
        report
            .messages
            .iter()
            .filter(move |m| pred(&m.level))
            .collect::<Vec<_>>()
    };
    let banner = with_level(|l| matches!(l, MessageLevel::Info));
    let details = with_level(|l| matches!(l, MessageLevel::Warning | MessageLevel::Error));
    let totals = with_level(|l| matches!(l, MessageLevel::Success));

    let mut out = String::new();
    out.push_str(LINE_BREAK);
    out.push('\n');
    for message in banner {
        push_line(&mut out, message);
    }
    out.push_str(LINE_BREAK);
    out.push('\n');

    if !details.is_empty() {
        for message in details {
            push_line(&mut out, message);
        }
        out.push_str(LINE_BREAK);
        out.push('\n');
    }

    let skipped = report.skipped_existing + report.skipped_trashed + report.skipped_archived;
    if skipped > 0 {
        let line = format!(
            "Skipped {} notes ({} already converted, {} trashed, {} archived)",
            skipped, report.skipped_existing, report.skipped_trashed, report.skipped_archived
        );
        out.push_str(&style(line).dim().to_string());
        out.push('\n');
    }
    for message in totals {
        push_line(&mut out, message);
    }
    out
}

fn push_line(out: &mut String, message: &CmdMessage) {
    let styled = match message.level {
        MessageLevel::Info => style(message.content.clone()).dim(),
        MessageLevel::Success => style(message.content.clone()).green(),
        MessageLevel::Warning => style(format!("WARNING: {}", message.content)).yellow(),
        MessageLevel::Error => style(format!("ERROR: {}", message.content)).red(),
    };
    out.push_str(&styled.to_string());
    out.push('\n');
}
