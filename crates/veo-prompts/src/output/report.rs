//! Plain-text report writer

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::PromptResults;

const RULE_WIDTH: usize = 80;

/// Render the report for a given generation time
pub fn render_txt_report(results: &PromptResults, generated_at: DateTime<Local>) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str(&heavy);
    out.push('\n');
    out.push_str("VIDEO PROMPTS GENERATED\n");
    out.push_str(&format!("Date: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&heavy);
    out.push_str("\n\n");

    for (number, outcome) in results.iter() {
        out.push_str(&format!("PARAGRAPH {}\n", number));
        out.push_str(&light);
        out.push('\n');
        out.push_str(&format!("{}\n\n", outcome));
    }

    out
}

/// Write the report, truncating any existing file
pub fn write_txt_report(results: &PromptResults, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_txt_report(results, Local::now()).as_bytes())?;
    writer.flush()?;

    tracing::info!("Wrote text report: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptOutcome;
    use chrono::TimeZone;

    #[test]
    fn test_report_layout() {
        let mut results = PromptResults::new();
        results.record(2, PromptOutcome::Failed("timeout".into()));
        results.record(1, PromptOutcome::Generated("Golden light on wet stone.".into()));
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();

        let report = render_txt_report(&results, at);
        let rule = "=".repeat(80);
        let dash = "-".repeat(80);
        let expected = format!(
            "{rule}\nVIDEO PROMPTS GENERATED\nDate: 2024-03-09 07:05:00\n{rule}\n\n\
             PARAGRAPH 1\n{dash}\nGolden light on wet stone.\n\n\
             PARAGRAPH 2\n{dash}\nERROR: timeout\n\n"
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video_prompts.txt");
        std::fs::write(&path, "stale content that is much longer than the new report ".repeat(50)).unwrap();

        let mut results = PromptResults::new();
        results.record(1, PromptOutcome::Generated("PROMPT_A".into()));
        write_txt_report(&results, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(&"=".repeat(80)));
        assert!(written.contains("PARAGRAPH 1\n"));
        assert!(!written.contains("stale"));
    }
}
