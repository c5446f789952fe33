//! Two-column CSV export

use std::path::Path;

use crate::error::Result;
use crate::types::PromptResults;

/// Header row of the export
pub const CSV_HEADER: [&str; 2] = ["Paragraph Number", "Video Prompt"];

/// Write results to any writer
pub fn write_csv_to<W: std::io::Write>(results: &PromptResults, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for (number, outcome) in results.iter() {
        csv.write_record([number.to_string(), outcome.render()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the CSV file, truncating any existing file
pub fn write_csv(results: &PromptResults, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv_to(results, file)?;

    tracing::info!("Wrote CSV export: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptOutcome;

    #[test]
    fn test_rows_sorted_and_quoted() {
        let mut results = PromptResults::new();
        results.record(10, PromptOutcome::Generated("Low angle, torches flicker.".into()));
        results.record(3, PromptOutcome::Generated("PROMPT_A".into()));
        results.record(4, PromptOutcome::Failed("HTTP 500".into()));

        let mut buf = Vec::new();
        write_csv_to(&results, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "Paragraph Number,Video Prompt\r\n\
             3,PROMPT_A\r\n\
             4,ERROR: HTTP 500\r\n\
             10,\"Low angle, torches flicker.\"\r\n"
        );
    }

    #[test]
    fn test_header_only_when_empty() {
        let mut buf = Vec::new();
        write_csv_to(&PromptResults::new(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Paragraph Number,Video Prompt\r\n");
    }

    #[test]
    fn test_csv_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video_prompts.csv");
        let mut results = PromptResults::new();
        results.record(1, PromptOutcome::Generated("Line one\nline \"two\"".into()));
        write_csv(&results, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "Line one\nline \"two\"");
    }
}
