//! JSONL export boundary: one record per line, the shape the downstream
//! trainer consumes.
//!
//! ```text
//! {"text":"VENDRE","labels":[[0,6,"TRANSACTION"]]}
//! {"text":"Appartement S+2 disponible","labels":[[0,11,"TYPE"],[12,15,"TYPE"]]}
//! ```
//!
//! Reading the same shape back exists for the `validate` command, which
//! re-checks the annotation invariants on any produced file.

use crate::error::{Error, Result};
use annonce_core::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write records as JSONL.
pub fn write_jsonl<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records as JSONL to a file, creating or truncating it.
pub fn write_jsonl_path(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    write_jsonl(File::create(path)?, records)
}

/// Read records back from JSONL. Blank lines are skipped; a malformed line
/// fails with its 1-based line number.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .map_err(|e| Error::invalid_record(index + 1, e.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

/// Read records from a JSONL file on disk.
pub fn read_jsonl_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    read_jsonl(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use annonce_core::{Label, Span};

    #[test]
    fn line_shape_is_exact() {
        let records = vec![Record::new(
            "VENDRE",
            vec![Span::new(0, 6, Label::Transaction)],
        )];
        let mut buffer = Vec::new();
        write_jsonl(&mut buffer, &records).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{\"text\":\"VENDRE\",\"labels\":[[0,6,\"TRANSACTION\"]]}\n"
        );
    }

    #[test]
    fn round_trip_preserves_records() {
        let records = vec![
            Record::new("VENDRE", vec![Span::new(0, 6, Label::Transaction)]),
            Record::new("Surface de 120 m² exactement", vec![Span::new(11, 17, Label::Area)]),
            Record::new("no entities here", vec![]),
        ];
        let mut buffer = Vec::new();
        write_jsonl(&mut buffer, &records).unwrap();
        let back = read_jsonl(&buffer[..]).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = "\n{\"text\":\"x\",\"labels\":[]}\n\n";
        let back = read_jsonl(data.as_bytes()).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let data = "{\"text\":\"ok\",\"labels\":[]}\nnot json\n";
        let err = read_jsonl(data.as_bytes()).unwrap_err();
        match err {
            Error::InvalidRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
