//! Rendering and emitting result records.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{ProcessError, Result};
use crate::types::ProcessResult;

/// Label used in errors when standard output cannot be written.
pub const STDOUT_LABEL: &str = "<stdout>";

/// Serialize a result as JSON indented by two spaces.
pub fn render(result: &ProcessResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write rendered output to `path`, or to `stdout` when no path is given.
///
/// Files are created or truncated and receive the text as-is. The stdout
/// form is followed by a newline.
pub fn write_output<W: Write>(rendered: &str, path: Option<&Path>, stdout: &mut W) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered).map_err(|e| ProcessError::write(path, e)),
        None => writeln!(stdout, "{rendered}")
            .and_then(|()| stdout.flush())
            .map_err(|e| ProcessError::write(STDOUT_LABEL, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Map};

    fn sample() -> ProcessResult {
        let mut data = Map::new();
        data.insert("length".to_string(), json!(2));
        ProcessResult::success("ok", Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .with_data(data)
    }

    #[test]
    fn test_render_two_space_indent() {
        let rendered = render(&sample()).unwrap();
        let expected = "{\n  \"success\": true,\n  \"message\": \"ok\",\n  \"data\": {\n    \"length\": 2\n  },\n  \"timestamp\": \"2024-01-02T03:04:05Z\"\n}";

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_write_to_stdout_sink() {
        let mut sink = Vec::new();
        write_output("{}", None, &mut sink).unwrap();

        assert_eq!(sink, b"{}\n");
    }

    #[test]
    fn test_write_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old contents that are longer").unwrap();

        let mut sink = Vec::new();
        write_output("{}", Some(&path), &mut sink).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");

        let err = write_output("{}", Some(&path), &mut Vec::new()).unwrap_err();
        assert!(err.is_write());
    }
}
