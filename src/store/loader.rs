use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::{PolygonSet, StoreError, StoreResult};
use crate::parse::{LossyLines, ParseError, parse_polygon_line};

/// A polygon line that was rejected during loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub error: ParseError,
}

/// Outcome of loading polygon data
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub set: PolygonSet,
    pub skipped: Vec<SkippedLine>,
}

impl PolygonSet {
    /// Load polygons from a file, one per line
    ///
    /// Only a failure to open the file is fatal. See [`PolygonSet::load`] for
    /// how individual lines are treated.
    pub fn load_file(path: &Path) -> StoreResult<LoadReport> {
        let file = File::open(path).map_err(|source| StoreError::CannotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading polygons from {}", path.display());
        Self::load(BufReader::new(file))
    }

    /// Load polygons from a reader, one per line
    ///
    /// Blank lines are ignored. A line that is not exactly one well-formed
    /// polygon, including one with bytes that are not UTF-8, is skipped and
    /// recorded in the report. Loading ends at end of stream; a read error
    /// before that is returned.
    pub fn load<R: BufRead>(reader: R) -> StoreResult<LoadReport> {
        let mut polygons = Vec::new();
        let mut skipped = Vec::new();

        for (index, line) in LossyLines::new(reader).enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| StoreError::Read {
                line: line_no,
                source,
            })?;

            if line.trim().is_empty() {
                continue;
            }

            // The whole line must be one polygon; text after a valid polygon
            // rejects the line instead of being dropped.
            match parse_polygon_line(&line) {
                Ok(polygon) => polygons.push(polygon),
                Err(error) => {
                    warn!("Skipping line {}: {}", line_no, error);
                    skipped.push(SkippedLine {
                        line: line_no,
                        error,
                    });
                }
            }
        }

        debug!(
            "Loaded {} polygons, skipped {} lines",
            polygons.len(),
            skipped.len()
        );

        Ok(LoadReport {
            set: PolygonSet::new(polygons),
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{self, Cursor, Read};
    use tempfile::tempdir;

    #[test]
    fn test_load_well_formed() {
        let data = "3 (0;0) (0;1) (1;0)\n4 (0;0) (0;2) (2;2) (2;0)\n";
        let report = PolygonSet::load(Cursor::new(data)).unwrap();

        assert_eq!(report.set.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(report.set.polygons()[1].len(), 4);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let data = "3 (0;0) (0;1) (1;0)\n\
                    garbage\n\
                    2 (0;0) (1;1)\n\
                    4 (0;0) (0;1) (1;0)\n\
                    3 (0;0) (0;1) (1;0) (5;5)\n\
                    3 (1;1) (1;4) (4;1)\n";
        let report = PolygonSet::load(Cursor::new(data)).unwrap();

        assert_eq!(report.set.len(), 2);
        let lines: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5]);
        assert_eq!(report.set.polygons()[1].to_string(), "3 (1;1) (1;4) (4;1)");
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let data: &[u8] = b"3 (0;0) (0;1) (1;0)\n\xff\xfe garbage\n3 (1;1) (1;4) (4;1)\n";
        let report = PolygonSet::load(data).unwrap();

        assert_eq!(report.set.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let report = PolygonSet::load(Cursor::new("3 (0;0) (0;1) (1;0)\r\n\r\n")).unwrap();
        assert_eq!(report.set.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_blank_lines_are_not_errors() {
        let data = "\n   \n3 (0;0) (0;1) (1;0)\n\n";
        let report = PolygonSet::load(Cursor::new(data)).unwrap();

        assert_eq!(report.set.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_last_line_without_newline() {
        let report = PolygonSet::load(Cursor::new("3 (0;0) (0;1) (1;0)")).unwrap();
        assert_eq!(report.set.len(), 1);
    }

    #[test]
    fn test_malformed_last_line_then_end_of_stream() {
        let report = PolygonSet::load(Cursor::new("3 (0;0) (0;1) (1;0)\n3 (0;0)")).unwrap();
        assert_eq!(report.set.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
    }

    #[test]
    fn test_empty_input() {
        let report = PolygonSet::load(Cursor::new("")).unwrap();
        assert!(report.set.is_empty());
        assert!(report.skipped.is_empty());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let result = PolygonSet::load(io::BufReader::new(FailingReader));
        assert!(matches!(result, Err(StoreError::Read { line: 1, .. })));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polygons.txt");
        fs::write(&path, "3 (0;0) (0;1) (1;0)\nnope\n").unwrap();

        let report = PolygonSet::load_file(&path).unwrap();
        assert_eq!(report.set.len(), 1);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_missing_file_cannot_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = PolygonSet::load_file(&path).unwrap_err();
        assert!(matches!(err, StoreError::CannotOpen { .. }));
        assert!(err.to_string().starts_with("cannot open input"));
    }
}
