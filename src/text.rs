//! Read and write the whitespace-delimited two-column text format that
//! MD analysis tools emit (`.xvg` and friends). Lines starting with `@`
//! or `#` are headers or metadata and are skipped.
use std::fs;
use std::io;
use std::io::prelude::*;
use std::path;

use thiserror::Error;

use crate::arrayops::TimeSeries;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to read data file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected at least two columns, found {found}")]
    MissingColumns { line: usize, found: usize },
    #[error("line {line}: could not parse {token:?} as a number")]
    InvalidNumber { line: usize, token: String },
}

/// Parse a two-column series from `reader`. The first two columns of
/// each data line become time and value; extra columns are ignored.
/// Line numbers in errors are 1-based and count comment lines too.
/// The comment marker must be the first byte of the line; anything
/// else, blank lines included, is data and must parse.
pub fn series_from_reader<R: BufRead>(reader: R) -> Result<TimeSeries, TextError> {
    let mut series = TimeSeries::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('@') || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let time = parse_token(tokens.next(), i + 1, 0)?;
        let value = parse_token(tokens.next(), i + 1, 1)?;
        series.push(time, value);
    }
    Ok(series)
}

fn parse_token(token: Option<&str>, line: usize, found: usize) -> Result<f64, TextError> {
    let token = token.ok_or(TextError::MissingColumns { line, found })?;
    token.parse::<f64>().map_err(|_| TextError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

pub fn series_from_file<P: AsRef<path::Path>>(path: P) -> Result<TimeSeries, TextError> {
    let file = fs::File::open(path)?;
    series_from_reader(io::BufReader::new(file))
}

/// Write `series` out tab-separated, one sample per line.
pub fn to_file<P: AsRef<path::Path>>(series: &TimeSeries, path: P) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    for (x, y) in series.iter() {
        writer.write_all(format!("{}\t{}\n", x, y).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const DOC: &str = "@ title \"Protein RMSD\"\n\
                       # produced by gmx rms\n\
                       0.0 1.0\n\
                       1.0 2.0\n\
                       2.0 3.0\n\
                       3.0 4.0\n\
                       4.0 5.0\n\
                       5.0 6.0\n";

    #[test]
    fn test_read_skips_headers() -> Result<(), TextError> {
        let series = series_from_reader(io::Cursor::new(DOC))?;
        assert_eq!(series.time_array, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(series.value_array, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_extra_columns_ignored() -> Result<(), TextError> {
        let series = series_from_reader(io::Cursor::new("0.0\t1.5\t9.0\n1.0  2.5  9.0\n"))?;
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(1), Some((1.0, 2.5)));
        Ok(())
    }

    #[test]
    fn test_non_numeric_token_is_an_error() {
        let err = series_from_reader(io::Cursor::new("0.0 1.0\n1.0 abc\n")).unwrap_err();
        match err {
            TextError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_short_line_is_an_error() {
        let err = series_from_reader(io::Cursor::new("# header\n42.0\n")).unwrap_err();
        match err {
            TextError::MissingColumns { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_an_error() {
        let err = series_from_reader(io::Cursor::new("0.0 1.0\n\n1.0 2.0\n")).unwrap_err();
        match err {
            TextError::MissingColumns { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 0);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_indented_comment_marker_is_data() {
        let err = series_from_reader(io::Cursor::new("0.0 1.0\n @ legend\n")).unwrap_err();
        match err {
            TextError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "@");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = series_from_file("./test/data/does_not_exist.xvg").unwrap_err();
        assert!(matches!(err, TextError::Io(_)));
    }

    #[test]
    fn test_write_then_read_back() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("trace.xvg");
        let series: TimeSeries = (0..10).map(|i| (i as f64 * 0.5, i as f64)).collect();
        to_file(&series, &path)?;
        let reread = series_from_file(&path)?;
        assert_eq!(series, reread);
        Ok(())
    }
}
