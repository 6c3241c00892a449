use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::GzDecoder;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::analysis::cross_correlation::CorrelationResult;
use crate::Error;

/// Read a series of values from a text file.
///
/// The file holds one or more whitespace separated values per line. Empty lines
/// and lines starting with `#` or `@` are skipped. Files with a `.gz` extension
/// are decompressed while reading.
pub fn read_series(path: &Path) -> Result<Vec<f64>, Error> {
    parse_series_text(open_reader(path)?)
}

/// Read a series of raw little-endian `f64` values from a file.
///
/// The values are packed back to back until the end of the file. Files with
/// a `.gz` extension are decompressed while reading.
pub fn read_series_binary(path: &Path) -> Result<Vec<f64>, Error> {
    parse_series_binary(open_reader(path)?)
}

/// Write the correlogram as a two-column text file, with the summary values
/// in a comment header.
pub fn write_correlogram(path: &Path, result: &CorrelationResult) -> Result<(), io::Error> {
    let fp = File::create(path)?;
    let mut writer = BufWriter::new(fp);

    writeln!(
        writer,
        "# best lag {:6} correlation {:12.5}",
        result.best_lag, result.best_value
    )?;
    writeln!(writer, "# zero lag correlation {:12.5}", result.zero_lag_value)?;

    for entry in &result.entries {
        writeln!(writer, "{:6} {:12.5}", entry.lag, entry.value)?;
    }

    Ok(())
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, io::Error> {
    let fp = File::open(path)?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(fp))))
    } else {
        Ok(Box::new(BufReader::new(fp)))
    }
}

fn parse_series_text<R: BufRead>(reader: R) -> Result<Vec<f64>, Error> {
    let mut values = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();

        if content.is_empty() || content.starts_with('#') || content.starts_with('@') {
            continue;
        }

        for token in content.split_whitespace() {
            let value = token.parse().map_err(|_| Error::ParseSeries {
                line: i + 1,
                token: token.to_string(),
            })?;

            values.push(value);
        }
    }

    Ok(values)
}

fn parse_series_binary<R: Read>(mut reader: R) -> Result<Vec<f64>, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % 8 != 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!(
                "binary series of {} bytes is not a whole number of f64 values",
                bytes.len()
            ),
        )
        .into());
    }

    let mut slice = bytes.as_slice();
    let mut values = Vec::with_capacity(bytes.len() / 8);

    while !slice.is_empty() {
        values.push(slice.read_f64::<LittleEndian>()?);
    }

    Ok(values)
}

#[test]
fn test_text_series_values_are_read_across_lines() {
    let data = "0.0 1.0 2.0\n\n# comment\n@ legend\n3.0\n4.0 5.0\n";

    let values = parse_series_text(io::Cursor::new(data)).unwrap();

    assert_eq!(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], values);
}

#[test]
fn test_text_series_bad_token_reports_its_line() {
    let data = "0.0\n1.0\nnot-a-number\n";

    match parse_series_text(io::Cursor::new(data)) {
        Err(Error::ParseSeries { line, token }) => {
            assert_eq!(3, line);
            assert_eq!("not-a-number", token);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_binary_series_round_trip() {
    use byteorder::WriteBytesExt;

    let mut buffer = Vec::new();
    for &value in &[0.5, -1.25, 3.75] {
        buffer.write_f64::<LittleEndian>(value).unwrap();
    }

    let values = parse_series_binary(io::Cursor::new(buffer)).unwrap();

    assert_eq!(vec![0.5, -1.25, 3.75], values);
}

#[test]
fn test_binary_series_with_trailing_bytes_is_rejected() {
    let buffer = vec![0u8; 12];

    assert!(parse_series_binary(io::Cursor::new(buffer)).is_err());
}
