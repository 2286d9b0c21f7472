use std::io::{BufRead, BufReader, Lines, Write};

use crate::errors::{ToprankError, as_io_error};
use crate::queue::Entry;

/// Parse a `label priority` line into an entry. The line must have exactly
/// two whitespace-separated fields, the second a number.
pub fn parse_record(line: &str, line_num: usize) -> Result<Entry<String>, ToprankError> {
    let mut fields = line.split_whitespace();
    let (label, priority) = match (fields.next(), fields.next(), fields.next()) {
        (Some(label), Some(priority), None) => (label, priority),
        _ => return Err(ToprankError::BadRecord(line_num, String::from(line))),
    };
    match priority.parse::<f64>() {
        Ok(priority) => Ok(Entry::new(String::from(label), priority)),
        Err(_) => Err(ToprankError::BadPriority(
            line_num,
            String::from(priority),
        )),
    }
}

/// Iterator over the records in a line-oriented source. Blank lines are
/// skipped; line numbers in errors count all physical lines.
pub struct Records<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Records<R> {
        Records {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = std::io::Result<Entry<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(error)),
            };
            self.line_num += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_record(&line, self.line_num).map_err(as_io_error));
        }
    }
}

pub fn open_records(path: &str) -> std::io::Result<Records<Box<dyn BufRead>>> {
    log::debug!("reading records from '{}'", path);
    let reader = autocompress::autodetect_open(path)?;
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(reader));
    Ok(Records::new(reader))
}

pub fn write_records<W: Write>(writer: &mut W, entries: &[Entry<String>]) -> std::io::Result<()> {
    for entry in entries {
        writeln!(writer, "{}\t{}", entry.value, entry.priority)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_record() {
        let entry = parse_record("alpha 2.5", 1).unwrap();
        assert_eq!(entry.value, "alpha");
        assert_eq!(entry.priority, 2.5);

        let entry = parse_record("beta\t-3", 7).unwrap();
        assert_eq!(entry.value, "beta");
        assert_eq!(entry.priority, -3.0);
    }

    #[test]
    fn test_parse_record_bad_shape() {
        assert!(matches!(
            parse_record("alpha", 3),
            Err(ToprankError::BadRecord(3, _))
        ));
        assert!(matches!(
            parse_record("alpha 1 extra", 4),
            Err(ToprankError::BadRecord(4, _))
        ));
    }

    #[test]
    fn test_parse_record_bad_priority() {
        match parse_record("alpha lots", 9) {
            Err(ToprankError::BadPriority(line, text)) => {
                assert_eq!(line, 9);
                assert_eq!(text, "lots");
            }
            other => panic!("expected a priority error, got {:?}", other),
        }
    }

    #[test]
    fn test_records_skips_blank_lines() {
        let source = Cursor::new("alpha 1\n\n  \nbeta 2\n");
        let entries = Records::new(source)
            .collect::<std::io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "alpha");
        assert_eq!(entries[1].value, "beta");
    }

    #[test]
    fn test_records_reports_line_numbers() {
        let source = Cursor::new("alpha 1\n\nbeta two\n");
        let result = Records::new(source).collect::<std::io::Result<Vec<_>>>();
        let error = result.err().unwrap();
        assert!(error.to_string().contains("line 3"));
    }

    #[test]
    fn test_write_records() {
        let entries = vec![
            Entry::new(String::from("alpha"), 1.0),
            Entry::new(String::from("beta"), -2.5),
        ];
        let mut buffer = Vec::new();
        write_records(&mut buffer, &entries).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "alpha\t1\nbeta\t-2.5\n");
    }
}
