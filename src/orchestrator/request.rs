//! Multi-line request text to `AllocationRequest`

use tracing::debug;

use crate::allocation::parser::{parse_entry_line, parse_header};
use crate::common::errors::{AllocationError, Result};
use crate::common::types::AllocationRequest;

/// Parse a whole request
///
/// The first non-blank line is the header; every later non-blank line
/// is one entry, kept in input order. The first malformed line aborts.
pub fn parse_request(text: &str) -> Result<AllocationRequest> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| AllocationError::header("", "request is empty"))?;
    let header = parse_header(header_line)?;

    let entries = lines.map(parse_entry_line).collect::<Result<Vec<_>>>()?;

    debug!(
        units = %header.units,
        unit_value = %header.unit_value,
        entries = entries.len(),
        "Parsed allocation request"
    );

    AllocationRequest::new(header, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_request() {
        let request = parse_request("2u $10\nAlice 1/1\n\n  Bob 3/1  \n").unwrap();
        assert_eq!(request.total_stake(), dec!(20.00));
        assert_eq!(request.unit_value(), dec!(10));
        let names: Vec<&str> = request.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(request.decimal_odds(), vec![dec!(2), dec!(4)]);
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let request = parse_request("\n\n!dutch 1u 5\r\nSolo 4/6\r\n").unwrap();
        assert_eq!(request.total_stake(), dec!(5.00));
        assert_eq!(request.entries().len(), 1);
    }

    #[test]
    fn test_empty_text_is_header_error() {
        for text in ["", "   \n\t\n"] {
            assert!(matches!(
                parse_request(text).unwrap_err(),
                AllocationError::HeaderFormat { .. }
            ));
        }
    }

    #[test]
    fn test_header_without_entries() {
        assert_eq!(parse_request("2u $10\n\n").unwrap_err(), AllocationError::EmptyRequest);
    }

    #[test]
    fn test_first_bad_line_aborts() {
        let err = parse_request("2u $10\nAlice 1/1\nJustAName\nBob 3/0").unwrap_err();
        assert_eq!(
            err,
            AllocationError::LineFormat {
                line: "JustAName".to_string()
            }
        );
    }

    #[test]
    fn test_bad_header_reported_before_entries() {
        let err = parse_request("ten dollars\nAlice 1/1").unwrap_err();
        assert!(matches!(err, AllocationError::HeaderFormat { .. }));
    }
}
