//! Parsers for the request text
//!
//! Grammar, with `number = digit+ ("." digit+)?`:
//!
//! ```text
//! fraction = ws* number "/" number ws*
//! entry    = name ws+ fraction
//! header   = any* number ("u" | "U") ws* symbol? ws* number any*
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::common::errors::{AllocationError, FractionFault, Result};
use crate::common::types::{Entry, Header, OddsSpec};

/// Byte cursor over one line
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn skip_ws(&mut self) {
        while self.eat(char::is_whitespace) {}
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.eat(|c| c.is_ascii_digit()) {}
        self.pos - start
    }

    /// `digit+ ("." digit+)?`, leaves the cursor untouched on failure
    fn number(&mut self) -> Option<Decimal> {
        let start = self.pos;
        if self.digits() == 0 {
            return None;
        }
        let before_dot = self.pos;
        if self.eat(|c| c == '.') && self.digits() == 0 {
            // "3." is not a number; give the dot back
            self.pos = before_dot;
        }
        match Decimal::from_str(&self.src[start..self.pos]) {
            Ok(value) => Some(value),
            Err(_) => {
                self.pos = start;
                None
            }
        }
    }
}

/// Parse fractional odds such as `5/2` into decimal odds
pub fn parse_fraction(text: &str) -> Result<OddsSpec> {
    let trimmed = text.trim();
    let mut cursor = Cursor::new(trimmed);

    let numerator = cursor
        .number()
        .ok_or_else(|| AllocationError::fraction(text, FractionFault::Malformed))?;
    if !cursor.eat(|c| c == '/') {
        return Err(AllocationError::fraction(text, FractionFault::Malformed));
    }
    let denominator = cursor
        .number()
        .ok_or_else(|| AllocationError::fraction(text, FractionFault::Malformed))?;
    if !cursor.is_done() {
        return Err(AllocationError::fraction(text, FractionFault::Malformed));
    }

    if denominator.is_zero() {
        return Err(AllocationError::fraction(text, FractionFault::ZeroDenominator));
    }

    let decimal_odds = numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_add(Decimal::ONE))
        .ok_or(AllocationError::Arithmetic("odds overflow"))?;

    Ok(OddsSpec {
        text: trimmed.to_string(),
        numerator,
        denominator,
        decimal_odds,
    })
}

/// Parse `<name> <numerator>/<denominator>`
///
/// A last token without a `/` is a line error. A last token that has
/// one but is otherwise broken reports the fraction error instead.
pub fn parse_entry_line(line: &str) -> Result<Entry> {
    let trimmed = line.trim();
    let line_error = || AllocationError::LineFormat {
        line: line.to_string(),
    };

    let (name, token) = trimmed
        .rsplit_once(char::is_whitespace)
        .ok_or_else(line_error)?;
    if !token.contains('/') {
        return Err(line_error());
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(line_error());
    }

    let odds = parse_fraction(token)?;
    Ok(Entry::new(name, odds))
}

/// Parse the header, e.g. `!dutch 2u $10`
pub fn parse_header(line: &str) -> Result<Header> {
    let mut prev: Option<char> = None;
    for (idx, c) in line.char_indices() {
        // no start inside a number, after a sign, or after a digit-group comma
        let starts_number = c.is_ascii_digit()
            && !prev.is_some_and(|p| p.is_ascii_digit() || matches!(p, '.' | ',' | '-' | '+'));
        prev = Some(c);
        if !starts_number {
            continue;
        }
        if let Some(header) = header_at(line, idx) {
            return Ok(header);
        }
    }

    Err(AllocationError::header(line, "expected <count>u <amount>, e.g. 2u $10"))
}

fn header_at(line: &str, start: usize) -> Option<Header> {
    let mut cursor = Cursor::at(line, start);
    let units = cursor.number()?;
    if !cursor.eat(|c| c == 'u' || c == 'U') {
        return None;
    }
    cursor.skip_ws();
    if matches!(cursor.peek(), Some(c) if is_currency_symbol(c)) {
        cursor.bump();
        cursor.skip_ws();
    }
    let unit_value = cursor.number()?;
    // "1,000" would otherwise read as 1
    if cursor.eat(|c| c == ',') && cursor.eat(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(Header::new(units, unit_value))
}

fn is_currency_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !matches!(c, '.' | ',' | '-' | '+')
}
