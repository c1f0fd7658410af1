#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parses one delimited record of numbers.
///
/// Fields are trimmed and may be quoted. Returns `None` if any field is not
/// a finite number or the line is blank.
pub fn parse_numeric_record(line: &str, delimiter: char) -> Option<Vec<f64>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    line.split(delimiter)
        .map(|field| {
            strip_surrounding_quotes(field.trim())
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'1.5'"), "1.5");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn parses_plain_and_quoted_fields() {
        assert_eq!(
            parse_numeric_record(r#" 1, "2.5" ,'-3e2' "#, ','),
            Some(vec![1.0, 2.5, -300.0])
        );
        assert_eq!(parse_numeric_record("4\t5", '\t'), Some(vec![4.0, 5.0]));
    }

    #[test]
    fn rejects_blank_and_malformed_lines() {
        assert_eq!(parse_numeric_record("   ", ','), None);
        assert_eq!(parse_numeric_record("1,abc,3", ','), None);
        assert_eq!(parse_numeric_record("1,NaN", ','), None);
        assert_eq!(parse_numeric_record("1,,3", ','), None);
    }
}
