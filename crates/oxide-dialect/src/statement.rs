//! Dialect-agnostic helpers for raw SQL text.
//!
//! Nothing here parses SQL. The splitter only tracks quote state, and name
//! extraction and preview limiting work on the statement prefix.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dialect::RowLimit;

/// Row limit applied when the caller gives none.
pub const DEFAULT_PREVIEW_LIMIT: u64 = 100;

static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*CREATE\s+(?:OR\s+REPLACE\s*)?\s*FUNCTION\s+(?:[\w\d_]+\.)?([\w_\d]+)")
        .unwrap()
});
static PROCEDURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*CREATE\s+(?:OR\s+REPLACE\s*)?\s*PROCEDURE\s+(?:[\w\d_]+\.)?([\w_\d]+)")
        .unwrap()
});
static SELECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^select\b").unwrap());
static ORDER_BY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\border\s+by\b").unwrap());

/// Splits SQL text into statements on semicolons outside quotes.
///
/// Yields each statement with its terminating `;` and without leading
/// whitespace. Text after the last unquoted `;` is not a statement and is
/// never yielded. Backslashes do not escape quotes: `'it\'s'` closes the
/// literal at the second quote.
#[derive(Debug, Clone)]
pub struct StatementSplitter<'a> {
    /// The input text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> StatementSplitter<'a> {
    /// Creates a splitter over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Scans up to and including the next unquoted `;`.
    ///
    /// Returns `false` if the input ended first.
    fn scan_statement(&mut self) -> bool {
        let mut quote: Option<char> = None;
        while let Some(c) = self.advance() {
            match (quote, c) {
                (None, ';') => return true,
                (None, '\'' | '"') => quote = Some(c),
                (Some(q), c) if c == q => quote = None,
                _ => {}
            }
        }
        false
    }
}

impl<'a> Iterator for StatementSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.input.len() {
            let start = self.pos;
            if !self.scan_statement() {
                let rest = self.input[start..].trim();
                if !rest.is_empty() {
                    debug!(bytes = rest.len(), "Dropping text after the last semicolon");
                }
                return None;
            }
            let piece = self.input[start..self.pos].trim_start();
            if !piece.trim_end_matches(';').trim().is_empty() {
                return Some(piece);
            }
        }
        None
    }
}

/// Splits SQL text into `;`-terminated statements.
///
/// A trailing remainder without `;` is dropped.
#[must_use]
pub fn split_statements(sql: &str) -> Vec<String> {
    StatementSplitter::new(sql).map(String::from).collect()
}

/// Returns the name of the function a `CREATE [OR REPLACE] FUNCTION` defines.
#[must_use]
pub fn extract_function_name(sql: &str) -> Option<String> {
    FUNCTION_RE
        .captures(sql)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns the name of the procedure a `CREATE [OR REPLACE] PROCEDURE`
/// defines.
#[must_use]
pub fn extract_procedure_name(sql: &str) -> Option<String> {
    PROCEDURE_RE
        .captures(sql)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Limits a SELECT with `LIMIT n`.
///
/// See [`limit_preview_with`].
#[must_use]
pub fn limit_preview(sql: &str, limit: Option<u64>) -> Cow<'_, str> {
    limit_preview_with(sql, limit, RowLimit::Limit)
}

/// Keeps the first statement of `sql` and bounds its rows if it is a SELECT.
///
/// Anything that does not start with `select` is returned unchanged. A limit
/// of `None` or `Some(0)` means [`DEFAULT_PREVIEW_LIMIT`].
///
/// ```rust
/// use oxide_dialect::dialect::RowLimit;
/// use oxide_dialect::statement::limit_preview_with;
///
/// let sql = limit_preview_with("SELECT * FROM t; SELECT 2", Some(5), RowLimit::FetchFirst);
/// assert_eq!(sql, "SELECT * FROM t FETCH FIRST 5 ROWS ONLY;");
/// ```
#[must_use]
pub fn limit_preview_with(sql: &str, limit: Option<u64>, style: RowLimit) -> Cow<'_, str> {
    let trimmed = sql.trim();
    if !SELECT_RE.is_match(trimmed) {
        debug!(style = ?style, "Not a SELECT, leaving statement unlimited");
        return Cow::Borrowed(sql);
    }

    let first = StatementSplitter::new(trimmed)
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches(';')
        .trim_end();
    let n = match limit {
        Some(n) if n > 0 => n,
        _ => DEFAULT_PREVIEW_LIMIT,
    };

    let limited = match style {
        RowLimit::Limit => format!("{first} LIMIT {n};"),
        RowLimit::LimitOffset => format!("{first} LIMIT 0,{n};"),
        RowLimit::OffsetFetch if ORDER_BY_RE.is_match(first) => {
            format!("{first} OFFSET 0 ROWS FETCH NEXT {n} ROWS ONLY;")
        }
        RowLimit::OffsetFetch => {
            format!("{first} ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT {n} ROWS ONLY;")
        }
        RowLimit::FetchFirst => format!("{first} FETCH FIRST {n} ROWS ONLY;"),
    };
    Cow::Owned(limited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_quoted_semicolons() {
        assert_eq!(
            split_statements("SELECT 1; SELECT ';' ;"),
            vec!["SELECT 1;", "SELECT ';' ;"]
        );
        assert_eq!(
            split_statements(r#"INSERT INTO t VALUES ("a;b");UPDATE t SET x = 1;"#),
            vec![r#"INSERT INTO t VALUES ("a;b");"#, "UPDATE t SET x = 1;"]
        );
    }

    #[test]
    fn test_split_mixed_quotes() {
        // A double quote inside a single-quoted literal does not open a new one.
        assert_eq!(
            split_statements(r#"SELECT 'say "hi;"'; SELECT 2;"#),
            vec![r#"SELECT 'say "hi;"';"#, "SELECT 2;"]
        );
    }

    #[test]
    fn test_split_drops_empty_pieces() {
        assert_eq!(
            split_statements("  SELECT 1;;  ;\n\tSELECT 2;  \n"),
            vec!["SELECT 1;", "SELECT 2;"]
        );
        assert!(split_statements("").is_empty());
        assert!(split_statements(" ;\n ").is_empty());
    }

    #[test]
    fn test_split_drops_unterminated_tail() {
        assert_eq!(split_statements("SELECT 1; SELECT 2"), vec!["SELECT 1;"]);
        assert_eq!(split_statements("SELECT 1; SELECT 'a;b"), vec!["SELECT 1;"]);
        assert!(split_statements("SELECT 1").is_empty());
    }

    #[test]
    fn test_split_does_not_honor_backslash_escapes() {
        assert_eq!(
            split_statements(r"SELECT 'it\'s; here'; SELECT 2;"),
            // The rest opens a quote that never closes, so it has no terminator.
            vec![r"SELECT 'it\'s;"]
        );
    }

    #[test]
    fn test_extract_function_name() {
        assert_eq!(
            extract_function_name("CREATE OR REPLACE FUNCTION calc_total(x int) RETURNS int"),
            Some("calc_total".to_string())
        );
        assert_eq!(
            extract_function_name("  create function billing.calc_tax(x int)"),
            Some("calc_tax".to_string())
        );
        assert_eq!(extract_function_name("SELECT 1"), None);
        assert_eq!(extract_function_name("CREATE PROCEDURE p()"), None);
    }

    #[test]
    fn test_extract_procedure_name() {
        assert_eq!(
            extract_procedure_name("CREATE PROCEDURE dbo.refresh_stats AS BEGIN END"),
            Some("refresh_stats".to_string())
        );
        assert_eq!(extract_procedure_name("CREATE FUNCTION f()"), None);
    }

    #[test]
    fn test_limit_preview_defaults_to_100() {
        assert_eq!(limit_preview("select * from t", None), "select * from t LIMIT 100;");
        assert_eq!(limit_preview("select * from t", Some(0)), "select * from t LIMIT 100;");
        assert_eq!(limit_preview("Select * from t;", Some(7)), "Select * from t LIMIT 7;");
    }

    #[test]
    fn test_limit_preview_leaves_other_statements() {
        let sql = "insert into t values (1)";
        assert!(matches!(limit_preview(sql, None), Cow::Borrowed(s) if s == sql));
        assert_eq!(limit_preview("selection_log()", None), "selection_log()");
    }

    #[test]
    fn test_limit_preview_first_statement_only() {
        assert_eq!(
            limit_preview_with("SELECT a FROM t; DROP TABLE t;", None, RowLimit::LimitOffset),
            "SELECT a FROM t LIMIT 0,100;"
        );
    }

    #[test]
    fn test_offset_fetch_adds_order_by() {
        assert_eq!(
            limit_preview_with("SELECT a FROM t", Some(10), RowLimit::OffsetFetch),
            "SELECT a FROM t ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY;"
        );
        assert_eq!(
            limit_preview_with("SELECT a FROM t ORDER BY a", Some(10), RowLimit::OffsetFetch),
            "SELECT a FROM t ORDER BY a OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY;"
        );
    }
}
