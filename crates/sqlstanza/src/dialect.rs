//! Placeholder dialects.
//!
//! Fragments are always written with the unnamed `?` marker. Dialects that
//! need numbered markers get them by a left-to-right textual rewrite of the
//! assembled statement.

use crate::error::{StanzaError, StanzaResult};
use std::fmt;
use std::str::FromStr;

/// The unnamed placeholder marker fragments are written with.
pub const MARKER: char = '?';

/// How bind placeholders appear in the rendered SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// Leave `?` untouched (MySQL, SQLite, ODBC).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "mysql", alias = "sqlite"))]
    Question,
    /// `$1, $2, ...`
    #[cfg_attr(feature = "serde", serde(alias = "postgresql", alias = "pg"))]
    Postgres,
    /// `@p1, @p2, ...`
    #[cfg_attr(feature = "serde", serde(alias = "mssql"))]
    SqlServer,
}

impl Dialect {
    /// Prefix of a numbered marker, or `None` when `?` is kept.
    pub fn numbered_prefix(self) -> Option<&'static str> {
        match self {
            Dialect::Question => None,
            Dialect::Postgres => Some("$"),
            Dialect::SqlServer => Some("@p"),
        }
    }

    /// Whether rendering rewrites `?` markers.
    pub fn rewrites(self) -> bool {
        self.numbered_prefix().is_some()
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Question => "question",
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sqlserver",
        }
    }

    /// Rewrite every `?` in `sql` into this dialect's numbered marker.
    ///
    /// Numbering starts at 1 and advances once per marker, in order of
    /// appearance. The scan is purely textual: a `?` inside a quoted literal
    /// or an operator such as jsonb `?|` is renumbered too.
    pub fn rewrite(self, sql: &str) -> String {
        match self.numbered_prefix() {
            Some(prefix) => rewrite_placeholders(sql, prefix),
            None => sql.to_string(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = StanzaError;

    fn from_str(s: &str) -> StanzaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "mysql" | "sqlite" => Ok(Dialect::Question),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            _ => Err(StanzaError::UnknownDialect(s.to_string())),
        }
    }
}

/// Count unnamed markers in `sql`.
pub(crate) fn count_markers(sql: &str) -> usize {
    sql.matches(MARKER).count()
}

fn rewrite_placeholders(sql: &str, prefix: &str) -> String {
    // Write a usize as decimal digits into `out` without going through fmt.
    #[inline]
    fn push_usize(out: &mut String, mut n: usize) {
        if n < 10 {
            out.push((b'0' + n as u8) as char);
            return;
        }
        // Stack buffer for up to 20 digits (u64::MAX).
        let mut buf = [0u8; 20];
        let mut pos = buf.len();
        while n > 0 {
            pos -= 1;
            buf[pos] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &digit in &buf[pos..] {
            out.push(digit as char);
        }
    }

    let markers = count_markers(sql);
    if markers == 0 {
        return sql.to_string();
    }

    // Each marker grows by the prefix plus at most a handful of digits.
    let mut out = String::with_capacity(sql.len() + markers * (prefix.len() + 3));
    let mut idx: usize = 0;
    let mut rest = sql;
    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        idx += 1;
        out.push_str(prefix);
        push_usize(&mut out, idx);
        rest = &rest[pos + MARKER.len_utf8()..];
    }
    out.push_str(rest);
    out
}
