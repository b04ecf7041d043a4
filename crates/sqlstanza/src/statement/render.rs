use super::Statement;
use crate::dialect;
use crate::error::{StanzaError, StanzaResult};
use crate::param::Param;
use std::fmt;
use tokio_postgres::types::ToSql;

impl Statement {
    /// Render the SQL, one clause per line, with this statement's placeholder dialect.
    pub fn to_sql(&self) -> String {
        self.dialect.rewrite(&self.assemble())
    }

    /// Bind arguments in the order their placeholders appear in [`to_sql`](Self::to_sql).
    pub fn args(&self) -> Vec<Param> {
        self.components().flat_map(|c| c.args.iter().cloned()).collect()
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.components()
            .flat_map(|c| c.args.iter().map(Param::as_ref))
            .collect()
    }

    /// Number of bind arguments.
    pub fn arg_count(&self) -> usize {
        self.components().map(|c| c.args.len()).sum()
    }

    /// Render SQL and collect arguments in one go.
    pub fn build(&self) -> (String, Vec<Param>) {
        let sql = self.to_sql();
        let args = self.args();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlstanza.sql",
            dialect = %self.dialect,
            param_count = args.len(),
            sql = %sql,
        );

        (sql, args)
    }

    /// Number of `?` markers in the assembled text, before any dialect rewrite.
    pub fn placeholder_count(&self) -> usize {
        self.components()
            .map(|c| dialect::count_markers(&c.fragment))
            .sum()
    }

    /// Check that every `?` marker has exactly one argument.
    ///
    /// Rendering never calls this; mismatches are otherwise passed through
    /// to the driver untouched.
    pub fn validate(&self) -> StanzaResult<()> {
        let placeholders = self.placeholder_count();
        let args = self.arg_count();
        if placeholders != args {
            return Err(StanzaError::mismatch(placeholders, args));
        }
        Ok(())
    }

    /// Every component in grammar order, LIMIT last.
    ///
    /// The LIMIT slot is always walked, even when its fragment is empty and
    /// it renders no text.
    fn components(&self) -> impl Iterator<Item = &super::Component> {
        self.clauses()
            .flat_map(|(_, clause)| clause.iter())
            .chain(std::iter::once(&self.limit))
    }

    /// Clause lines joined by newlines, placeholders untouched.
    fn assemble(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(8);
        for (kind, clause) in self.clauses() {
            if clause.is_empty() {
                continue;
            }
            let mut line = String::from(kind.keyword());
            line.push_str(&clause.joined(kind.joiner()));
            lines.push(line);
        }
        if let Some(limit) = self.limit_component() {
            lines.push(format!("LIMIT {}", limit.fragment));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
