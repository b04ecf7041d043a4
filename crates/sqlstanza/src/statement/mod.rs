//! The stanza-based statement builder.
//!
//! Every builder method takes `&self` and returns a new [`Statement`], so a
//! partially built statement can be reused as the base of several queries:
//!
//! ```
//! use sqlstanza::Statement;
//!
//! let base = Statement::new().select("id, name", ()).from("employees", ());
//! let active = base.where_("active", ());
//! let by_role = base.where_("role = ?", ("Comptroller",));
//!
//! assert_eq!(base.to_sql(), "SELECT id, name\nFROM employees");
//! assert_eq!(active.to_sql(), "SELECT id, name\nFROM employees\nWHERE (active)");
//! assert_eq!(by_role.arg_count(), 1);
//! ```

mod clause;
mod render;


pub use clause::{Clause, Component};

use crate::dialect::Dialect;
use crate::param::IntoArgs;

/// A SQL statement assembled from stanzas.
///
/// Clauses always render in grammar order (SELECT, FROM, JOIN, WHERE,
/// GROUP BY, HAVING, ORDER BY, LIMIT) no matter in which order the builder
/// methods were called. Fragments are trusted verbatim.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Statement {
    dialect: Dialect,
    selects: Clause,
    froms: Clause,
    joins: Clause,
    wheres: Clause,
    groups: Clause,
    havings: Clause,
    orders: Clause,
    limit: Component,
}

impl Statement {
    /// Create an empty statement that keeps `?` placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty statement that renders `$1, $2, ...` placeholders.
    pub fn postgres() -> Self {
        Self::new().dialect(Dialect::Postgres)
    }

    /// Current placeholder dialect.
    pub fn current_dialect(&self) -> Dialect {
        self.dialect
    }

    /// Copy of this statement rendering with `dialect`.
    pub fn dialect(&self, dialect: Dialect) -> Self {
        Self {
            dialect,
            ..self.clone()
        }
    }

    /// Copy of this statement with Postgres placeholder numbering switched on or off.
    pub fn with_postgres(&self, enabled: bool) -> Self {
        self.dialect(if enabled {
            Dialect::Postgres
        } else {
            Dialect::Question
        })
    }

    // ==================== Stanzas ====================

    /// Add a SELECT stanza, joined by commas.
    pub fn select(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let selects = self.selects.appended(component(fragment.into(), args));
        Self {
            selects,
            ..self.clone()
        }
    }

    /// Add a FROM stanza, joined by commas.
    pub fn from(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let froms = self.froms.appended(component(fragment.into(), args));
        Self {
            froms,
            ..self.clone()
        }
    }

    /// Add a JOIN stanza, joined by spaces.
    ///
    /// Unlike the other stanzas there is no keyword prefix: the fragment
    /// supplies its own `JOIN` / `LEFT JOIN` / `INNER JOIN ... ON ...`.
    pub fn join(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let joins = self.joins.appended(component(fragment.into(), args));
        Self {
            joins,
            ..self.clone()
        }
    }

    /// Add a WHERE stanza, wrapped in parentheses and joined by `AND`.
    pub fn where_(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let wheres = self.wheres.appended(component(parenthesize(fragment.into()), args));
        Self {
            wheres,
            ..self.clone()
        }
    }

    /// Add a HAVING stanza, wrapped in parentheses and joined by `AND`.
    pub fn having(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let havings = self
            .havings
            .appended(component(parenthesize(fragment.into()), args));
        Self {
            havings,
            ..self.clone()
        }
    }

    /// Add a GROUP BY stanza, joined by commas.
    pub fn group_by(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let groups = self.groups.appended(component(fragment.into(), args));
        Self {
            groups,
            ..self.clone()
        }
    }

    /// Add an ORDER BY stanza, joined by commas.
    pub fn order_by(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        let orders = self.orders.appended(component(fragment.into(), args));
        Self {
            orders,
            ..self.clone()
        }
    }

    /// Set or overwrite the LIMIT stanza.
    ///
    /// An empty fragment renders no LIMIT line; its arguments are still
    /// returned by [`args`](Self::args).
    pub fn limit(&self, fragment: impl Into<String>, args: impl IntoArgs) -> Self {
        Self {
            limit: component(fragment.into(), args),
            ..self.clone()
        }
    }

    // ==================== Inspection ====================

    /// SELECT components in insertion order.
    pub fn selects(&self) -> &Clause {
        &self.selects
    }

    /// FROM components in insertion order.
    pub fn froms(&self) -> &Clause {
        &self.froms
    }

    /// JOIN components in insertion order.
    pub fn joins(&self) -> &Clause {
        &self.joins
    }

    /// WHERE components; fragments already carry their parentheses.
    pub fn wheres(&self) -> &Clause {
        &self.wheres
    }

    /// GROUP BY components in insertion order.
    pub fn groups(&self) -> &Clause {
        &self.groups
    }

    /// HAVING components; fragments already carry their parentheses.
    pub fn havings(&self) -> &Clause {
        &self.havings
    }

    /// ORDER BY components in insertion order.
    pub fn orders(&self) -> &Clause {
        &self.orders
    }

    /// The LIMIT component, if one is set.
    pub fn limit_component(&self) -> Option<&Component> {
        (!self.limit.fragment.is_empty()).then_some(&self.limit)
    }

    /// True when nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.clauses().all(|(_, clause)| clause.is_empty()) && self.limit.fragment.is_empty()
    }

    /// List clauses in grammar order, paired with their kind.
    fn clauses(&self) -> impl Iterator<Item = (ClauseKind, &Clause)> {
        [
            (ClauseKind::Select, &self.selects),
            (ClauseKind::From, &self.froms),
            (ClauseKind::Join, &self.joins),
            (ClauseKind::Where, &self.wheres),
            (ClauseKind::GroupBy, &self.groups),
            (ClauseKind::Having, &self.havings),
            (ClauseKind::OrderBy, &self.orders),
        ]
        .into_iter()
    }
}

/// The list-valued clause kinds, in grammar order. LIMIT is handled apart
/// because it holds a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseKind {
    Select,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
}

impl ClauseKind {
    fn keyword(self) -> &'static str {
        match self {
            ClauseKind::Select => "SELECT ",
            ClauseKind::From => "FROM ",
            ClauseKind::Join => "",
            ClauseKind::Where => "WHERE ",
            ClauseKind::GroupBy => "GROUP BY ",
            ClauseKind::Having => "HAVING ",
            ClauseKind::OrderBy => "ORDER BY ",
        }
    }

    fn joiner(self) -> &'static str {
        match self {
            ClauseKind::Select | ClauseKind::From | ClauseKind::GroupBy | ClauseKind::OrderBy => {
                ", "
            }
            ClauseKind::Join => " ",
            ClauseKind::Where | ClauseKind::Having => " AND ",
        }
    }
}

fn component(fragment: String, args: impl IntoArgs) -> Component {
    Component::new(fragment, args.into_args())
}

fn parenthesize(fragment: String) -> String {
    let mut wrapped = String::with_capacity(fragment.len() + 2);
    wrapped.push('(');
    wrapped.push_str(&fragment);
    wrapped.push(')');
    wrapped
}
