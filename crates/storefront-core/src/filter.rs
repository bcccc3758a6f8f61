//! Predicate builder: accumulates per-field clauses and renders the boolean
//! filter string understood by the vector index.
//!
//! Clauses are grouped by field. Within a group they are OR-combined
//! (`color = "red" OR color = "blue"`); groups are AND-combined. Groups render
//! in the order their field was first touched.
//!
//! ```text
//! add_equality(color, "red")  ─┐
//! add_equality(color, "blue") ─┴─► (color = "red" OR color = "blue")
//! add_raw_clause(price, …)    ───► (price >= 10 AND price <= 20)      joined with AND
//! ```

use crate::types::ProductFilter;

/// A typed literal on the right-hand side of a comparison.
///
/// Strings render double-quoted; numbers and booleans render bare.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Literal::Num(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Num(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Num(n.into())
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Num(n.into())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

/// Comparison operators supported by the index's filter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        };
        f.write_str(op)
    }
}

// ---------------------------------------------------------------------------
// FilterExpression
// ---------------------------------------------------------------------------

/// Accumulator for predicate clauses, one OR-group per field.
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    groups: Vec<(String, Vec<String>)>,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `field <op> value` to the field's OR-group.
    pub fn add(&mut self, field: &str, op: Operator, value: impl Into<Literal>) -> &mut Self {
        let clause = format!("{field} {op} {}", value.into());
        self.group_mut(field).push(clause);
        self
    }

    /// Append `field = value` to the field's OR-group.
    pub fn add_equality(&mut self, field: &str, value: impl Into<Literal>) -> &mut Self {
        self.add(field, Operator::Eq, value)
    }

    /// Replace the field's clauses with one pre-formatted boolean expression.
    /// Used for ranges, which are not simple equalities.
    pub fn add_raw_clause(&mut self, field: &str, expression: impl Into<String>) -> &mut Self {
        let group = self.group_mut(field);
        group.clear();
        group.push(expression.into());
        self
    }

    pub fn has_any_clause(&self) -> bool {
        self.groups.iter().any(|(_, clauses)| !clauses.is_empty())
    }

    /// Render all groups as `(a OR b) AND (c)`.
    ///
    /// Callers should check [`has_any_clause`](Self::has_any_clause) first;
    /// an empty builder renders the empty string, which the index would
    /// reject. [`into_predicate`](Self::into_predicate) does both steps.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .filter(|(_, clauses)| !clauses.is_empty())
            .map(|(_, clauses)| format!("({})", clauses.join(" OR ")))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// `Some(rendered)` when at least one clause exists, `None` ("match all")
    /// otherwise.
    pub fn into_predicate(self) -> Option<String> {
        self.has_any_clause().then(|| self.render())
    }

    fn group_mut(&mut self, field: &str) -> &mut Vec<String> {
        let idx = match self.groups.iter().position(|(name, _)| name == field) {
            Some(idx) => idx,
            None => {
                self.groups.push((field.to_string(), Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }
}

// ---------------------------------------------------------------------------
// Compilation of a validated filter
// ---------------------------------------------------------------------------

/// Catalog field names as stored in the index metadata.
pub mod fields {
    pub const COLOR: &str = "color";
    pub const SIZE: &str = "size";
    pub const PRICE: &str = "price";
}

/// Compile a validated [`ProductFilter`] into a predicate builder.
///
/// Colors and sizes become equality clauses. The price range becomes a raw
/// `price >= low AND price <= high` clause using the pair exactly as stored.
pub fn compile(filter: &ProductFilter) -> FilterExpression {
    let mut expr = FilterExpression::new();

    for color in &filter.color {
        expr.add_equality(fields::COLOR, color.as_str());
    }
    for size in &filter.size {
        expr.add_equality(fields::SIZE, size.as_str());
    }

    let p = fields::PRICE;
    let low = Literal::from(filter.price.low);
    let high = Literal::from(filter.price.high);
    expr.add_raw_clause(p, format!("{p} >= {low} AND {p} <= {high}"));

    expr
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
