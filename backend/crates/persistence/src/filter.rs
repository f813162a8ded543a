//! Query predicates
//!
//! A [`Filter`] is a conjunction of `column = value` equalities. Column names
//! are `&'static str` constants owned by the entity modules, so they can be
//! interpolated into SQL; values are always bound as parameters.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::Id;

use crate::entity::Entity;

/// A column value, used both for predicates and for inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    Bool(bool),
    Date(Option<NaiveDate>),
    Timestamp(DateTime<Utc>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl<T> From<Id<T>> for Value {
    fn from(id: Id<T>) -> Self {
        Value::Int(id.get())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Option<NaiveDate>> for Value {
    fn from(v: Option<NaiveDate>) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

/// Conjunction of equality predicates. Empty means "every row".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    terms: Vec<(&'static str, Value)>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Shorthand for `Filter::all().and(column, value)`
    pub fn by(column: &'static str, value: impl Into<Value>) -> Self {
        Self::all().and(column, value)
    }

    pub fn and(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.terms.push((column, value.into()));
        self
    }

    pub fn terms(&self) -> &[(&'static str, Value)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate against an in-memory row. Unknown columns never match.
    pub fn matches<E: Entity>(&self, row: &E) -> bool {
        self.terms
            .iter()
            .all(|(column, value)| row.column(column).as_ref() == Some(value))
    }
}
