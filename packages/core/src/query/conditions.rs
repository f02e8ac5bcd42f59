//! Condition vocabulary
//!
//! One module per property category; every function binds the category and
//! operator and takes only the compared value. Emptiness checks always send
//! `true`, relative date windows send an empty object.

use crate::models::{Doc, Value};

/// `(category, operator, value)` of a property filter
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    category: String,
    operator: String,
    value: Value,
}

impl Condition {
    pub fn new(
        category: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            category: category.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Property kind the condition applies to, e.g. `text`
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `{operator: value}`
    pub fn body(&self) -> Doc {
        Doc::new().with(self.operator.clone(), self.value.clone())
    }
}

pub mod text {
    use super::Condition;

    const CATEGORY: &str = "text";

    pub fn equals(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "equals", value.into())
    }

    pub fn does_not_equal(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "does_not_equal", value.into())
    }

    pub fn contains(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "contains", value.into())
    }

    pub fn does_not_contain(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "does_not_contain", value.into())
    }

    pub fn starts_with(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "starts_with", value.into())
    }

    pub fn ends_with(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "ends_with", value.into())
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

pub mod number {
    use super::Condition;

    const CATEGORY: &str = "number";

    pub fn equals(value: i64) -> Condition {
        Condition::new(CATEGORY, "equals", value)
    }

    pub fn does_not_equal(value: i64) -> Condition {
        Condition::new(CATEGORY, "does_not_equal", value)
    }

    pub fn greater_than(value: i64) -> Condition {
        Condition::new(CATEGORY, "greater_than", value)
    }

    pub fn less_than(value: i64) -> Condition {
        Condition::new(CATEGORY, "less_than", value)
    }

    pub fn greater_than_or_equal_to(value: i64) -> Condition {
        Condition::new(CATEGORY, "greater_than_or_equal_to", value)
    }

    pub fn less_than_or_equal_to(value: i64) -> Condition {
        Condition::new(CATEGORY, "less_than_or_equal_to", value)
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

pub mod checkbox {
    use super::Condition;

    const CATEGORY: &str = "checkbox";

    pub fn equals(value: bool) -> Condition {
        Condition::new(CATEGORY, "equals", value)
    }

    pub fn does_not_equal(value: bool) -> Condition {
        Condition::new(CATEGORY, "does_not_equal", value)
    }
}

pub mod select {
    use super::Condition;

    const CATEGORY: &str = "select";

    pub fn equals(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "equals", value.into())
    }

    pub fn does_not_equal(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "does_not_equal", value.into())
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

pub mod multi_select {
    use super::Condition;

    const CATEGORY: &str = "multi_select";

    pub fn contains(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "contains", value.into())
    }

    pub fn does_not_contain(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "does_not_contain", value.into())
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

/// Dates are ISO-8601 strings; the relative windows take no value
pub mod date {
    use super::Condition;
    use crate::models::Doc;

    const CATEGORY: &str = "date";

    pub fn equals(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "equals", value.into())
    }

    pub fn before(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "before", value.into())
    }

    pub fn after(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "after", value.into())
    }

    pub fn on_or_before(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "on_or_before", value.into())
    }

    pub fn on_or_after(value: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "on_or_after", value.into())
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }

    pub fn past_week() -> Condition {
        Condition::new(CATEGORY, "past_week", Doc::new())
    }

    pub fn past_month() -> Condition {
        Condition::new(CATEGORY, "past_month", Doc::new())
    }

    pub fn past_year() -> Condition {
        Condition::new(CATEGORY, "past_year", Doc::new())
    }

    pub fn next_week() -> Condition {
        Condition::new(CATEGORY, "next_week", Doc::new())
    }

    pub fn next_month() -> Condition {
        Condition::new(CATEGORY, "next_month", Doc::new())
    }

    pub fn next_year() -> Condition {
        Condition::new(CATEGORY, "next_year", Doc::new())
    }
}

/// Values are user ids
pub mod people {
    use super::Condition;

    const CATEGORY: &str = "people";

    pub fn contains(user_id: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "contains", user_id.into())
    }

    pub fn does_not_contain(user_id: impl Into<String>) -> Condition {
        Condition::new(CATEGORY, "does_not_contain", user_id.into())
    }

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

pub mod files {
    use super::Condition;

    const CATEGORY: &str = "files";

    pub fn is_empty() -> Condition {
        Condition::new(CATEGORY, "is_empty", true)
    }

    pub fn is_not_empty() -> Condition {
        Condition::new(CATEGORY, "is_not_empty", true)
    }
}

/// Formula columns are filtered on their result type
///
/// `formula::text(text::contains("x"))` renders as
/// `{"formula": {"text": {"contains": "x"}}}` once bound to a column.
pub mod formula {
    use super::Condition;

    const CATEGORY: &str = "formula";

    fn wrap(inner: Condition) -> Condition {
        let operator = inner.category().to_string();
        Condition::new(CATEGORY, operator, inner.body())
    }

    /// Wraps a condition from [`super::text`]
    pub fn text(condition: Condition) -> Condition {
        wrap(condition)
    }

    /// Wraps a condition from [`super::checkbox`]
    pub fn checkbox(condition: Condition) -> Condition {
        wrap(condition)
    }

    /// Wraps a condition from [`super::number`]
    pub fn number(condition: Condition) -> Condition {
        wrap(condition)
    }

    /// Wraps a condition from [`super::date`]
    pub fn date(condition: Condition) -> Condition {
        wrap(condition)
    }
}
