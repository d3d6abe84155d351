//! OpenF1 filter expressions.
//!
//! The API takes a flat `&`-joined list of `field<op>value` filters, e.g.
//! `session_key=9161&date>=2023-09-16T13%3A00%3A00%2B00%3A00`. Values are
//! percent-encoded; field names and operators are emitted verbatim.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Gte,
    Lte,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Gte => ">=",
            Op::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    field: String,
    op: Op,
    value: String,
}

/// Builder for an OpenF1 query string. Filters render in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filters: Vec<Filter>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: &str, op: Op, value: impl fmt::Display) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            op,
            value: value.to_string(),
        });
        self
    }

    pub fn eq(self, field: &str, value: impl fmt::Display) -> Self {
        self.filter(field, Op::Eq, value)
    }

    pub fn gte(self, field: &str, value: impl fmt::Display) -> Self {
        self.filter(field, Op::Gte, value)
    }

    pub fn lte(self, field: &str, value: impl fmt::Display) -> Self {
        self.filter(field, Op::Lte, value)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}{}{}",
                filter.field,
                filter.op.as_str(),
                urlencoding::encode(&filter.value)
            )?;
        }
        Ok(())
    }
}

/// Formats a timestamp the way OpenF1 stores them: RFC 3339, UTC, whole seconds.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
