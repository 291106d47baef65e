//! Record type: the ordered fields of one line
//!
//! A line is split on [`SEPARATOR`] with every empty field kept, so a line that
//! starts or ends with a tab yields empty leading or trailing fields and an
//! empty line yields a single empty field. There is no quoting or escaping:
//! a field holding a tab or a line terminator does not survive a round trip.
//! A record with no fields has no line of its own (it would read back as one
//! empty field), so the store refuses to write it.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Field separator within a line
pub const SEPARATOR: char = '\t';

/// Ordered sequence of string fields derived from one line
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    /// Create a record from owned fields
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Split a line (without its terminator) into fields
    pub fn parse_line(line: &str) -> Self {
        Self(line.split(SEPARATOR).map(String::from).collect())
    }

    /// Join the fields into a line, without terminator
    pub fn to_line(&self) -> String {
        join_fields(&self.0)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }

    /// Force the record to exactly `width` slots.
    ///
    /// Extra fields are dropped; missing positions are `None`.
    pub fn into_width(self, width: usize) -> Vec<Option<String>> {
        let mut slots: Vec<Option<String>> = self.0.into_iter().take(width).map(Some).collect();
        slots.resize(width, None);
        slots
    }

    /// Index of the first field that would break the line format
    pub fn unescapable_field(&self) -> Option<usize> {
        first_unescapable(&self.0)
    }
}

pub(crate) fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(field.as_ref());
    }
    line
}

pub(crate) fn first_unescapable<S: AsRef<str>>(fields: &[S]) -> Option<usize> {
    fields
        .iter()
        .position(|f| f.as_ref().contains([SEPARATOR, '\n', '\r']))
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Record {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}
