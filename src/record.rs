use serde::Deserialize;
use serde_json::{Map, Value};

/// A single book record from the Open Library Books API.
///
/// Open Library does not promise a stable shape for `jscmd=data` records, so
/// the fields stay a raw JSON tree and are read through accessors that
/// tolerate absence.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Returns the raw value of `field`, if the record has one.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value of `field` when it is a plain string.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Title of the book.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    /// Publication date, in whatever freeform string the record carries.
    #[must_use]
    pub fn publish_date(&self) -> Option<&str> {
        self.text("publish_date")
    }

    /// Author names, in the order the record lists them.
    #[must_use]
    pub fn authors(&self) -> Vec<&str> {
        self.get("authors")
            .and_then(Value::as_array)
            .map(|authors| {
                authors
                    .iter()
                    .filter_map(|author| author.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The outcome of a single lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// The API returned a record for the identifier.
    Found(Record),
    /// The API had no record for the identifier, or could not be reached.
    NotFound,
    /// The identifier is not a valid ISBN and no request was made.
    InvalidIdentifier,
}

impl Lookup {
    /// Returns the record when one was found.
    #[must_use]
    pub fn record(self) -> Option<Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound | Self::InvalidIdentifier => None,
        }
    }
}
