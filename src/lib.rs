#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
mod record;

pub use record::{Lookup, Record};

use log::trace;

type Client = reqwest::blocking::Client;

/// Look up a book by its ISBN.
///
/// The ISBN is checked before any request is made:
/// [`Lookup::InvalidIdentifier`] is returned for a string that is not a
/// valid ISBN-10 or ISBN-13 and the API is never contacted for it. A valid
/// ISBN is sent to the API as given, hyphens included.
#[inline]
#[must_use]
pub fn book_by_isbn(isbn: &str) -> Lookup {
    trace!("Look up book by ISBN of '{isbn}'");
    api::open_library::by_isbn::<Client>(isbn)
}

/// Look up a book by its Library of Congress Control Number.
///
/// The number is not validated, it is passed to the API as given.
#[inline]
#[must_use]
pub fn book_by_lccn(lccn: &str) -> Lookup {
    trace!("Look up book by LCCN of '{lccn}'");
    api::open_library::by_lccn::<Client>(lccn)
}

/// Look up a book by its OCLC control number.
///
/// The number is not validated, it is passed to the API as given.
#[inline]
#[must_use]
pub fn book_by_oclc(oclc: &str) -> Lookup {
    trace!("Look up book by OCLC number of '{oclc}'");
    api::open_library::by_oclc::<Client>(oclc)
}
