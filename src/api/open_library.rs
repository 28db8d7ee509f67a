use std::collections::HashMap;

use log::{info, trace, warn};

use crate::{
    error::ErrorKind,
    record::{Lookup, Record},
};

use super::Client;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/api";

pub(crate) fn by_isbn<C: Client>(isbn: &str) -> Lookup {
    if isbn.parse::<isbn::Isbn>().is_err() {
        info!("'{isbn}' is not a valid ISBN-10 or ISBN-13, skipping the request");
        return Lookup::InvalidIdentifier;
    }

    lookup::<C>(OPEN_LIBRARY_URL, &format!("ISBN:{isbn}"))
}

pub(crate) fn by_lccn<C: Client>(lccn: &str) -> Lookup {
    lookup::<C>(OPEN_LIBRARY_URL, &format!("LCCN:{lccn}"))
}

pub(crate) fn by_oclc<C: Client>(oclc: &str) -> Lookup {
    lookup::<C>(OPEN_LIBRARY_URL, &format!("OCLC:{oclc}"))
}

/// Fetches the record stored under `bibkey`.
///
/// The bibkey is embedded in the query string as-is, the books endpoint
/// accepts its colons and hyphens unescaped.
fn lookup<C: Client>(base_url: &str, bibkey: &str) -> Lookup {
    info!("Searching Open Library for '{bibkey}'");
    let url = format!("{base_url}/books?bibkeys={bibkey}&jscmd=data&format=json");

    let mut records = fetch_records::<C>(&url);

    match records.remove(bibkey) {
        Some(record) => Lookup::Found(record),
        None => Lookup::NotFound,
    }
}

/// Any failed or undecodable fetch degrades to an empty map, so it ends in
/// the same `NotFound` as a response with no matches.
fn fetch_records<C: Client>(url: &str) -> HashMap<String, Record> {
    let client = C::default();

    match client.get_json(url) {
        Ok(records) => {
            trace!("Request was successful");
            records
        }
        Err(err) if err.kind() == ErrorKind::Status => {
            warn!("Open Library returned an error response: {err}");
            HashMap::new()
        }
        Err(err) => {
            warn!("Open Library request failed: {err}");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{
            assert_url, impl_json_producer, MockClient, NetworkErrorProducer, StatusErrorProducer,
        },
        record::Lookup,
    };

    const OPEN_LIBRARY_BOOK_JSON: &str = include_str!("../../tests/data/open_library_book.json");

    impl_json_producer! {
        ValidJsonProducer => Ok(OPEN_LIBRARY_BOOK_JSON.to_owned()),
    }

    #[test]
    fn record_found_for_known_isbn() {
        let result = super::by_isbn::<MockClient<ValidJsonProducer>>("0812511816");

        let record = result
            .record()
            .expect("response contains the requested bibkey");
        assert_eq!(Some("The Eye of the World"), record.title());
        assert_url!(
            "https://openlibrary.org/api/books?bibkeys=ISBN:0812511816&jscmd=data&format=json"
        );
    }

    #[test]
    fn isbn_with_bad_check_digit_makes_no_request() {
        let result = super::by_isbn::<MockClient>("0812511817");

        assert_eq!(Lookup::InvalidIdentifier, result);
        assert_url!("", "an invalid ISBN should never reach the client");
    }

    #[test]
    fn non_numeric_isbn_makes_no_request() {
        let result = super::by_isbn::<MockClient>("not-an-isbn");

        assert_eq!(Lookup::InvalidIdentifier, result);
        assert_url!("", "an invalid ISBN should never reach the client");
    }

    #[test]
    fn isbn_13_hyphens_survive_into_the_url() {
        let result = super::by_isbn::<MockClient>("978-3-16-148410-0");

        assert_eq!(Lookup::NotFound, result);
        // Not expecting percent encoding here, the bibkey goes in verbatim.
        assert_url!(
            "https://openlibrary.org/api/books?bibkeys=ISBN:978-3-16-148410-0&jscmd=data&format=json"
        );
    }

    #[test]
    fn empty_response_is_not_found() {
        let result = super::by_isbn::<MockClient>("0812511816");

        assert_eq!(Lookup::NotFound, result);
    }

    #[test]
    fn response_keyed_by_another_bibkey_is_not_found() {
        let result = super::by_isbn::<MockClient<ValidJsonProducer>>("1590302257");

        assert_eq!(Lookup::NotFound, result);
    }

    #[test]
    fn error_status_is_not_found() {
        let result = super::by_lccn::<MockClient<StatusErrorProducer>>("93005405");

        assert_eq!(Lookup::NotFound, result);
    }

    #[test]
    fn unreachable_host_is_not_found() {
        let result = super::by_oclc::<MockClient<NetworkErrorProducer>>("28891469");

        assert_eq!(Lookup::NotFound, result);
    }

    #[test]
    fn lccn_is_not_validated() {
        let result = super::by_lccn::<MockClient>("");

        assert_eq!(Lookup::NotFound, result);
        assert_url!("https://openlibrary.org/api/books?bibkeys=LCCN:&jscmd=data&format=json");
    }

    #[test]
    fn oclc_is_not_validated() {
        let result = super::by_oclc::<MockClient>("anything at all");

        assert_eq!(Lookup::NotFound, result);
        assert_url!(
            "https://openlibrary.org/api/books?bibkeys=OCLC:anything at all&jscmd=data&format=json"
        );
    }

    #[test]
    fn base_url_is_honored() {
        let result = super::lookup::<MockClient>("http://localhost:8080/api", "ISBN:0812511816");

        assert_eq!(Lookup::NotFound, result);
        assert_url!("http://localhost:8080/api/books?bibkeys=ISBN:0812511816&jscmd=data&format=json");
    }
}
