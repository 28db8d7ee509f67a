use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind};

pub(crate) mod open_library;

/// The HTTP seam of the crate, kept as a trait so tests can swap the real
/// transport for a canned one.
pub(crate) trait Client
where
    Self: Default,
{
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            return Err(Error::new(ErrorKind::Status, format!("{status}: {body}")));
        }

        resp.json()
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_json_producer, MockClient, NetworkErrorProducer, Producer,
    StatusErrorProducer, URL_SINK,
};
