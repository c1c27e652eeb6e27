pub mod client;
pub mod dispatch;
pub mod source;
pub mod types;

pub use client::RestCountriesClient;
pub use dispatch::InFlightSearch;
pub use source::{CountrySource, FetchError, GENERIC_FAILURE_MESSAGE, NOT_FOUND_MESSAGE};
pub use types::{CountryName, CountryRecord, FlagImages, NativeName};
