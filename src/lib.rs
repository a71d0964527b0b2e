pub mod coerce;
mod de;
pub mod error;
pub mod lenient;
mod num;
mod ser;
pub mod wire;

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use crate::coerce::{Coerce, Target};
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::lenient::{Lenient, LenientBool, LenientFloat, LenientInt, LenientString};
pub use crate::wire::WireValue;

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(Error::from_read)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(Error::from_read)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    serde_json::from_reader(reader).map_err(Error::from_read)
}

pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(Error::from_read)
}

pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Error::from_write)
}

pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from_write)
}

pub fn to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::from_write)
}

pub fn to_writer<T: Serialize, W: Write>(writer: W, value: &T) -> Result<()> {
    serde_json::to_writer(writer, value).map_err(Error::from_write)
}

pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(Error::from_write)
}
