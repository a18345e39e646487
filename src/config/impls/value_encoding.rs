use std::fmt;
use crate::config::enums::value_encoding::ValueEncoding;

impl fmt::Display for ValueEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueEncoding::json => write!(f, "json"),
            ValueEncoding::msgpack => write!(f, "msgpack"),
        }
    }
}
