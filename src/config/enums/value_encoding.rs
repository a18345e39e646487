use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

/// Wire encoding of cached values.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum ValueEncoding {
    #[default]
    json,
    msgpack,
}
