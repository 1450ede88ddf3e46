use std::io;
use thiserror::Error;
use toml::{de, ser};

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error")]
    IO(#[from] io::Error),

    #[error("invalid suite name: {name}")]
    InvalidSuite { name: String },

    #[error("deserialization error")]
    Deserialization(#[from] de::Error),

    #[error("serialization error")]
    Serialization(#[from] ser::Error),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
