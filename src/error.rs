use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "serde")]
    #[error("JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[cfg(feature = "serde")]
    #[error("record serializes to {0}, expected a struct with named fields")]
    NotARecord(&'static str),

    #[cfg(feature = "serde")]
    #[error("member `{name}` does not hold an enum value: {source}")]
    Field {
        name: String,
        #[source]
        source: serde_json::Error
    },

    #[error("record declares {fields} member names but holds {values} values")]
    FieldCount {
        fields: usize,
        values: usize
    },

    #[error("duplicated enum key `{name}`")]
    DuplicateKey {
        name: String
    },

    #[error("member `{name}` holds the unsupported value {value}")]
    InvalidValue {
        name: String,
        value: String
    },

    #[error("duplicated enum value {value} in `{first}` and `{second}`")]
    DuplicateValue {
        value: String,
        first: String,
        second: String
    }
}

pub type Result<T> = std::result::Result<T, Error>;
