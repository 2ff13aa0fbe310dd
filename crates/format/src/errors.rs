use thiserror::Error;
use timeperiod_domain::ParseError;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Illegal pattern character '{character}' at offset {offset}")]
    IllegalCharacter { character: char, offset: usize },

    #[error("Failed to build matcher for {text:?}: {source}")]
    Matcher {
        text: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid pattern '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },

    #[error("Pattern '{0}' is already registered")]
    DuplicateName(String),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
