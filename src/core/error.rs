use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeConvError {
    #[error("invalid time {token:?}: {source}")]
    ParseError {
        token: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),

    #[error("invalid time in {position} argument: {source}")]
    ArgumentTime {
        position: &'static str,
        #[source]
        source: Box<TimeConvError>,
    },

    #[error("invalid duration in second argument: {source}")]
    ArgumentDuration {
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("time arithmetic overflow")]
    Overflow,

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TimeConvError {
    pub fn parse_error(token: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::ParseError {
            token: token.into(),
            source,
        }
    }

    pub fn argument_time(position: &'static str, source: TimeConvError) -> Self {
        Self::ArgumentTime {
            position,
            source: Box::new(source),
        }
    }

    pub fn invalid_arguments(args: &[String]) -> Self {
        Self::InvalidArguments(args.join(" "))
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}
