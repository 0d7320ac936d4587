use thiserror::Error;

/// Configuration rejected by the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Everything a console command can fail with. Rendered to a single line at
/// the input boundary; none of these leave the session half-updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(
        "square brackets only mark optional parts in the help text; \
         type the command without them, e.g. reset animals=100"
    )]
    IllustrativeBrackets,
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
    #[error("expected name=value, got {0:?}")]
    MalformedOverride(String),
    #[error("this command takes no parameters")]
    UnexpectedParameters,
    #[error("this command takes at most one parameter, got {0}")]
    TooManyArguments(usize),
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("invalid value for {name}: {value:?} is not {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}
