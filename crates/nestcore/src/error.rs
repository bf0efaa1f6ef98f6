use thiserror::Error;

#[derive(Error, Debug)]
pub enum NestError {
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Problems with a definition document itself, as opposed to the
/// filesystem holding it.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Missing required field `name`")]
    MissingName,

    #[error("Field `name` must not be empty")]
    EmptyName,

    #[error("Field `name` must be a plain file name: `{0}`")]
    InvalidName(String),

    #[error("Duplicate definition name: {0}")]
    DuplicateName(String),

    #[error("Definition does not match the expected shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

#[derive(Error, Debug, Clone)]
pub enum NodeError {
    #[error("Unknown embedded node type: {0}")]
    UnknownNodeType(String),

    #[error("Nested workflows exceeded the maximum depth of {max}")]
    RecursionLimit { max: usize },

    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// Catch-all for failures inside a host node-class implementation;
    /// the executor propagates it unchanged.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config file unreadable: {0}")]
    Io(#[from] std::io::Error),
}
