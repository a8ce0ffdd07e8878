use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address: {value}")]
    InvalidAddress { value: String },
    #[error("Error when reading file {path}")]
    ReadFileError { source: std::io::Error, path: String },
    #[error("Failed to load ContractPackage: {0}")]
    ContractPackageLoadError(String),
    #[error("Deserialization error: {origin}")]
    DeserializationError { origin: String },
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error("Message encoding failed: {0}")]
    Encoding(ClientError),
    #[error("Funding from giver failed: {0}")]
    Funding(ClientError),
    #[error("Contract deployment failed: {0}")]
    Deployment(ClientError),
}

impl Error {
    /// Process exit code reported for this failure kind; 0 is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidAddress { .. } | Error::DeserializationError { .. } => 1,
            Error::ReadFileError { .. } | Error::ContractPackageLoadError(_) => 2,
            Error::ClientError(_) => 3,
            Error::Encoding(_) => 4,
            Error::Funding(_) => 5,
            Error::Deployment(_) => 6,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Node responded with error {code}: {message}")]
    Node { code: i64, message: String, data: Option<serde_json::Value> },
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Invalid server address {url}: {origin}")]
    InvalidServerAddress { url: String, origin: String },
    #[error("Unexpected response from node: {msg}")]
    UnexpectedResponse { msg: String },
}

pub type DeployerResult<T, E = Error> = Result<T, E>;
