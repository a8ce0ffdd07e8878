use std::str::FromStr;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::abi::AbiContract;
use crate::constants::HELLO_CONTRACT_PACKAGE;
use crate::error::{DeployerResult, Error};

/// Deployable contract artifact: interface descriptor plus the base64-encoded
/// code image (tvc).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPackage {
    pub abi: AbiContract,
    pub tvc: String,
}

impl ContractPackage {
    /// Package of the bundled Hello tutorial contract.
    pub fn hello() -> DeployerResult<Self> {
        Self::from_json_str(HELLO_CONTRACT_PACKAGE)
    }

    pub fn from_json_str(raw: &str) -> DeployerResult<Self> {
        let package: ContractPackage = serde_json::from_str(raw)
            .map_err(|err| Error::ContractPackageLoadError(err.to_string()))?;

        // deployment always invokes the constructor
        if package.abi.function("constructor").is_none() {
            return Err(Error::ContractPackageLoadError(
                "ABI does not declare a constructor".into(),
            ));
        }

        base64::engine::general_purpose::STANDARD.decode(&package.tvc).map_err(|err| {
            Error::ContractPackageLoadError(format!("tvc is not valid base64: {err}"))
        })?;

        Ok(package)
    }
}

/// `--contract` value; loads and validates the package at argument-parse time.
#[derive(Debug, Clone)]
pub struct ContractPackageWrapper {
    pub package: ContractPackage,
}

impl FromStr for ContractPackageWrapper {
    type Err = Error;

    fn from_str(path_candidate: &str) -> Result<Self, Self::Err> {
        let raw = std::fs::read_to_string(path_candidate).map_err(|err| Error::ReadFileError {
            source: err,
            path: path_candidate.to_string(),
        })?;

        let package = ContractPackage::from_json_str(&raw)?;
        Ok(Self { package })
    }
}
