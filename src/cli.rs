use clap::Parser;
use ton_deployer::client::{ClientConfig, NetworkConfig};
use ton_deployer::constants::DEFAULT_SERVER_ADDRESS;
use ton_deployer::contract_package::{ContractPackage, ContractPackageWrapper};
use ton_deployer::error::DeployerResult;

/// Deploy a contract to a local node, funded through its preinstalled giver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    // Node address
    #[arg(long = "url")]
    #[arg(value_name = "URL")]
    #[arg(env = "TON_SERVER_ADDRESS")]
    #[arg(default_value = DEFAULT_SERVER_ADDRESS)]
    #[arg(help = "Specify the server address of the node to deploy to;")]
    url: String,

    /// Contract artifacts to deploy instead of the bundled Hello contract
    #[arg(long = "contract")]
    #[arg(value_name = "PATH")]
    #[arg(help = "Specify the path to a JSON file holding the abi and tvc of the contract to \
                  deploy; if not provided, the bundled Hello contract is deployed;")]
    contract: Option<ContractPackageWrapper>,
}

impl Args {
    pub(crate) fn to_config(&self) -> DeployerResult<(ClientConfig, ContractPackage)> {
        let client_config =
            ClientConfig { network: NetworkConfig { server_address: self.url.clone() } };

        // use the artifacts given on the command line; otherwise default to the bundled contract
        let package = match &self.contract {
            Some(wrapper) => wrapper.package.clone(),
            None => ContractPackage::hello()?,
        };

        Ok((client_config, package))
    }
}
