use serde_json::json;

use crate::address::Address;
use crate::client::models::{
    Abi, CallSet, DeploySet, ParamsOfEncodeMessage, ParamsOfProcessMessage, Signer,
};
use crate::client::Provider;
use crate::contract_package::ContractPackage;
use crate::error::{DeployerResult, Error};
use crate::giver::send_grams;
use crate::keys::generate_random_sign_keys;

/// Deploys `package` through `provider` and returns the address of the
/// deployed contract.
///
/// The deploy message is first encoded to learn the future address, and the
/// giver must have funded that address before the message itself is
/// processed. Each step aborts the workflow on failure; a deployment that
/// fails after funding leaves the transferred balance on the inactive
/// address.
pub async fn run<P: Provider>(provider: &P, package: &ContractPackage) -> DeployerResult<Address> {
    let keys = generate_random_sign_keys();

    let deploy_params = ParamsOfEncodeMessage {
        abi: Abi::Contract(package.abi.clone()),
        address: None,
        deploy_set: Some(DeploySet { tvc: package.tvc.clone(), initial_data: json!({}) }),
        call_set: Some(CallSet { function_name: "constructor".to_string(), input: json!({}) }),
        signer: Signer::Keys { keys },
    };

    let encoded = provider.encode_message(&deploy_params).await.map_err(Error::Encoding)?;
    let address = encoded.address;
    println!("Future address of the contract: {address}");

    send_grams(provider, &address).await?;
    println!("Funds were transferred from giver to {address}");

    let process_params =
        ParamsOfProcessMessage { message_encode_params: deploy_params, send_events: false };
    provider.process_message(&process_params).await.map_err(Error::Deployment)?;
    println!("Contract was deployed at address: {address}");

    Ok(address)
}
