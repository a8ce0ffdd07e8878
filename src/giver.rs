use serde_json::json;

use crate::abi::AbiContract;
use crate::address::Address;
use crate::client::models::{Abi, CallSet, ParamsOfEncodeMessage, ParamsOfProcessMessage, Signer};
use crate::client::Provider;
use crate::constants::{GIVER_ADDRESS, GIVER_CONTRACT_ABI, GIVER_GRAMS_AMOUNT};
use crate::error::{DeployerResult, Error};

/// Transfers the fixed funding amount from the node's preinstalled giver to
/// `dest`. The giver accepts unsigned calls, so no keys are attached. Sent
/// exactly once; a failed transfer is not retried.
pub async fn send_grams<P: Provider>(provider: &P, dest: &Address) -> DeployerResult<()> {
    let giver_address: Address = GIVER_ADDRESS.parse()?;
    let giver_abi: AbiContract = serde_json::from_str(GIVER_CONTRACT_ABI)
        .map_err(|err| Error::DeserializationError { origin: err.to_string() })?;

    let params = ParamsOfProcessMessage {
        message_encode_params: ParamsOfEncodeMessage {
            abi: Abi::Contract(giver_abi),
            address: Some(giver_address),
            deploy_set: None,
            call_set: Some(CallSet {
                function_name: "sendGrams".to_string(),
                input: json!({ "dest": dest, "amount": GIVER_GRAMS_AMOUNT }),
            }),
            signer: Signer::None,
        },
        send_events: false,
    };

    provider.process_message(&params).await.map_err(Error::Funding)?;
    Ok(())
}
