/// Default node endpoint; matches a locally running TON OS SE instance.
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost";

/// Giver contract preinstalled on TON OS SE; sponsors addresses before deploy.
pub const GIVER_ADDRESS: &str =
    "0:841288ed3b55d9cdafa806807f02a0ae0c169aa5edfe88a789a6482429756a94";

/// Amount of test currency (in nanotokens) transferred per funding request.
pub const GIVER_GRAMS_AMOUNT: u64 = 10_000_000_000;

pub const GIVER_CONTRACT_ABI: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/contracts/giver/GiverContract.abi.json"));

/// only used in tests; if the artifact content is needed, use HELLO_CONTRACT_PACKAGE
pub const HELLO_CONTRACT_PACKAGE_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/contracts/hello/HelloContract.json");
pub const HELLO_CONTRACT_PACKAGE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/contracts/hello/HelloContract.json"));
