pub mod abi;
pub mod address;
pub mod client;
pub mod constants;
pub mod contract_package;
pub mod error;
pub mod giver;
pub mod keys;
pub mod workflow;
