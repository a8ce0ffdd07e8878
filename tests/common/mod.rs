#![cfg(test)]
pub mod constants;
pub mod mock_node;
pub mod utils;
