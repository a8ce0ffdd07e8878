// address the mock node reports as the future address of the deployed contract
pub const MOCK_CONTRACT_ADDRESS: &str =
    "0:2ce05ba9b674cd8eca3b0b94e5742e52a0e816db7b84cbf69121912130b7dc83";

// opaque encoded message body returned by the mock node
pub const MOCK_ENCODED_MESSAGE: &str = "te6ccgEBAgEAqQAB4YgAWcC1c1rOm9nZhYOx0fZkAQ==";

// method names as they travel on the wire
pub const ENCODE_MESSAGE_METHOD: &str = "abi.encode_message";
pub const PROCESS_MESSAGE_METHOD: &str = "processing.process_message";
