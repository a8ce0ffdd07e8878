use serde::{Deserialize, Serialize};

/// Contract interface descriptor, mirroring the JSON layout of `.abi.json`
/// artifacts. Only consulted for function lookup; encoding against it is the
/// node's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiContract {
    #[serde(rename = "ABI version")]
    pub abi_version: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<String>,
    pub functions: Vec<AbiFunction>,
    #[serde(default)]
    pub events: Vec<AbiEvent>,
    #[serde(default)]
    pub data: Vec<AbiData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    pub inputs: Vec<AbiParam>,
    pub outputs: Vec<AbiParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEvent {
    pub name: String,
    pub inputs: Vec<AbiParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiData {
    pub key: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl AbiContract {
    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.iter().find(|function| function.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::AbiContract;
    use crate::constants::GIVER_CONTRACT_ABI;

    #[test]
    fn giver_abi_artifact_is_loadable() {
        let abi: AbiContract = serde_json::from_str(GIVER_CONTRACT_ABI).unwrap();
        assert_eq!(abi.abi_version, 1);

        let send_grams = abi.function("sendGrams").unwrap();
        assert_eq!(send_grams.inputs.len(), 2);
        assert_eq!(send_grams.inputs[0].name, "dest");
        assert_eq!(send_grams.inputs[0].param_type, "address");
        assert_eq!(send_grams.inputs[1].name, "amount");
        assert_eq!(send_grams.inputs[1].param_type, "uint64");
        assert!(send_grams.outputs.is_empty());

        assert!(abi.function("constructor").is_some());
        assert!(abi.function("mint").is_none());
    }

    #[test]
    fn version_keeps_its_spaced_json_name() {
        let abi: AbiContract = serde_json::from_str(GIVER_CONTRACT_ABI).unwrap();
        let serialized = serde_json::to_value(&abi).unwrap();
        assert_eq!(serialized["ABI version"], serde_json::json!(1));
    }
}
