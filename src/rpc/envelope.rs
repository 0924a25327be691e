//! The chain-tip request shared by every transport

use serde_json::json;
use std::sync::OnceLock;

/// JSON-RPC method used to read the chain tip
pub const METHOD: &str = "eth_getBlockByNumber";

/// Serialized `eth_getBlockByNumber("latest", false)` request body.
///
/// Built on first use and reused for every endpoint and every poll.
pub fn rpc_body() -> &'static str {
    static BODY: OnceLock<String> = OnceLock::new();
    BODY.get_or_init(|| {
        json!({
            "jsonrpc": "2.0",
            "method": METHOD,
            "params": ["latest", false],
            "id": 1,
        })
        .to_string()
    })
}
