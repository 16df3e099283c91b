//! Editor wire format.
//!
//! The editor front end exchanges documents as a JSON array of blocks.

use blockhtml_core::Block;

use crate::Result;

/// Decode a JSON array of blocks
pub fn blocks_from_json(json: &str) -> Result<Vec<Block>> {
    Ok(serde_json::from_str(json)?)
}

/// Encode blocks as a compact JSON array
pub fn blocks_to_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string(blocks)?)
}

/// Encode blocks as indented JSON
pub fn blocks_to_json_pretty(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}
