//! WASM bindings for mnemosss
//!
//! Thin JSON-returning wrappers over the same [`crate::commands`]
//! functions the CLI calls.

use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::commands;
use crate::domain::{ShareCount, SplitConfig, Threshold};
use crate::{frame, mnemonic};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct SplitResult {
    /// The freshly sampled secret, as a mnemonic
    pub secret: String,
    /// The generated shares, as mnemonics
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u16,
    /// Threshold required to reconstruct
    pub threshold: u16,
    /// Bit length of the prime field the split was performed over
    pub prime_bit_length: u64,
}

/// Samples a fresh secret and splits it into Shamir shares
///
/// # Arguments
/// * `shares` - Total number of shares to create (2-255)
/// * `threshold` - Minimum number of shares needed to reconstruct (2-shares)
/// * `long` - Use the 521-bit prime instead of the default 127-bit one
///
/// # Returns
/// JSON string containing the secret, shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split(5, 3, false);
/// const data = JSON.parse(result);
/// console.log(`Secret: ${data.secret}`);
/// for (let i = 0; i < data.shares.length; i++) {
///     console.log(`Share ${i+1}: ${data.shares[i]}`);
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_split(shares: u16, threshold: u16, long: bool) -> Result<String, JsValue> {
    let threshold_obj =
        Threshold::new(threshold).map_err(|e| JsValue::from_str(&format!("Invalid threshold: {e}")))?;

    let share_count =
        ShareCount::new(shares).map_err(|e| JsValue::from_str(&format!("Invalid share count: {e}")))?;

    let config = SplitConfig::new(threshold_obj, share_count)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;

    let outcome = commands::split(config, long, &mut OsRng)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {e}")))?;

    let result = SplitResult {
        secret: outcome.secret.as_str().to_string(),
        shares: outcome.shares.iter().map(|m| m.as_str().to_string()).collect(),
        share_count: shares,
        threshold,
        prime_bit_length: outcome.prime_bit_length,
    };

    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Combine Shamir shares to reconstruct the original secret
///
/// # Arguments
/// * `shares` - Array of share mnemonics
///
/// # Returns
/// The reconstructed secret mnemonic, or an error message
#[wasm_bindgen]
pub fn wasm_combine(shares: Vec<String>) -> Result<String, JsValue> {
    commands::combine(&shares)
        .map(|m| m.as_str().to_string())
        .map_err(|e| JsValue::from_str(&format!("Combine failed: {e}")))
}

/// Parse a share mnemonic to extract its metadata (threshold and index)
/// without attempting to reconstruct the secret.
///
/// # Returns
/// JSON string containing `threshold` and `share_index`, or an error message
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str) -> Result<String, JsValue> {
    let decoded = mnemonic::decode(share).map_err(|e| JsValue::from_str(&format!("Parse failed: {e}")))?;
    let (_y, k, x) =
        frame::unpack(&decoded).map_err(|e| JsValue::from_str(&format!("Parse failed: {e}")))?;

    #[derive(Serialize)]
    struct ShareMetadata {
        threshold: u8,
        share_index: u8,
    }

    let metadata = ShareMetadata {
        threshold: k,
        share_index: x,
    };

    serde_json::to_string(&metadata).map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
