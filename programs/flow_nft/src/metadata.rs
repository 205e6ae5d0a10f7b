use base64::{engine::general_purpose, Engine as _};
use serde_json::json;

use crate::state::FlowState;

// =============================================================================
// TOKEN METADATA
// =============================================================================
//
// Self-contained `data:` document for a FlowNFT. Everything a wallet or
// marketplace needs is inlined: the JSON body and the SVG artwork are both
// base64 data URIs, and both are keyed off the current state level.
// =============================================================================

pub const COLLECTION_NAME: &str = "FlowNFT";

const DESCRIPTION: &str = "A dynamic NFT that reflects its owner's social flow. \
    Likes and tips sent or received move it from Idle to Active to Burning.";

/// Render the full `data:application/json;base64,...` token URI
pub fn token_uri(token_id: u64, state: &FlowState) -> String {
    let document = metadata_json(token_id, state);
    format!(
        "data:application/json;base64,{}",
        general_purpose::STANDARD.encode(document.to_string())
    )
}

pub fn metadata_json(token_id: u64, state: &FlowState) -> serde_json::Value {
    let image = format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(render_svg(token_id, state))
    );

    json!({
        "name": format!("{} #{}", COLLECTION_NAME, token_id),
        "description": DESCRIPTION,
        "image": image,
        "attributes": [
            { "trait_type": "State", "value": state.state_level.label() },
            { "trait_type": "Likes Received", "value": state.likes_received },
            { "trait_type": "Likes Sent", "value": state.likes_sent },
            { "trait_type": "Tips Received", "value": state.tips_received },
            { "trait_type": "Tips Sent", "value": state.tips_sent },
            { "trait_type": "Total Interactions", "value": state.total_interactions },
            { "trait_type": "Epoch", "value": state.epoch },
        ],
    })
}

pub fn render_svg(token_id: u64, state: &FlowState) -> String {
    let level = state.state_level;
    let color = level.color();

    // Burning tokens breathe; everything else is static
    let pulse = if level.pulses() {
        "<animate attributeName=\"r\" values=\"80;96;80\" dur=\"1.2s\" repeatCount=\"indefinite\"/>\
         <animate attributeName=\"opacity\" values=\"0.9;0.5;0.9\" dur=\"1.2s\" repeatCount=\"indefinite\"/>"
    } else {
        ""
    };

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 350 350\">\
         <rect width=\"350\" height=\"350\" fill=\"#1A1A2E\"/>\
         <circle cx=\"175\" cy=\"150\" r=\"80\" fill=\"{color}\" opacity=\"0.9\">{pulse}</circle>\
         <text x=\"175\" y=\"158\" font-family=\"monospace\" font-size=\"24\" fill=\"#FFFFFF\" text-anchor=\"middle\">{label}</text>\
         <text x=\"175\" y=\"275\" font-family=\"monospace\" font-size=\"18\" fill=\"{color}\" text-anchor=\"middle\">{name} #{token_id}</text>\
         <text x=\"175\" y=\"305\" font-family=\"monospace\" font-size=\"14\" fill=\"#BBBBBB\" text-anchor=\"middle\">{total} interactions</text>\
         </svg>",
        color = color,
        pulse = pulse,
        label = level.label(),
        name = COLLECTION_NAME,
        token_id = token_id,
        total = state.total_interactions,
    )
}
