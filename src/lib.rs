use wasm_bindgen::prelude::*;

pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod round;
pub mod table;

pub use card::Card;
pub use dealer::Dealer;
pub use error::RoundError;
pub use hand::Hand;
pub use round::{Outcome, Round, DEALER_STANDS_ON};

#[wasm_bindgen]
pub fn play_round(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: table::RoundInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let report = table::run(input)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn play_round_json(input: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();
    table::run_json(input).map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))
}
