/// Repo Tabs - tabbed workspace shell for the code search client
/// Built with Rust + WASM + Yew

pub mod api;
pub mod device;
pub mod storage;
pub mod tab_data;
pub mod tabs;
pub mod ui;

use device::DeviceContext;
use log::info;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app; `device` is the host's settings object
#[wasm_bindgen]
pub fn start_app(device: JsValue) -> Result<(), JsValue> {
    let device: DeviceContext = serde_wasm_bindgen::from_value(device)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse device context: {:?}", e)))?;

    info!("Starting with API at {}", device.api_url);
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { device }).render();
    Ok(())
}
