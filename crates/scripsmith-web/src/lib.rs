//! Scripsmith Web - browser frontend for the portfolio page
//!
//! This crate renders the single-page portfolio using Bevy and egui.
//! The page reserves regions for the 3D decoration groups, which the
//! scene keeps aligned behind the transparent page surface.

mod app;
mod relay;
mod scene;
mod ui;

use wasm_bindgen::prelude::*;

/// Entry point for WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging with filtering to reduce wgpu noise
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::WARN)
            .build(),
    );

    // Run the Bevy app
    app::run();
}
