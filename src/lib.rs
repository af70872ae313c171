// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

mod commands;
pub mod llama;
pub mod pipeline;
pub mod postprocessing;
pub mod preprocessing;

use crate::commands::*;
use tracing::info;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // One engine for the process lifetime; a missing or broken model file
    // aborts startup.
    let engine = llama::LLMEngine::from_models_dir()
        .expect("failed to load model - place the weights at models/silibot.gguf");
    info!(
        model_path = engine.model_path(),
        loaded = engine.is_loaded(),
        "engine ready"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(engine)
        .invoke_handler(tauri::generate_handler![generate_text, about_info])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
