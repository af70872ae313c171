use crate::llama::LLMEngine;
use crate::pipeline::Pipeline;
use serde::Serialize;
use tauri::command;
use tracing::{error, info};

#[derive(Serialize)]
pub struct AboutInfo {
    pub title: String,
    pub body: String,
}

/* ---------- 1.  MAIN PIPELINE ---------- */

#[command]
pub async fn generate_text(
    input: String,
    engine: tauri::State<'_, LLMEngine>,
) -> Result<String, String> {
    info!(chars = input.len(), "generate_text triggered");

    // The generation call blocks until the model finishes; run it on a
    // blocking task so the webview keeps painting. The frontend disables the
    // trigger while a request is outstanding, so only one is ever in flight.
    let engine = engine.inner().clone();
    let output = tokio::task::spawn_blocking(move || Pipeline::respond(&engine, &input))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| {
            error!(error = %e, "generation failed");
            e.to_string()
        })?;

    Ok(output)
}

/* ---------- 2.  ABOUT PANEL ---------- */

#[command]
pub fn about_info() -> AboutInfo {
    AboutInfo {
        title: "About Yaps Lock".to_string(),
        body: "Yap Lock\n\nCreated by Stratosvomvos\n\nPowered by llama.cpp".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_panel_is_static() {
        let info = about_info();
        assert_eq!(info.title, "About Yaps Lock");
        assert!(info.body.contains("Created by Stratosvomvos"));
        assert!(info.body.contains("Powered by llama.cpp"));
    }

    #[test]
    fn about_info_serializes_for_the_frontend() {
        let json = serde_json::to_string(&about_info()).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"body\""));
    }
}
