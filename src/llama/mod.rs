use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

mod ffi;
use ffi::RawEngine;

/**
 * Safe Rust Wrapper for the llama.cpp Engine
 *
 * This is the clean, safe interface the rest of the application talks to.
 * No unsafe blocks bleeding into application logic, no mysterious segfaults
 * at 3 AM - just an owned handle that loads the model once and hands out
 * completions.
 */

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Failed to initialize engine with model: {model_path}")]
    InitializationFailed { model_path: String },
    #[error("Engine is not loaded or has been disposed")]
    EngineNotLoaded,
    #[error("Text generation failed: {reason}")]
    GenerationFailed { reason: String },
    #[error("Model file not found: {path}")]
    ModelNotFound { path: String },
    #[error("Invalid input parameters: {details}")]
    InvalidInput { details: String },
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// Sampling parameters, constant for the process lifetime.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.5,
            top_p: 1.0,
        }
    }
}

pub struct LLMEngine {
    inner: Arc<Mutex<Option<RawEngine>>>,
    model_path: String,
}

impl LLMEngine {
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let path_str = model_path.as_ref().to_string_lossy().to_string();
        if !model_path.as_ref().exists() {
            return Err(LLMError::ModelNotFound { path: path_str });
        }
        let raw_engine = unsafe {
            RawEngine::new(&path_str).ok_or_else(|| LLMError::InitializationFailed {
                model_path: path_str.clone(),
            })?
        };
        debug!(model_path = %path_str, "engine initialized");
        Ok(LLMEngine {
            inner: Arc::new(Mutex::new(Some(raw_engine))),
            model_path: path_str,
        })
    }

    pub fn from_models_dir() -> Result<Self> {
        let model_path = "models/silibot.gguf";
        Self::new(model_path)
    }

    pub fn generate(&self, prompt: &str, config: Option<GenerationConfig>) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(LLMError::InvalidInput {
                details: "Empty prompt provided".to_string(),
            });
        }
        let config = config.unwrap_or_default();
        let guard = self.inner.lock().unwrap();
        match guard.as_ref() {
            Some(engine) => {
                let result = unsafe {
                    engine.generate(
                        prompt,
                        config.max_tokens,
                        config.temperature,
                        config.top_p,
                    )
                };
                result.ok_or_else(|| LLMError::GenerationFailed {
                    reason: "C++ engine returned null result".to_string(),
                })
            }
            None => Err(LLMError::EngineNotLoaded),
        }
    }

    pub fn is_loaded(&self) -> bool {
        let guard = self.inner.lock().unwrap();
        match guard.as_ref() {
            Some(engine) => unsafe { engine.is_loaded() },
            None => false,
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

unsafe impl Send for LLMEngine {}
unsafe impl Sync for LLMEngine {}

impl Clone for LLMEngine {
    fn clone(&self) -> Self {
        LLMEngine {
            inner: Arc::clone(&self.inner),
            model_path: self.model_path.clone(),
        }
    }
}
