//! The single round trip: check the prompt, format it, run generation once,
//! clean the result.

use crate::llama::{GenerationConfig, LLMEngine, Result};
use crate::postprocessing::cleaner;
use crate::preprocessing::Formatter;
use tracing::{debug, info};

/// Shown instead of invoking the engine when the entry is blank.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt.";

/// Seam between the round trip and the engine, so tests can substitute a
/// double for the real model.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;
}

impl TextGenerator for LLMEngine {
    fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        LLMEngine::generate(self, prompt, Some(config.clone()))
    }
}

pub struct Pipeline;

impl Pipeline {
    /// One user trigger, start to finish. Blank input short-circuits to the
    /// guidance message without touching the engine; everything else is one
    /// generation call with the fixed parameter set.
    pub fn respond<G: TextGenerator>(generator: &G, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            debug!("blank prompt, skipping generation");
            return Ok(EMPTY_PROMPT_MESSAGE.to_string());
        }

        let request = Formatter::format(input);
        let raw = generator.generate(&request, &GenerationConfig::default())?;
        info!(response_len = raw.len(), "generation finished");

        Ok(cleaner::clean(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llama::LLMError;
    use std::cell::RefCell;

    /// Records every prompt it sees and replays a canned reply; `None` means
    /// the engine fails.
    struct ScriptedGenerator {
        reply: Option<String>,
        calls: RefCell<Vec<(String, GenerationConfig)>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((prompt.to_string(), config.clone()));
            self.reply
                .clone()
                .ok_or_else(|| LLMError::GenerationFailed {
                    reason: "scripted failure".to_string(),
                })
        }
    }

    #[test]
    fn blank_input_never_reaches_the_generator() {
        let generator = ScriptedGenerator::replying("unused");
        for input in ["", "   ", "\n\t "] {
            let out = Pipeline::respond(&generator, input).unwrap();
            assert_eq!(out, EMPTY_PROMPT_MESSAGE);
        }
        assert!(generator.calls.borrow().is_empty());
    }

    #[test]
    fn generator_sees_the_formatted_request_once() {
        let generator = ScriptedGenerator::replying("4");
        Pipeline::respond(&generator, "What is 2+2?").unwrap();

        let calls = generator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Formatter::format("What is 2+2?"));
        assert_eq!(calls[0].1.temperature, 0.5);
        assert_eq!(calls[0].1.max_tokens, 500);
        assert_eq!(calls[0].1.top_p, 1.0);
    }

    #[test]
    fn response_is_cleaned_before_display() {
        let generator = ScriptedGenerator::replying("<<SYS>>The answer is 4.<</SYS>>");
        let out = Pipeline::respond(&generator, "What is 2+2?").unwrap();
        assert_eq!(out, "The answer is 4.");
    }

    #[test]
    fn engine_failure_surfaces_as_error() {
        let generator = ScriptedGenerator::failing();
        let result = Pipeline::respond(&generator, "hello");
        assert!(matches!(
            result,
            Err(LLMError::GenerationFailed { .. })
        ));
    }
}
