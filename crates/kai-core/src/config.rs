//! Environment configuration. A single credential gates live AI calls; with
//! no key configured the reflection bridge answers with its local mock.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | GEMINI_API_KEY (or API_KEY) | unset | Credential for the generative AI service. |
//! | KAI_MODEL | gemini-2.5-flash | Model used for journal analysis. |
//! | KAI_DATA_DIR | ./data/kai_journal | Sled path for the entry store. |

use std::path::PathBuf;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_DATA_DIR: &str = "./data/kai_journal";

#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Generative AI credential. `None` selects the mock analysis path.
    pub api_key: Option<String>,
    pub model: String,
    pub data_dir: PathBuf,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl CompanionConfig {
    /// Loads `.env` (best-effort) and reads the environment. Unset values
    /// fall back to defaults; an empty credential counts as unset.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let api_key = env_opt_string("GEMINI_API_KEY").or_else(|| env_opt_string("API_KEY"));
        Self {
            api_key,
            model: env_opt_string("KAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            data_dir: env_opt_string("KAI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}
