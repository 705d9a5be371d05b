//! # Student Responses
//!
//! Free-text answers collected during the guided lab activity, keyed by the
//! step they belong to. The whole set is written as a JSON object on every
//! save, replacing the previous file:
//!
//! ```json
//! {
//!   "intro_reflection": "I think the salt water will work best",
//!   "test1_calculated_ce": "87.5"
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default file name for saved responses
pub const DEFAULT_RESPONSES_FILE: &str = "student_responses.json";

/// Errors that can occur while loading or saving responses
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// I/O error reading or writing the responses file
    #[error("Failed to access responses file: {0}")]
    IoError(#[from] std::io::Error),

    /// The responses file is not a JSON object of strings
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A key does not name any lab step
    #[error("Unknown response key: {0}")]
    UnknownKey(String),
}

/// The lab step a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKey {
    /// Opening reflection on the research question
    IntroReflection,
    /// Observations from the demo test
    DemoObservation,
    /// Annotation of the graph from test `n` (1-based)
    GraphAnnotation(u32),
    /// Vocabulary terms from the explain phase
    VocabTerms,
    /// Claim-evidence-reasoning argument
    CerArgument,
    /// Coulombic efficiency the student calculated for test `n` (1-based)
    CalculatedCe(u32),
    /// Final conclusion
    FinalConclusion,
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::IntroReflection => write!(f, "intro_reflection"),
            ResponseKey::DemoObservation => write!(f, "demo_observation"),
            ResponseKey::GraphAnnotation(n) => write!(f, "test{}_graph_annotation", n),
            ResponseKey::VocabTerms => write!(f, "vocab_terms"),
            ResponseKey::CerArgument => write!(f, "cer_argument"),
            ResponseKey::CalculatedCe(n) => write!(f, "test{}_calculated_ce", n),
            ResponseKey::FinalConclusion => write!(f, "final_conclusion"),
        }
    }
}

impl FromStr for ResponseKey {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "intro_reflection" => ResponseKey::IntroReflection,
            "demo_observation" => ResponseKey::DemoObservation,
            "vocab_terms" => ResponseKey::VocabTerms,
            "cer_argument" => ResponseKey::CerArgument,
            "final_conclusion" => ResponseKey::FinalConclusion,
            other => {
                let numbered = other.strip_prefix("test").and_then(|rest| {
                    let (n, suffix) = rest.split_once('_')?;
                    let n: u32 = n.parse().ok().filter(|&n| n > 0)?;
                    match suffix {
                        "graph_annotation" => Some(ResponseKey::GraphAnnotation(n)),
                        "calculated_ce" => Some(ResponseKey::CalculatedCe(n)),
                        _ => None,
                    }
                });
                return numbered.ok_or_else(|| ResponseError::UnknownKey(other.to_string()));
            }
        };
        Ok(key)
    }
}

/// Responses bound to the file they are saved in
#[derive(Debug, Clone)]
pub struct ResponseStore {
    path: PathBuf,
    responses: Responses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Responses(BTreeMap<String, String>);

impl ResponseStore {
    /// Create an empty store that saves to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            responses: Responses::default(),
        }
    }

    /// Load the store from `path`; a missing file gives an empty store
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self, ResponseError> {
        let path = path.into();
        let responses = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Responses::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, responses })
    }

    /// File the store saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a response, replacing any previous answer; surrounding
    /// whitespace is trimmed.
    pub fn set(&mut self, key: ResponseKey, value: &str) {
        self.responses
            .0
            .insert(key.to_string(), value.trim().to_string());
    }

    /// Response for `key`, if any
    pub fn get(&self, key: ResponseKey) -> Option<&str> {
        self.responses.0.get(&key.to_string()).map(String::as_str)
    }

    /// All responses in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.responses
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of recorded responses
    pub fn len(&self) -> usize {
        self.responses.0.len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.responses.0.is_empty()
    }

    /// Serialize all responses as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ResponseError> {
        Ok(serde_json::to_string_pretty(&self.responses)?)
    }

    /// Write every response to the store's file, replacing its contents
    pub fn save(&self) -> Result<(), ResponseError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, self.to_json()?)?;
        debug!("Saved {} responses to {}", self.len(), self.path.display());
        Ok(())
    }
}
