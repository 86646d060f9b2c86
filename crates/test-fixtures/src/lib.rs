//! Golden scenario loader for persona integration tests.
//!
//! Scenarios live under `test-fixtures/golden/` at the workspace root. Each
//! holds an analysis input and the expected outcome.

use std::collections::BTreeMap;
use std::path::PathBuf;

use persona_core::{ConfidenceLevel, HabitAnalysisInput, Trait};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture tree.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the golden set is found.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Expected outcome of a golden scenario. Omitted fields are not checked.
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    pub dominant_trait: Option<Trait>,
    pub confidence: Option<ConfidenceLevel>,
    #[serde(default)]
    pub scores: BTreeMap<Trait, f64>,
    /// Traits expected strictly above neutral.
    #[serde(default)]
    pub above_neutral: Vec<Trait>,
    /// Traits expected strictly below neutral.
    #[serde(default)]
    pub below_neutral: Vec<Trait>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-9
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub input: HabitAnalysisInput,
    pub expected: Expectation,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a golden scenario by file stem, e.g. `"learning_end_to_end"`.
pub fn load_scenario(name: &str) -> GoldenScenario {
    load_fixture(&format!("golden/{name}.json"))
}

/// File stems of every golden scenario, sorted.
pub fn list_scenarios() -> Vec<String> {
    let dir = fixtures_root().join("golden");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}
