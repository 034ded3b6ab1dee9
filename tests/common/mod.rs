//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Three providers covering every value kind.
pub const PROVIDERS_JSON: &str = r#"[
  {
    "id": 1,
    "providername": "Harbor Health Clinic",
    "type": "clinic",
    "specialties": ["trans", "youth"],
    "county": "King",
    "languages": ["english", "spanish"],
    "nearbus": true,
    "lowincome": true,
    "phone": "555-0100"
  },
  {
    "id": 2,
    "providername": "Summit Therapy",
    "type": "therapist",
    "specialties": ["trans"],
    "county": "Pierce",
    "languages": ["english"],
    "nearbus": false,
    "lowincome": false
  },
  {
    "id": 3,
    "providername": "Cascade Family Practice",
    "type": "clinic",
    "specialties": "family",
    "county": "King",
    "languages": ["english", "vietnamese"],
    "nearbus": true,
    "lowincome": false
  }
]"#;

/// Empty config the fixture points `PC_CONFIG` at, so user and project
/// files are never read.
const ISOLATED_CONFIG: &str = "isolated.toml";

/// A temp project directory holding `data/providers.json`.
pub struct DatasetFixture {
    pub dir: TempDir,
    pub data_path: PathBuf,
}

impl DatasetFixture {
    pub fn new() -> Self {
        Self::with_json(PROVIDERS_JSON)
    }

    pub fn with_json(json: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data_path = dir.path().join("data/providers.json");
        std::fs::create_dir_all(data_path.parent().expect("data dir")).expect("create data dir");
        std::fs::write(&data_path, json).expect("write dataset");
        std::fs::write(dir.path().join(ISOLATED_CONFIG), "").expect("write config");
        Self { dir, data_path }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// `pcat` running in the fixture root, isolated from user config.
    pub fn pcat(&self) -> Command {
        let mut cmd = Command::cargo_bin("pcat").expect("pcat binary");
        cmd.current_dir(self.root())
            .env("PC_CONFIG", self.root().join(ISOLATED_CONFIG))
            .env_remove("PC_DATA_PATH")
            .env_remove("PC_SEARCH_NAME_BOOST")
            .env_remove("PC_SEARCH_MIN_TERM_LENGTH")
            .env_remove("PC_SEARCH_MAX_TERM_LENGTH")
            .env_remove("PC_DISPLAY_SINGULAR")
            .env_remove("PC_DISPLAY_PLURAL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `pcat --robot <args>` and parse stdout.
    pub fn robot(&self, args: &[&str]) -> serde_json::Value {
        let output = self.pcat().arg("--robot").args(args).output().expect("run pcat");
        serde_json::from_slice(&output.stdout).expect("robot output is JSON")
    }
}

/// Provider ids from a robot response.
pub fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]["providers"]
        .as_array()
        .expect("providers array")
        .iter()
        .map(|p| p["id"].as_str().expect("string id").to_string())
        .collect()
}
