use crate::error::{ArtifactError, DocumentError};
use crate::flatten::FlattenedOutcome;
use crate::layout::LayoutResult;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// The JSON export of a flattened blueprint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeExport {
    pub root_name: String,
    pub leaf_count: usize,
    pub outcomes: Vec<FlattenedOutcome>,
}

impl OutcomeExport {
    pub fn new(root_name: impl Into<String>, outcomes: Vec<FlattenedOutcome>) -> Self {
        Self {
            root_name: root_name.into(),
            leaf_count: outcomes.len(),
            outcomes,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::SerializationError(e.to_string()))
    }
}

/// A laid-out and flattened blueprint, saved together for later rendering and export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlueprintArtifact {
    pub root_name: String,
    pub layout: LayoutResult,
    pub outcomes: Vec<FlattenedOutcome>,
}

impl BlueprintArtifact {
    pub fn new(
        root_name: impl Into<String>,
        layout: LayoutResult,
        outcomes: Vec<FlattenedOutcome>,
    ) -> Self {
        Self {
            root_name: root_name.into(),
            layout,
            outcomes,
        }
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
