//! Item manifests: layout parameters plus measured item sizes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wrapflow::layout::Measurement;
use wrapflow::{check_length, LayoutError, LayoutParams, Size};

/// Error loading a manifest.
#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// YAML syntax or schema error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON syntax or schema error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names no known format.
    #[error("unknown manifest format '{0}' (expected .yaml, .yml or .json)")]
    UnknownFormat(String),

    /// A layout parameter is out of range.
    #[error("invalid parameter: {0}")]
    Params(#[from] LayoutError),

    /// An item dimension is out of range.
    #[error("invalid item {index}: {source}")]
    Item {
        /// Position of the item in the manifest
        index: usize,
        /// Validation failure
        source: LayoutError,
    },
}

/// One measured item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ManifestItem {
    /// Intrinsic width
    pub(crate) width: f32,
    /// Intrinsic height
    pub(crate) height: f32,
    /// Baseline offset from the top; defaults to the height
    #[serde(default)]
    pub(crate) baseline: Option<f32>,
}

impl ManifestItem {
    fn validate(&self) -> Result<(), LayoutError> {
        check_length("width", self.width)?;
        check_length("height", self.height)?;
        if let Some(baseline) = self.baseline {
            check_length("baseline", baseline)?;
        }
        Ok(())
    }

    fn measurement(&self) -> Measurement {
        let measurement = Measurement::new(Size::new(self.width, self.height));
        match self.baseline {
            Some(baseline) => measurement.with_baseline(baseline),
            None => measurement,
        }
    }
}

/// A layout request read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Manifest {
    /// Layout parameters, flattened into the top level.
    #[serde(flatten)]
    pub(crate) params: LayoutParams,
    /// Primary-axis length; absent means not yet measured.
    #[serde(default)]
    pub(crate) available: Option<f32>,
    /// Items in layout order.
    #[serde(default)]
    pub(crate) items: Vec<ManifestItem>,
}

impl Manifest {
    /// Parse a manifest from YAML.
    pub(crate) fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from JSON.
    pub(crate) fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest, choosing the format by file extension.
    pub(crate) fn load(path: &Path) -> Result<Self, ManifestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !matches!(extension.as_str(), "yaml" | "yml" | "json") {
            return Err(ManifestError::UnknownFormat(extension));
        }

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if extension == "json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Check parameters and every item.
    pub(crate) fn validate(&self) -> Result<(), ManifestError> {
        self.params.validate()?;
        if let Some(available) = self.available {
            check_length("available", available)?;
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate()
                .map_err(|source| ManifestError::Item { index, source })?;
        }
        Ok(())
    }

    /// Item sizes and baselines in layout order.
    pub(crate) fn measurements(&self) -> Vec<Measurement> {
        self.items.iter().map(ManifestItem::measurement).collect()
    }
}
