//! Caller-owned mapping from documents to layout configurations.

use std::path::Path;

use indexmap::IndexMap;

use super::config::{LayoutConfig, LayoutPreset};

/// Chooses a [`LayoutConfig`] per document.
///
/// Lookups try the content signature first, then the file name, then fall
/// back to the default. Entries keep insertion order for listing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use column_oxide::pipeline::{ClassifierKind, ExtractorRegistry, LayoutPreset};
///
/// let mut registry = ExtractorRegistry::default();
/// registry.register_preset("exam_2025.json", LayoutPreset::QuestionPaper);
///
/// let config = registry.config_for(Path::new("/data/exam_2025.json"), None);
/// assert_eq!(config.classifier.kind, ClassifierKind::Keyword);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractorRegistry {
    by_file_name: IndexMap<String, LayoutConfig>,
    by_signature: IndexMap<String, LayoutConfig>,
    default: LayoutConfig,
}

impl ExtractorRegistry {
    /// Create a registry with the given fallback configuration.
    pub fn new(default: LayoutConfig) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    /// Map a file name (without directory) to a configuration.
    pub fn register(&mut self, file_name: impl Into<String>, config: LayoutConfig) -> &mut Self {
        self.by_file_name.insert(file_name.into(), config);
        self
    }

    /// Map a file name to a preset.
    pub fn register_preset(&mut self, file_name: impl Into<String>, preset: LayoutPreset) -> &mut Self {
        self.register(file_name, preset.create_config())
    }

    /// Map a content signature to a configuration.
    pub fn register_signature(&mut self, signature: impl Into<String>, config: LayoutConfig) -> &mut Self {
        self.by_signature.insert(signature.into(), config);
        self
    }

    /// Configuration for a document.
    pub fn config_for(&self, path: &Path, signature: Option<&str>) -> &LayoutConfig {
        if let Some(config) = signature.and_then(|s| self.by_signature.get(s)) {
            return config;
        }

        let file_name = path.file_name().and_then(|n| n.to_str());
        match file_name.and_then(|n| self.by_file_name.get(n)) {
            Some(config) => config,
            None => {
                log::debug!("No registered layout for {}, using default", path.display());
                &self.default
            },
        }
    }

    /// Fallback configuration.
    pub fn default_config(&self) -> &LayoutConfig {
        &self.default
    }

    /// Registered file names in insertion order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.by_file_name.keys().map(String::as_str)
    }

    /// Registered signatures in insertion order.
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.by_signature.keys().map(String::as_str)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.by_file_name.len() + self.by_signature.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
