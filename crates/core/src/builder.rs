//! Dataset builder - turns context groups into a SQuAD 1.1 dataset

use crate::collector::ContextGroups;
use crate::dataset::{DataGroup, Dataset, Paragraph, Qa};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Schema version written when none is configured
pub const DEFAULT_VERSION: &str = "1.1";

/// Title of the single data group when none is configured
pub const DEFAULT_TITLE: &str = "First Set of Paragraphs";

/// Version and title stamped onto a built dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub version: String,
    pub title: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.into(),
            title: DEFAULT_TITLE.into(),
        }
    }
}

impl BuildOptions {
    /// Builder pattern: set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Builder pattern: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Source of question identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 rendered as 32 lowercase hex characters
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Builds datasets from collected context groups
pub struct DatasetBuilder<G = UuidGenerator> {
    options: BuildOptions,
    ids: G,
}

impl DatasetBuilder {
    /// Create a builder that assigns random UUIDs
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            ids: UuidGenerator,
        }
    }
}

impl<G: IdGenerator> DatasetBuilder<G> {
    /// Create a builder with a custom id source
    pub fn with_ids(options: BuildOptions, ids: G) -> Self {
        Self { options, ids }
    }

    /// Build a dataset with one data group holding a paragraph per
    /// non-empty context group, in group order.
    #[instrument(skip_all, fields(contexts = groups.len()))]
    pub fn build(&mut self, groups: &ContextGroups) -> Dataset {
        let mut data = DataGroup::new(self.options.title.clone());

        for group in groups.iter().filter(|g| !g.questions.is_empty()) {
            let mut paragraph = Paragraph::new(group.context.clone());
            paragraph.qas = group
                .questions
                .iter()
                .map(|q| Qa::new(self.ids.next_id(), q.clone()))
                .collect();
            data.paragraphs.push(paragraph);
        }

        debug!("Built {} paragraphs", data.paragraphs.len());

        let mut dataset = Dataset::new(self.options.version.clone());
        dataset.data.push(data);
        dataset
    }
}
