//! SQuAD 1.1 dataset types - the serialized output shape

use crate::Result;
use serde::{Deserialize, Serialize};

/// Root of a SQuAD 1.1 document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    /// Schema version tag (e.g. "1.1")
    pub version: String,

    /// Titled groups of paragraphs
    pub data: Vec<DataGroup>,
}

/// A titled category of paragraphs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataGroup {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

/// A context paragraph and the questions asked about it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    pub context: String,
    pub qas: Vec<Qa>,
}

/// A single question entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Qa {
    /// Opaque identifier, unique within the dataset
    pub id: String,

    pub question: String,

    /// Answer spans. Never populated by the builder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<Answer>,
}

/// An answer span within the paragraph context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    /// Character offset of the answer in the context
    pub answer_start: usize,
    pub text: String,
}

impl Dataset {
    /// Create an empty dataset with the given version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            data: Vec::new(),
        }
    }

    /// Total paragraphs across all groups
    pub fn paragraph_count(&self) -> usize {
        self.data.iter().map(|d| d.paragraphs.len()).sum()
    }

    /// Total questions across all paragraphs
    pub fn question_count(&self) -> usize {
        self.data
            .iter()
            .flat_map(|d| &d.paragraphs)
            .map(|p| p.qas.len())
            .sum()
    }

    /// Serialize to JSON text, compact unless `pretty`
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl DataGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }
}

impl Paragraph {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            qas: Vec::new(),
        }
    }
}

impl Qa {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answers: Vec::new(),
        }
    }
}
