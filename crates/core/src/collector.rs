//! Pair collector - groups questions under their shared context

use crate::row::{ParsedLine, Row};
use crate::{CoreError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// A context paragraph and the questions asked about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextGroup {
    /// First-seen casing of the context
    pub context: String,
    /// Questions in input order
    pub questions: Vec<String>,
}

/// Ordered, case-insensitive mapping from context to questions
#[derive(Debug, Clone, Default)]
pub struct ContextGroups {
    groups: Vec<ContextGroup>,
    /// Normalized context -> position in `groups`
    index: HashMap<String, usize>,
}

impl ContextGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question to its context group, creating the group if needed
    pub fn insert(&mut self, context: impl Into<String>, question: impl Into<String>) {
        let context = context.into();
        let question = question.into();

        let key = normalize(&context);

        if let Some(&pos) = self.index.get(&key) {
            self.groups[pos].questions.push(question);
        } else {
            self.index.insert(key, self.groups.len());
            self.groups.push(ContextGroup {
                context,
                questions: vec![question],
            });
        }
    }

    /// Look up a group by context, ignoring case
    pub fn get(&self, context: &str) -> Option<&ContextGroup> {
        self.index
            .get(&normalize(context))
            .map(|&pos| &self.groups[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextGroup> {
        self.groups.iter()
    }

    /// Number of distinct contexts
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total questions across all groups
    pub fn question_count(&self) -> usize {
        self.groups.iter().map(|g| g.questions.len()).sum()
    }
}

impl Extend<Row> for ContextGroups {
    fn extend<I: IntoIterator<Item = Row>>(&mut self, rows: I) {
        for row in rows {
            self.insert(row.context, row.question);
        }
    }
}

impl FromIterator<Row> for ContextGroups {
    fn from_iter<I: IntoIterator<Item = Row>>(rows: I) -> Self {
        let mut groups = Self::new();
        groups.extend(rows);
        groups
    }
}

impl<'a> IntoIterator for &'a ContextGroups {
    type Item = &'a ContextGroup;
    type IntoIter = std::slice::Iter<'a, ContextGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

fn normalize(context: &str) -> String {
    context.to_uppercase()
}

/// Reads tab-separated lines from one source and collects them into groups
pub struct PairCollector {
    source: PathBuf,
}

impl PairCollector {
    /// Create a collector; `source` is only used in error reports
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Collect lines into context groups.
    ///
    /// Blank lines are skipped. The first line without exactly two columns
    /// aborts collection with [`CoreError::MalformedInput`].
    #[instrument(skip(self, lines), fields(source = %self.source.display()))]
    pub fn collect<I, S>(&self, lines: I) -> Result<ContextGroups>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups = ContextGroups::new();
        let mut skipped = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match Row::parse(line) {
                ParsedLine::Blank => skipped += 1,
                ParsedLine::Record(row) => groups.insert(row.context, row.question),
                ParsedLine::Malformed { fields } => {
                    return Err(CoreError::MalformedInput {
                        path: self.source.clone(),
                        line_number: idx + 1,
                        line: line.to_string(),
                        fields,
                    });
                }
            }
        }

        debug!(
            "Collected {} contexts, {} questions ({} blank lines skipped)",
            groups.len(),
            groups.question_count(),
            skipped
        );
        Ok(groups)
    }
}
