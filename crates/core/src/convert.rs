//! File conversion - tab-separated input to SQuAD 1.1 JSON on disk

use crate::builder::{BuildOptions, DatasetBuilder};
use crate::collector::PairCollector;
use crate::{CoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Settings for one conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub build: BuildOptions,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub paragraphs: usize,
    pub questions: usize,
}

/// Output path next to the input: same directory and stem, `.json` extension
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Read all lines of an existing text file
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(CoreError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Editors on Windows often prefix a byte order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    Ok(content.lines().map(str::to_string).collect())
}

/// Convert `input` into a SQuAD 1.1 file at `output`.
///
/// The JSON is fully rendered before `output` is created, so any failure
/// leaves no file behind.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let lines = read_lines(input)?;
    info!("Read {} lines", lines.len());

    let groups = PairCollector::new(input).collect(&lines)?;
    if groups.is_empty() {
        return Err(CoreError::EmptyInput(input.to_path_buf()));
    }

    let dataset = DatasetBuilder::new(options.build.clone()).build(&groups);
    let json = dataset.to_json(options.pretty)?;

    fs::write(output, json).map_err(|source| CoreError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = ConversionSummary {
        output: output.to_path_buf(),
        paragraphs: dataset.paragraph_count(),
        questions: dataset.question_count(),
    };
    info!(
        "Wrote {} paragraphs ({} questions)",
        summary.paragraphs, summary.questions
    );
    Ok(summary)
}
