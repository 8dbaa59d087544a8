//! Core types for building SQuAD 1.1 datasets
//!
//! This crate turns tab-separated (question, context) rows into the nested
//! SQuAD 1.1 JSON shape: rows are grouped by context, ignoring case, and
//! each question receives a unique identifier.

pub mod builder;
pub mod collector;
pub mod convert;
pub mod dataset;
pub mod error;
pub mod row;

pub use builder::{
    BuildOptions, DatasetBuilder, IdGenerator, UuidGenerator, DEFAULT_TITLE, DEFAULT_VERSION,
};
pub use collector::{ContextGroup, ContextGroups, PairCollector};
pub use convert::{
    convert_file, default_output_path, read_lines, ConversionSummary, ConvertOptions,
};
pub use dataset::{Answer, DataGroup, Dataset, Paragraph, Qa};
pub use error::{CoreError, Result};
pub use row::{ParsedLine, Row};
