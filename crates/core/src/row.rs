//! Row types - one question/context record from a tab-separated line

/// Number of tab-separated columns every record must have
pub const COLUMN_COUNT: usize = 2;

/// Column delimiter
pub const DELIMITER: char = '\t';

/// A single question paired with the context it is asked about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The question text (first column)
    pub question: String,

    /// The context paragraph (second column)
    pub context: String,
}

/// Outcome of parsing one raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line
    Blank,
    /// A well-formed record
    Record(Row),
    /// A line with the wrong number of columns
    Malformed { fields: usize },
}

impl Row {
    /// Create a row, trimming both fields
    pub fn new(question: impl AsRef<str>, context: impl AsRef<str>) -> Self {
        Self {
            question: question.as_ref().trim().to_string(),
            context: context.as_ref().trim().to_string(),
        }
    }

    /// Parse a raw line.
    ///
    /// The line is trimmed before splitting, so leading or trailing tabs do
    /// not count as empty columns.
    pub fn parse(line: &str) -> ParsedLine {
        let line = line.trim();
        if line.is_empty() {
            return ParsedLine::Blank;
        }

        let cols: Vec<&str> = line.split(DELIMITER).collect();
        match cols.as_slice() {
            [question, context] => ParsedLine::Record(Row::new(question, context)),
            _ => ParsedLine::Malformed { fields: cols.len() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let parsed = Row::parse("  What color is the sky? \t The sky is blue. ");
        assert_eq!(
            parsed,
            ParsedLine::Record(Row {
                question: "What color is the sky?".into(),
                context: "The sky is blue.".into(),
            })
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Row::parse(""), ParsedLine::Blank);
        assert_eq!(Row::parse("   \t  "), ParsedLine::Blank);
    }

    #[test]
    fn test_parse_wrong_column_count() {
        assert_eq!(Row::parse("no tab here"), ParsedLine::Malformed { fields: 1 });
        assert_eq!(Row::parse("a\tb\tc"), ParsedLine::Malformed { fields: 3 });
        // Trailing tab is trimmed away with the line
        assert_eq!(Row::parse("question only\t"), ParsedLine::Malformed { fields: 1 });
    }

    #[test]
    fn test_parse_crlf() {
        match Row::parse("Q1\tHello World\r") {
            ParsedLine::Record(row) => assert_eq!(row.context, "Hello World"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
