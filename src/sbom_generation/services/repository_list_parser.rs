use crate::sbom_generation::domain::RepositoryReference;

/// Record layout of a repository list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// One identifier per line
    Lines,
    /// Comma-separated; the identifier is the first column
    Csv,
}

impl ListFormat {
    /// `.csv` files (any case) use the CSV layout, everything else is line based
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ListFormat::Csv,
            _ => ListFormat::Lines,
        }
    }
}

/// Identifiers in a list that could not be parsed, with their line numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub line: usize,
    pub value: String,
    pub reason: String,
}

/// RepositoryListParser - turns the content of a `--file` list into references
///
/// Blank lines and `#` comments are skipped. Every entry is parsed before any
/// is returned so a list with a typo fails as a whole instead of half way
/// through a batch.
pub struct RepositoryListParser;

impl RepositoryListParser {
    /// Extracts the raw identifier of every record, in file order
    pub fn records(content: &str, format: ListFormat) -> Vec<(usize, String)> {
        // Editors on Windows prefix UTF-8 files with a byte-order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let value = match format {
                    ListFormat::Lines => line.to_string(),
                    ListFormat::Csv => first_csv_column(line),
                };
                if value.is_empty() {
                    None
                } else {
                    Some((index + 1, value))
                }
            })
            .collect()
    }

    /// Parses every record.
    ///
    /// # Errors
    /// Returns every invalid record when at least one fails to parse.
    pub fn parse(
        content: &str,
        format: ListFormat,
    ) -> std::result::Result<Vec<RepositoryReference>, Vec<InvalidEntry>> {
        let mut repositories = Vec::new();
        let mut invalid = Vec::new();

        for (line, value) in Self::records(content, format) {
            match RepositoryReference::parse(&value) {
                Ok(repository) => repositories.push(repository),
                Err(e) => invalid.push(InvalidEntry {
                    line,
                    value,
                    reason: e.to_string(),
                }),
            }
        }

        if invalid.is_empty() {
            Ok(repositories)
        } else {
            Err(invalid)
        }
    }
}

fn first_csv_column(line: &str) -> String {
    let column = if let Some(rest) = line.strip_prefix('"') {
        rest.split('"').next().unwrap_or_default()
    } else {
        line.split(',').next().unwrap_or_default()
    };
    column.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ListFormat::from_extension(Some("csv")), ListFormat::Csv);
        assert_eq!(ListFormat::from_extension(Some("CSV")), ListFormat::Csv);
        assert_eq!(ListFormat::from_extension(Some("txt")), ListFormat::Lines);
        assert_eq!(ListFormat::from_extension(None), ListFormat::Lines);
    }

    #[test]
    fn test_records_skip_blank_and_comment_lines() {
        let content = "# repositories\nocto/one\n\n   \nocto/two  \n# octo/skipped\n";
        let records = RepositoryListParser::records(content, ListFormat::Lines);
        assert_eq!(
            records,
            vec![(2, "octo/one".to_string()), (5, "octo/two".to_string())]
        );
    }

    #[test]
    fn test_lines_keep_commas() {
        let records = RepositoryListParser::records("octo/one,extra\n", ListFormat::Lines);
        assert_eq!(records, vec![(1, "octo/one,extra".to_string())]);
    }

    #[test]
    fn test_csv_uses_first_column() {
        let content = "octo/one,team-a\n\"https://github.com/octo/two\",team-b\n ocTo/three \n";
        let records = RepositoryListParser::records(content, ListFormat::Csv);
        assert_eq!(
            records,
            vec![
                (1, "octo/one".to_string()),
                (2, "https://github.com/octo/two".to_string()),
                (3, "ocTo/three".to_string()),
            ]
        );
    }

    #[test]
    fn test_csv_skips_rows_with_empty_first_column() {
        let records = RepositoryListParser::records(",orphan\nocto/one\n", ListFormat::Csv);
        assert_eq!(records, vec![(2, "octo/one".to_string())]);
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let repos =
            RepositoryListParser::parse("b/two\na/one\nhttps://github.com/c/three\n", ListFormat::Lines)
                .unwrap();
        let names: Vec<String> = repos.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["b/two", "a/one", "c/three"]);
    }

    #[test]
    fn test_parse_reports_all_invalid_entries() {
        let invalid =
            RepositoryListParser::parse("octo/ok\nnot-a-repo\nhttps://gitlab.com/a/b\n", ListFormat::Lines)
                .unwrap_err();
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].line, 2);
        assert_eq!(invalid[0].value, "not-a-repo");
        assert_eq!(invalid[1].line, 3);
        assert!(invalid[1].reason.contains("github.com"));
    }

    #[test]
    fn test_byte_order_mark_is_stripped_for_both_formats() {
        let content = "\u{feff}octo/one\nocto/two\n";
        for format in [ListFormat::Lines, ListFormat::Csv] {
            let repos = RepositoryListParser::parse(content, format).unwrap();
            assert_eq!(repos[0].owner(), "octo");
            assert_eq!(
                crate::sbom_generation::services::OutputNaming::for_repository(&repos[0]),
                "octo_one_sbom.json"
            );
        }
    }

    #[test]
    fn test_byte_order_mark_before_comment_line() {
        let records =
            RepositoryListParser::records("\u{feff}# repositories\nocto/one\n", ListFormat::Lines);
        assert_eq!(records, vec![(2, "octo/one".to_string())]);
    }

    #[test]
    fn test_parse_empty_content() {
        let repos = RepositoryListParser::parse("\n# nothing\n", ListFormat::Lines).unwrap();
        assert!(repos.is_empty());
    }
}
