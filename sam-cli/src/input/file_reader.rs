//! Reading comment datasets and plain text inputs

use anyhow::{Context, Result};
use rayon::prelude::*;
use sam_core::dataset::{self, LabeledSample};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Layout of comment dataset files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One comment per row, text in a chosen column
    #[default]
    Csv,
    /// Array of `{"comment": .., "sentences": [..]}` objects
    Json,
}

/// Comments read from one dataset file
#[derive(Debug)]
pub struct CommentFile {
    pub path: PathBuf,
    pub comments: Vec<String>,
}

/// File reader for the CSV and text inputs of the commands
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn open(path: &Path) -> Result<BufReader<File>> {
        let file =
            File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Comment texts from column `column` of a CSV file
    pub fn read_comments(path: &Path, column: usize, has_headers: bool) -> Result<Vec<String>> {
        dataset::read_comments(Self::open(path)?, column, has_headers)
            .with_context(|| format!("Failed to read comments from {}", path.display()))
    }

    /// Comment texts from a JSON comment file
    pub fn read_json_comments(path: &Path) -> Result<Vec<String>> {
        dataset::read_json_comments(Self::open(path)?)
            .with_context(|| format!("Failed to read comments from {}", path.display()))
    }

    /// Read several comment files concurrently, keeping their order
    ///
    /// `column` and `has_headers` only apply to CSV files.
    pub fn read_comment_files(
        paths: &[PathBuf],
        format: InputFormat,
        column: usize,
        has_headers: bool,
    ) -> Result<Vec<CommentFile>> {
        paths
            .par_iter()
            .map(|path| {
                let comments = match format {
                    InputFormat::Csv => Self::read_comments(path, column, has_headers)?,
                    InputFormat::Json => Self::read_json_comments(path)?,
                };
                Ok(CommentFile { path: path.clone(), comments })
            })
            .collect()
    }

    /// `rating,text` rows of a labelled CSV file
    pub fn read_labeled(path: &Path, has_headers: bool) -> Result<Vec<LabeledSample>> {
        dataset::read_labeled(Self::open(path)?, has_headers)
            .with_context(|| format!("Failed to read labelled data from {}", path.display()))
    }

    /// Non-empty lines of a text file
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        Ok(Self::read_text(path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_comment_files_keeps_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("1.csv");
        let second = dir.path().join("2.csv");
        fs::write(&first, "id,text\n1,Første\n").unwrap();
        fs::write(&second, "id,text\n1,Anden\n2,Tredje\n").unwrap();

        let files = FileReader::read_comment_files(&[first.clone(), second], InputFormat::Csv, 1, true).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, first);
        assert_eq!(files[0].comments, vec![" første"]);
        assert_eq!(files[1].comments.len(), 2);
    }

    #[test]
    fn test_read_comment_files_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comments.json");
        fs::write(&path, r#"[{"Comment": "Godt", "Sentences": ["Godt"]}, {"comment": "Skidt"}]"#)
            .unwrap();

        let files = FileReader::read_comment_files(&[path], InputFormat::Json, 1, true).unwrap();
        assert_eq!(files[0].comments, vec![" godt", " skidt"]);
    }

    #[test]
    fn test_read_json_comments_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();

        let err = FileReader::read_json_comments(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_read_comments_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "only\n").unwrap();

        let err = FileReader::read_comments(&path, 1, false).unwrap_err();
        assert!(err.to_string().contains("bad.csv"));
    }

    #[test]
    fn test_read_labeled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labeled.csv");
        fs::write(&path, "rating,text\n-1,Skidt\n").unwrap();

        let samples = FileReader::read_labeled(&path, true).unwrap();
        assert_eq!(samples[0].rating, -1.0);
        assert_eq!(samples[0].text, "skidt");
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, "en\n\n  \nto\n").unwrap();

        assert_eq!(FileReader::read_lines(&path).unwrap(), vec!["en", "to"]);
    }
}
