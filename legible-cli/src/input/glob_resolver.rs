//! Input pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::InputSource;
use crate::error::CliError;

/// Pattern that reads standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve file patterns to actual file paths
///
/// Every pattern must match at least one file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve input arguments, where `-` stands for standard input
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, file_patterns): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == STDIN_PATTERN);

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }

    if !file_patterns.is_empty() {
        let owned: Vec<String> = file_patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&owned)?.into_iter().map(InputSource::File));
    }

    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_glob_resolves_sorted_unique() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(temp_dir.path().join(name), "text").unwrap();
        }

        let files = resolve_patterns(&[
            pattern(&temp_dir, "*.txt"),
            pattern(&temp_dir, "a.txt"),
        ])
        .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_pattern_without_matches() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.txt")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();
        fs::write(temp_dir.path().join("real.txt"), "text").unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "*.txt")]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_stdin_and_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "text").unwrap();

        let sources = resolve_inputs(&[
            "-".to_string(),
            pattern(&temp_dir, "a.txt"),
            "-".to_string(),
        ])
        .unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], InputSource::Stdin);
        assert!(matches!(&sources[1], InputSource::File(p) if p.ends_with("a.txt")));
    }
}
