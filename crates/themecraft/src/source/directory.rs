//! Theme files discovered through glob patterns.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use super::ThemeSource;
use crate::error::{Result, ThemeError};
use crate::theme::ThemeCollection;

/// Extensions recognized as theme files when a whole directory is loaded.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Loads themes from every file matching a list of glob patterns.
///
/// Relative patterns are anchored at the base directory. Matches of each
/// pattern are sorted, so the same filesystem always yields the same theme
/// order; files matched by more than one pattern are loaded once, at their
/// first position.
///
/// # Example
///
/// ```rust,ignore
/// let source = DirectorySource::new("/app")
///     .pattern("themes/**/*.yaml")
///     .pattern("overrides.yaml");
///
/// let themes = source.list()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    base_dir: PathBuf,
    patterns: Vec<String>,
}

impl DirectorySource {
    /// Creates a source with no patterns.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            patterns: Vec::new(),
        }
    }

    /// Adds a glob pattern, returning the updated source.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Adds several glob patterns.
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Expands all patterns to absolute file paths, in load order.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let base = absolute_base(&self.base_dir)?;
        let mut files: Vec<PathBuf> = Vec::new();
        for pattern in &self.patterns {
            for file in expand_pattern(&base, pattern)? {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
        }
        Ok(files)
    }
}

impl ThemeSource for DirectorySource {
    fn list(&self) -> Result<ThemeCollection> {
        let mut themes = ThemeCollection::new();
        for file in self.files()? {
            let loaded = ThemeCollection::from_path(&file)?;
            debug!(path = %file.display(), themes = loaded.len(), "loaded theme file");
            themes.merge(loaded);
        }
        Ok(themes)
    }

    fn describe(&self) -> String {
        format!("theme files {}", self.patterns.join(", "))
    }
}

fn absolute_base(base: &Path) -> Result<PathBuf> {
    if base.is_absolute() {
        return Ok(base.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| ThemeError::Io {
        path: base.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(base))
}

fn has_glob_meta(component: &str) -> bool {
    component.contains(|c| matches!(c, '*' | '?' | '[' | '{'))
}

/// Splits a pattern into its literal leading directory and the glob part.
///
/// Returns `None` for the glob part when the pattern has no wildcards.
fn split_pattern(pattern: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = pattern.split('/').collect();
    match parts.iter().position(|part| has_glob_meta(part)) {
        None => (pattern.to_string(), None),
        Some(i) => (parts[..i].join("/"), Some(parts[i..].join("/"))),
    }
}

fn compile_glob(pattern: &str, glob: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| ThemeError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Expands one glob pattern to a sorted list of absolute file paths.
///
/// A pattern without wildcards names a single file, which is returned if it
/// exists. A pattern whose literal directory does not exist matches nothing.
pub fn expand_pattern(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let (prefix, glob) = split_pattern(pattern);
    let anchor = if Path::new(&prefix).is_absolute() {
        PathBuf::from(&prefix)
    } else {
        base.join(&prefix)
    };

    let Some(glob) = glob else {
        return Ok(if anchor.is_file() { vec![anchor] } else { Vec::new() });
    };

    let matcher = compile_glob(pattern, &glob)?;
    if !anchor.is_dir() {
        debug!(pattern, anchor = %anchor.display(), "pattern directory does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    walk_files(&anchor, &mut files)?;
    let mut matched: Vec<PathBuf> = files
        .into_iter()
        .filter(|path| {
            path.strip_prefix(&anchor)
                .map(|relative| {
                    let relative = relative
                        .to_string_lossy()
                        .replace(std::path::MAIN_SEPARATOR, "/");
                    matcher.is_match(relative)
                })
                .unwrap_or(false)
        })
        .collect();
    matched.sort();
    Ok(matched)
}

/// Recursively collects every file under `dir`.
pub(crate) fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let io_error = |source| ThemeError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            walk_files(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Returns true if the path has a recognized theme file extension.
pub(crate) fn is_theme_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    THEME_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_split_pattern() {
        assert_eq!(
            split_pattern("themes/**/*.yaml"),
            ("themes".to_string(), Some("**/*.yaml".to_string()))
        );
        assert_eq!(
            split_pattern("*.yaml"),
            (String::new(), Some("*.yaml".to_string()))
        );
        assert_eq!(split_pattern("themes/card.yaml"), ("themes/card.yaml".to_string(), None));
        assert_eq!(
            split_pattern("/abs/dir/*.json"),
            ("/abs/dir".to_string(), Some("*.json".to_string()))
        );
    }

    #[test]
    fn test_expand_sorts_matches() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "themes/b.yaml", "{}");
        write(dir.path(), "themes/a.yaml", "{}");
        write(dir.path(), "themes/notes.txt", "");

        let files = expand_pattern(dir.path(), "themes/*.yaml").unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("themes/a.yaml"), dir.path().join("themes/b.yaml")]
        );
    }

    #[test]
    fn test_single_star_does_not_cross_directories() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "themes/top.yaml", "{}");
        write(dir.path(), "themes/nested/deep.yaml", "{}");

        let shallow = expand_pattern(dir.path(), "themes/*.yaml").unwrap();
        assert_eq!(shallow.len(), 1);

        let deep = expand_pattern(dir.path(), "themes/**/*.yaml").unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_literal_pattern_and_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "card.yaml", "{}");

        assert_eq!(expand_pattern(dir.path(), "card.yaml").unwrap().len(), 1);
        assert!(expand_pattern(dir.path(), "missing.yaml").unwrap().is_empty());
        assert!(expand_pattern(dir.path(), "nowhere/*.yaml").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let result = expand_pattern(dir.path(), "themes/[a-.yaml");
        assert!(matches!(result, Err(ThemeError::InvalidPattern { .. })));
    }

    #[test]
    fn test_files_dedupes_across_patterns() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.yaml", "{}");
        write(dir.path(), "b.yaml", "{}");

        let source = DirectorySource::new(dir.path())
            .pattern("b.yaml")
            .pattern("*.yaml");
        let files = source.files().unwrap();
        assert_eq!(files, vec![dir.path().join("b.yaml"), dir.path().join("a.yaml")]);
    }

    #[test]
    fn test_list_merges_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "a.yaml",
            "card:\n  className: card-a\nbutton:\n  className: button\n",
        );
        write(dir.path(), "b.yaml", "card:\n  className: card-b\n");

        let themes = DirectorySource::new(dir.path())
            .pattern("*.yaml")
            .list()
            .unwrap();

        let names: Vec<&str> = themes.names().collect();
        assert_eq!(names, vec!["card", "button"]);
        assert_eq!(themes.get("card").unwrap().class_name, "card-b");
    }

    #[test]
    fn test_list_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.yaml", "card: [unclosed\n");

        let err = DirectorySource::new(dir.path())
            .pattern("*.yaml")
            .list()
            .unwrap_err();
        match err {
            ThemeError::Parse { path, .. } => assert!(path.ends_with("bad.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_is_theme_file() {
        assert!(is_theme_file(Path::new("a/b.yaml")));
        assert!(is_theme_file(Path::new("b.json")));
        assert!(!is_theme_file(Path::new("b.toml")));
    }
}
