// testcat-core/src/infrastructure/glob.rs
//
// Shell-style glob expansion over the filesystem, with `**` recursion.

use crate::infrastructure::error::InfrastructureError;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
enum Segment {
    /// No wildcard characters: compared verbatim.
    Literal(String),
    /// Single path component matched by a compiled pattern.
    Wildcard { regex: Regex, hidden: bool },
    /// `**`: zero or more directories.
    Recursive,
}

/// A parsed glob pattern.
///
/// The leading wildcard-free components form the `base` directory the walk
/// starts from; the rest are matched component by component.
#[derive(Debug)]
pub struct GlobPattern {
    raw: String,
    base: PathBuf,
    segments: Vec<Segment>,
}

impl GlobPattern {
    pub fn parse(raw: &str) -> Result<Self, InfrastructureError> {
        if raw.trim().is_empty() {
            return Err(InfrastructureError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }

        let mut base = if raw.starts_with('/') {
            PathBuf::from("/")
        } else {
            PathBuf::new()
        };

        let mut parts = raw.split('/').filter(|p| !p.is_empty()).peekable();
        while let Some(part) = parts.next_if(|p| !has_magic(p)) {
            base.push(part);
        }

        let mut segments = Vec::new();
        for part in parts {
            let segment = if part == "**" {
                // Consecutive `**` behave like a single one
                if matches!(segments.last(), Some(Segment::Recursive)) {
                    continue;
                }
                Segment::Recursive
            } else if has_magic(part) {
                let regex = Regex::new(&translate(part)).map_err(|e| {
                    InfrastructureError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Segment::Wildcard {
                    regex,
                    hidden: part.starts_with('.'),
                }
            } else {
                Segment::Literal(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            base,
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Expands the pattern into existing files, sorted by path.
    ///
    /// Relative patterns are anchored at `root`. Directories that match are
    /// skipped; unreadable entries are logged and skipped.
    pub fn resolve(&self, root: &Path) -> Vec<PathBuf> {
        let base = if self.base.as_os_str().is_empty() {
            root.to_path_buf()
        } else {
            root.join(&self.base)
        };

        if self.segments.is_empty() {
            return if base.is_file() { vec![base] } else { Vec::new() };
        }
        if !base.is_dir() {
            return Vec::new();
        }

        let mut walker = WalkDir::new(&base).follow_links(true).sort_by_file_name();
        walker = if self.is_recursive() {
            walker.min_depth(1)
        } else {
            // Fixed depth: exactly one directory level per segment
            walker
                .min_depth(self.segments.len())
                .max_depth(self.segments.len())
        };

        let allow_hidden = self.allows_hidden();
        let mut files = Vec::new();

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || allow_hidden || !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(pattern = %self.raw, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&base) else {
                continue;
            };
            let components: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();

            if match_segments(&self.segments, &components) {
                files.push(entry.into_path());
            }
        }

        files
    }

    fn is_recursive(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Recursive))
    }

    fn allows_hidden(&self) -> bool {
        self.segments.iter().any(|s| match s {
            Segment::Literal(name) => name.starts_with('.'),
            Segment::Wildcard { hidden, .. } => *hidden,
            Segment::Recursive => false,
        })
    }
}

/// Expands every pattern against `root` and concatenates the results in
/// pattern order. A file matched by several patterns is listed once per match.
pub fn resolve_patterns(
    root: &Path,
    patterns: &[String],
) -> Result<Vec<PathBuf>, InfrastructureError> {
    // Parse everything up front so a bad pattern fails before any walk
    let parsed = patterns
        .iter()
        .map(|p| GlobPattern::parse(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    for pattern in &parsed {
        let matched = pattern.resolve(root);
        debug!(pattern = pattern.as_str(), matched = matched.len(), "Resolved glob pattern");
        files.extend(matched);
    }

    Ok(files)
}

fn has_magic(part: &str) -> bool {
    part.contains(['*', '?', '['])
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn match_segments(segments: &[Segment], components: &[String]) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return components.is_empty();
    };

    match first {
        Segment::Recursive => (0..=components.len()).any(|skip| {
            components[..skip].iter().all(|c| !c.starts_with('.'))
                && match_segments(rest, &components[skip..])
        }),
        Segment::Literal(name) => components
            .split_first()
            .is_some_and(|(c, tail)| c == name && match_segments(rest, tail)),
        Segment::Wildcard { regex, hidden } => {
            components.split_first().is_some_and(|(c, tail)| {
                (*hidden || !c.starts_with('.'))
                    && regex.is_match(c)
                    && match_segments(rest, tail)
            })
        }
    }
}

/// Translates one path component of a glob into an anchored regex.
fn translate(part: &str) -> String {
    let chars: Vec<char> = part.chars().collect();
    let mut out = String::from("^(?s:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                // Unterminated class: the bracket is a literal
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(")$");
    out
}

/// Index of the `]` closing a class opened just before `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    // A leading `]` belongs to the class
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

fn translate_class(body: &[char]) -> String {
    let mut out = String::from("[");
    let mut rest = body;
    if let Some((&'!', tail)) = rest.split_first() {
        out.push('^');
        rest = tail;
    }

    let mut i = 0;
    while i < rest.len() {
        push_class_char(&mut out, rest[i]);
        // `a-z` is a range unless the `-` is the last character
        if rest.get(i + 1) == Some(&'-') && i + 2 < rest.len() {
            out.push('-');
            push_class_char(&mut out, rest[i + 2]);
            i += 3;
        } else {
            i += 1;
        }
    }

    out.push(']');
    out
}

/// Pushes a literal class member, escaping regex class-set syntax.
fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^' | '-') {
        out.push('\\');
    }
    out.push(c);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    /// test-catalog/
    ///   .hidden/h.yaml
    ///   .secret.yaml
    ///   clients/a.yaml
    ///   core/sub/b.yaml
    ///   dir.yaml/          (directory)
    ///   notes.txt
    ///   top.yaml
    fn catalog_tree() -> Result<TempDir> {
        let dir = tempdir()?;
        let root = dir.path().join("test-catalog");
        for file in [
            ".hidden/h.yaml",
            ".secret.yaml",
            "clients/a.yaml",
            "core/sub/b.yaml",
            "notes.txt",
            "top.yaml",
        ] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap())?;
            fs::write(path, "Foo:\n  - a\n")?;
        }
        fs::create_dir_all(root.join("dir.yaml"))?;
        Ok(dir)
    }

    fn relative(dir: &TempDir, files: Vec<PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|f| {
                f.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    fn resolve(dir: &TempDir, pattern: &str) -> Result<Vec<String>> {
        let files = GlobPattern::parse(pattern)?.resolve(dir.path());
        Ok(relative(dir, files))
    }

    #[test]
    fn test_recursive_pattern_matches_any_depth_sorted() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(
            resolve(&dir, "test-catalog/**/*.yaml")?,
            vec![
                "test-catalog/clients/a.yaml",
                "test-catalog/core/sub/b.yaml",
                "test-catalog/top.yaml",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_single_star_stays_in_one_directory() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(resolve(&dir, "test-catalog/*.yaml")?, vec!["test-catalog/top.yaml"]);
        assert_eq!(
            resolve(&dir, "test-catalog/*/*.yaml")?,
            vec!["test-catalog/clients/a.yaml"]
        );
        Ok(())
    }

    #[test]
    fn test_trailing_double_star_lists_all_visible_files() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(
            resolve(&dir, "test-catalog/**")?,
            vec![
                "test-catalog/clients/a.yaml",
                "test-catalog/core/sub/b.yaml",
                "test-catalog/notes.txt",
                "test-catalog/top.yaml",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_hidden_entries_need_an_explicit_dot() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(
            resolve(&dir, "test-catalog/.*.yaml")?,
            vec!["test-catalog/.secret.yaml"]
        );
        assert_eq!(
            resolve(&dir, "test-catalog/.hidden/*.yaml")?,
            vec!["test-catalog/.hidden/h.yaml"]
        );
        assert_eq!(
            resolve(&dir, "test-catalog/.*/*.yaml")?,
            vec!["test-catalog/.hidden/h.yaml"]
        );
        Ok(())
    }

    #[test]
    fn test_literal_pattern_returns_existing_file_only() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(
            resolve(&dir, "test-catalog/top.yaml")?,
            vec!["test-catalog/top.yaml"]
        );
        assert!(resolve(&dir, "test-catalog/missing.yaml")?.is_empty());
        // A literal directory is not a catalog file
        assert!(resolve(&dir, "test-catalog/clients")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_character_classes() -> Result<()> {
        let dir = catalog_tree()?;
        assert_eq!(
            resolve(&dir, "test-catalog/*/[!x]?yaml")?,
            vec!["test-catalog/clients/a.yaml"]
        );
        assert_eq!(
            resolve(&dir, "test-catalog/[a-t]op.y[a-z]ml")?,
            vec!["test-catalog/top.yaml"]
        );
        Ok(())
    }

    #[test]
    fn test_absolute_pattern_ignores_root() -> Result<()> {
        let dir = catalog_tree()?;
        let pattern = format!("{}/test-catalog/*.yaml", dir.path().display());
        let files = GlobPattern::parse(&pattern)?.resolve(Path::new("/nonexistent"));
        assert_eq!(files, vec![dir.path().join("test-catalog/top.yaml")]);
        Ok(())
    }

    #[test]
    fn test_no_match_is_not_an_error() -> Result<()> {
        let dir = catalog_tree()?;
        assert!(resolve(&dir, "nothing/**/*.yaml")?.is_empty());
        assert!(resolve(&dir, "test-catalog/**/*.json")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_resolve_patterns_concatenates_without_dedup() -> Result<()> {
        let dir = catalog_tree()?;
        let patterns = vec![
            "test-catalog/*.yaml".to_string(),
            "test-catalog/**/*.yaml".to_string(),
        ];
        let files = relative(&dir, resolve_patterns(dir.path(), &patterns)?);
        assert_eq!(
            files,
            vec![
                "test-catalog/top.yaml",
                "test-catalog/clients/a.yaml",
                "test-catalog/core/sub/b.yaml",
                "test-catalog/top.yaml",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let err = GlobPattern::parse("  ").unwrap_err();
        assert!(matches!(err, InfrastructureError::InvalidPattern { .. }));
    }

    #[test]
    fn test_translate_escapes_literals_and_keeps_unterminated_bracket() -> Result<()> {
        let re = Regex::new(&translate("[ab.c+"))?;
        assert!(re.is_match("[ab.c+"));
        assert!(!re.is_match("aab.c+"));

        let re = Regex::new(&translate("a?c*"))?;
        assert!(re.is_match("abc"));
        assert!(re.is_match("abcdef"));
        assert!(!re.is_match("ac"));

        let re = Regex::new(&translate("[]x]"))?;
        assert!(re.is_match("]"));
        assert!(re.is_match("x"));
        Ok(())
    }

    #[test]
    fn test_class_ranges_ending_in_dash() -> Result<()> {
        // `+` through `-` covers `+`, `,` and `-`
        let re = Regex::new(&translate("[+--]"))?;
        assert!(re.is_match("+"));
        assert!(re.is_match(","));
        assert!(re.is_match("-"));
        assert!(!re.is_match("a"));

        let re = Regex::new(&translate("[a-]"))?;
        assert!(re.is_match("a"));
        assert!(re.is_match("-"));
        assert!(!re.is_match("b"));

        let re = Regex::new(&translate("[!--/]"))?;
        assert!(!re.is_match("-"));
        assert!(!re.is_match("."));
        assert!(re.is_match("a"));
        Ok(())
    }

    #[test]
    fn test_dash_class_matches_files() -> Result<()> {
        let dir = tempdir()?;
        let catalogs = dir.path().join("test-catalog");
        fs::create_dir_all(&catalogs)?;
        fs::write(catalogs.join("-core.yaml"), "Foo:\n  - a\n")?;
        fs::write(catalogs.join("core.yaml"), "Foo:\n  - a\n")?;

        assert_eq!(
            resolve(&dir, "test-catalog/[+--]*.yaml")?,
            vec!["test-catalog/-core.yaml"]
        );
        Ok(())
    }
}
