//! Batch analyzer: discovers documents and checks each one.

use crate::checker::Checker;
use crate::config::Config;
use crate::element::{locate_body, MarkupParser};
use crate::error::DocumentError;
use crate::rule::RuleBox;
use crate::types::{DocumentOutcome, DocumentReport, LintResult};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while setting up or running an analysis.
///
/// Problems with individual documents are not errors here; they end up in
/// that document's [`DocumentOutcome::Failed`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the root directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// No markup parser was configured.
    #[error("No markup parser configured")]
    MissingParser,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    parser: Option<Box<dyn MarkupParser>>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory patterns are resolved against.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the markup parser.
    #[must_use]
    pub fn parser<P: MarkupParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Adds multiple include glob patterns.
    #[must_use]
    pub fn includes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// Include patterns given to the builder replace the configured ones;
    /// exclude patterns are merged.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser is set or the current directory
    /// cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let parser = self.parser.ok_or(AnalyzerError::MissingParser)?;
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let include_patterns = if self.include_patterns.is_empty() {
            config.analyzer.include.clone()
        } else {
            self.include_patterns
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());

        Ok(Analyzer {
            root,
            parser,
            exclude_patterns,
            include_patterns,
            checker: Checker::new(self.rules).with_config(config),
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    parser: Box<dyn MarkupParser>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    checker: Checker,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.checker.rule_count()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.checker.config()
    }

    /// Discovers and checks every document.
    ///
    /// Every document is processed even after earlier ones fail.
    ///
    /// # Errors
    ///
    /// Returns an error if an include pattern is invalid.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} {} files to check", files.len(), self.parser.language_id());

        let mut result = LintResult::new();
        for path in &files {
            result.documents.push(self.check_file(path));
        }

        let (errors, warnings, _) = result.count_by_severity();
        info!(
            "Analysis complete: {} error(s), {} warning(s), {} broken document(s) in {} files",
            errors,
            warnings,
            result.failed_documents(),
            result.files_checked()
        );

        Ok(result)
    }

    /// Reads and checks a single file.
    #[must_use]
    pub fn check_file(&self, path: &Path) -> DocumentReport {
        debug!("Checking: {}", path.display());
        let display_path = path.strip_prefix(&self.root).unwrap_or(path);

        match std::fs::read_to_string(path) {
            Ok(source) => {
                let outcome = self.check_source(&source);
                DocumentReport::new(display_path, outcome).with_source(source)
            }
            Err(e) => {
                let error = DocumentError::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
                warn!("{error}");
                DocumentReport::new(display_path, DocumentOutcome::Failed { error })
            }
        }
    }

    /// Parses and checks document source text.
    #[must_use]
    pub fn check_source(&self, source: &str) -> DocumentOutcome {
        let document = match self.parser.parse(source) {
            Ok(document) => document,
            Err(e) => return DocumentOutcome::Failed { error: e.into() },
        };
        let body = match locate_body(&document) {
            Ok(body) => body,
            Err(error) => return DocumentOutcome::Failed { error },
        };

        let outcome = self.checker.check_document(body);
        if let DocumentOutcome::Failed { error } = &outcome {
            warn!("Document not checked: {error}");
        }
        outcome
    }

    /// Expands include patterns under the root, drops excluded paths, and
    /// returns the sorted, de-duplicated file list.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = BTreeSet::new();

        for pattern in &self.include_patterns {
            let full = if Path::new(pattern).is_absolute() {
                pattern.clone()
            } else {
                let root = glob::Pattern::escape(&self.root.to_string_lossy());
                format!("{root}/{pattern}")
            };

            let mut matched = 0usize;
            for entry in glob::glob(&full)? {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        warn!("Skipping unreadable path: {e}");
                        continue;
                    }
                };
                if !path.is_file() {
                    continue;
                }
                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }
                matched += 1;
                files.insert(path);
            }

            if matched == 0 {
                warn!("Pattern {pattern:?} matched no files");
            }
        }

        Ok(files.into_iter().collect())
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/node_modules/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementNode, ParseError};
    use crate::types::Severity;

    /// Treats each non-empty line as `tag class...` of a `body` child.
    struct LineParser;

    impl MarkupParser for LineParser {
        fn language_id(&self) -> &'static str {
            "lines"
        }

        fn extensions(&self) -> &'static [&'static str] {
            &[".txt"]
        }

        fn parse(&self, source: &str) -> Result<ElementNode, ParseError> {
            if source.starts_with('!') {
                return Err(ParseError::new("unparsable"));
            }
            let mut body = ElementNode::element("body");
            for line in source.lines().filter(|l| !l.trim().is_empty()) {
                let (tag, classes) = line.split_once(' ').unwrap_or((line, ""));
                body = body.with_child(ElementNode::element(tag).with_class(classes));
            }
            Ok(ElementNode::document(vec![
                ElementNode::element("html").with_child(body)
            ]))
        }
    }

    #[test]
    fn test_builder_requires_parser() {
        let err = Analyzer::builder().root(".").build().err();
        assert!(matches!(err, Some(AnalyzerError::MissingParser)));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root(".")
            .parser(LineParser)
            .exclude("**/vendor/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/site/node_modules/pkg/index.html")));
        assert!(analyzer.should_exclude(Path::new("/site/vendor/lib.html")));
        assert!(!analyzer.should_exclude(Path::new("/site/pages/index.html")));
    }

    #[test]
    fn test_check_source_outcomes() {
        let analyzer = Analyzer::builder()
            .root(".")
            .parser(LineParser)
            .build()
            .expect("Failed to build analyzer");

        assert!(matches!(
            analyzer.check_source("div card\n"),
            DocumentOutcome::Clean { .. }
        ));
        assert!(matches!(
            analyzer.check_source("div Card!Title\n"),
            DocumentOutcome::Failed {
                error: DocumentError::MalformedClass { .. }
            }
        ));
        assert!(matches!(
            analyzer.check_source("!"),
            DocumentOutcome::Failed {
                error: DocumentError::Parse { .. }
            }
        ));
    }

    #[test]
    fn test_analyze_discovers_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/x")).unwrap();
        std::fs::write(dir.path().join("pages/b.txt"), "div b\n").unwrap();
        std::fs::write(dir.path().join("pages/a.txt"), "div a\n").unwrap();
        std::fs::write(dir.path().join("node_modules/x/c.txt"), "div c\n").unwrap();

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .parser(LineParser)
            .include("**/*.txt")
            .include("pages/*.txt")
            .build()
            .unwrap();
        let result = analyzer.analyze().unwrap();

        let paths: Vec<_> = result.documents.iter().map(|d| d.path.clone()).collect();
        assert_eq!(
            paths,
            [PathBuf::from("pages/a.txt"), PathBuf::from("pages/b.txt")]
        );
        assert!(!result.has_failures(Severity::Error));
        assert_eq!(result.documents[0].source, "div a\n");
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site[1]");
        std::fs::create_dir_all(root.join("pages")).unwrap();
        std::fs::write(root.join("pages/index.txt"), "div page\n").unwrap();
        std::fs::create_dir_all(dir.path().join("site1")).unwrap();
        std::fs::write(dir.path().join("site1/other.txt"), "div other\n").unwrap();

        let result = Analyzer::builder()
            .root(root.clone())
            .parser(LineParser)
            .include("**/*.txt")
            .build()
            .unwrap()
            .analyze()
            .unwrap();

        let paths: Vec<_> = result.documents.iter().map(|d| d.path.clone()).collect();
        assert_eq!(paths, [PathBuf::from("pages/index.txt")]);
    }

    #[test]
    fn test_unreadable_file_is_a_document_failure() {
        let analyzer = Analyzer::builder()
            .root(".")
            .parser(LineParser)
            .build()
            .unwrap();
        let report = analyzer.check_file(Path::new("/definitely/not/here.txt"));
        assert!(matches!(
            report.outcome,
            DocumentOutcome::Failed {
                error: DocumentError::Read { .. }
            }
        ));
    }
}
