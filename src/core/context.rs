use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::{SourceContext, SourceLocation, TranslationEntry},
        error::ExtractError,
        extract::{FileExtraction, extract},
        file_scanner::scan_files,
        scan::SourceLanguage,
        variants::VariantResolver,
    },
    issues::{Issue, ReadErrorIssue},
    runtime::{Catalog, LanguageTable},
};

/// Extraction results for a whole source tree.
#[derive(Debug, Default)]
pub struct ExtractionRun {
    /// Per-file results, in path order.
    pub files: Vec<FileExtraction>,
    /// Files that could not be read.
    pub read_errors: Vec<ReadErrorIssue>,
    /// Resolved entries per language, each in order of first declaration.
    pub tables: BTreeMap<String, Vec<TranslationEntry>>,
    /// Extraction errors of every file followed by variant conflicts and
    /// base keys without a default variant.
    pub errors: Vec<ExtractError>,
    sources: HashMap<String, String>,
}

impl ExtractionRun {
    /// Build the run from already extracted files, given in path order.
    ///
    /// Tables are assigned to their label, or to `default_language` when
    /// unlabeled. Variants are resolved per language across files.
    pub fn from_files(
        files: Vec<FileExtraction>,
        sources: HashMap<String, String>,
        default_language: &str,
        separator: &str,
    ) -> Self {
        let mut resolvers: BTreeMap<String, VariantResolver> = BTreeMap::new();
        let mut errors: Vec<ExtractError> = files
            .iter()
            .flat_map(|file| file.errors.iter().cloned())
            .collect();

        for file in &files {
            for table in &file.tables {
                let language = table
                    .label
                    .clone()
                    .unwrap_or_else(|| default_language.to_string());
                let resolver = resolvers
                    .entry(language)
                    .or_insert_with(|| VariantResolver::new(separator));
                for declaration in &table.declarations {
                    if let Err(err) = resolver.push(declaration.clone()) {
                        errors.push(err);
                    }
                }
            }
        }

        let tables = resolvers
            .into_iter()
            .map(|(language, resolver)| {
                let (entries, incomplete) = resolver.finish();
                errors.extend(incomplete);
                (language, entries)
            })
            .collect();

        Self {
            files,
            read_errors: Vec::new(),
            tables,
            errors,
            sources,
        }
    }

    /// Text of the line a location points at, empty if unknown.
    pub fn source_line(&self, location: &SourceLocation) -> String {
        self.sources
            .get(&location.file)
            .and_then(|content| content.lines().nth(location.line.saturating_sub(1)))
            .unwrap_or_default()
            .to_string()
    }

    pub fn source_context(&self, location: &SourceLocation) -> SourceContext {
        SourceContext::new(location.clone(), self.source_line(location))
    }

    /// Every extraction problem as a reportable issue.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .errors
            .iter()
            .map(|err| Issue::from_extract_error(err.clone(), self.source_line(err.location())))
            .collect();
        issues.extend(self.read_errors.iter().cloned().map(Issue::ReadError));
        issues
    }

    pub fn entry_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    /// Runtime catalog over the resolved tables.
    pub fn catalog(&self, config: &Config) -> Catalog {
        let catalog = self.tables.iter().fold(
            Catalog::new()
                .with_separator(config.variant_separator.as_str())
                .with_plural_rules(config.plural_rules()),
            |catalog, (language, entries)| {
                let table: LanguageTable = entries.iter().cloned().collect();
                catalog.with_table(language.as_str(), table)
            },
        );
        match &config.fallback_language {
            Some(fallback) => catalog.with_fallback(fallback.as_str()),
            None => catalog,
        }
    }
}

/// Project-wide state shared by the CLI commands.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--default-language ru`)
/// 2. `.locstrrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory.
    pub root_dir: PathBuf,

    /// All source files to extract, in path order.
    pub files: BTreeSet<String>,

    /// Paths skipped because they could not be accessed.
    pub skipped_count: usize,

    /// Extraction of all files, computed on first access.
    extraction: OnceCell<ExtractionRun>,
}

impl ProjectContext {
    /// Create a new `ProjectContext` from command line arguments.
    ///
    /// Loads the configuration, applies CLI overrides and discovers source
    /// files. Fails if the config file is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!("no .locstrrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref language) = common_args.default_language {
            config.default_language = language.clone();
        }
        if let Some(ref separator) = common_args.variant_separator {
            config.variant_separator = separator.clone();
        }
        config.validate()?;

        let scan_result = scan_files(&root_dir, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            tracing::warn!(
                count = scan_result.skipped_count,
                "paths skipped due to access errors"
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
            extraction: OnceCell::new(),
        })
    }

    /// Extract all source files (lazy initialization).
    ///
    /// Files are read and extracted in parallel, then merged in path order so
    /// results do not depend on scheduling.
    pub fn extraction(&self) -> &ExtractionRun {
        self.extraction.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = std::fs::read_to_string(file_path).map(|content| {
                        let language = SourceLanguage::from_path(Path::new(file_path))
                            .unwrap_or(SourceLanguage::Js);
                        let extraction = extract(&content, language, file_path);
                        (extraction, content)
                    });
                    (file_path.clone(), result)
                })
                .collect();

            let mut files = Vec::new();
            let mut sources = HashMap::new();
            let mut read_errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok((extraction, content)) => {
                        files.push(extraction);
                        sources.insert(file_path, content);
                    }
                    Err(err) => {
                        tracing::warn!(file = %file_path, %err, "cannot read source file");
                        read_errors.push(ReadErrorIssue {
                            file_path,
                            error: err.to_string(),
                        });
                    }
                }
            }

            let mut run = ExtractionRun::from_files(
                files,
                sources,
                &self.config.default_language,
                &self.config.variant_separator,
            );
            run.read_errors = read_errors;
            run
        })
    }
}
