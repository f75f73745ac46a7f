//! `healthfaq check`: validate the corpus files in a data directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use healthfaq_core::{DataPaths, Language};
use healthfaq_index::{load_corpus, CorpusIndex};
use healthfaq_nlp::Normalizer;

/// Findings for one language's corpus file.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    pub language: Language,
    pub path: PathBuf,
    pub entries: usize,
    pub vocabulary: usize,
    pub warnings: Vec<String>,
    pub error: Option<String>,
}

/// Findings for a whole data directory.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub data_dir: PathBuf,
    pub corpora: Vec<CorpusReport>,
}

impl CheckReport {
    /// At least one corpus has entries, so the server can answer something.
    pub fn is_usable(&self) -> bool {
        self.corpora.iter().any(|c| c.entries > 0)
    }
}

/// Load and index every corpus under `data_dir`.
pub fn check(data_dir: &Path, normalizer: &Normalizer) -> CheckReport {
    let paths = DataPaths::new(data_dir);
    let corpora = Language::all()
        .iter()
        .map(|&language| check_corpus(paths.corpus_file(language), language, normalizer))
        .collect();

    CheckReport {
        data_dir: data_dir.to_path_buf(),
        corpora,
    }
}

fn check_corpus(path: &Path, language: Language, normalizer: &Normalizer) -> CorpusReport {
    let mut report = CorpusReport {
        language,
        path: path.to_path_buf(),
        entries: 0,
        vocabulary: 0,
        warnings: Vec::new(),
        error: None,
    };

    if !path.exists() {
        report.warnings.push("file not found, corpus is empty".to_string());
        return report;
    }

    let entries = match load_corpus(path) {
        Ok(entries) => entries,
        Err(e) => {
            report.error = Some(e.to_string());
            return report;
        }
    };

    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        let question = entry.question.trim();
        if question.is_empty() {
            report.warnings.push(format!("entry {} has a blank question", i));
        } else if !seen.insert(question.to_lowercase()) {
            report.warnings.push(format!("entry {} repeats question {:?}", i, question));
        }
        if entry.answer.trim().is_empty() {
            report.warnings.push(format!("entry {} has a blank answer", i));
        }
        if !question.is_empty() && normalizer.tokens(question, language).is_empty() {
            report
                .warnings
                .push(format!("entry {} has no indexable terms: {:?}", i, question));
        }
    }

    let index = CorpusIndex::build(entries, language, normalizer);
    report.entries = index.len();
    report.vocabulary = index.vocabulary_len();
    report
}

pub fn print_report(report: &CheckReport) {
    println!("=== HealthFAQ Corpus Check ===");
    println!();
    println!("Data directory:     {}", report.data_dir.display());

    for corpus in &report.corpora {
        println!();
        println!("[{}] {}", corpus.language, corpus.path.display());
        println!("  Entries:          {}", corpus.entries);
        println!("  Vocabulary:       {}", corpus.vocabulary);
        if let Some(error) = &corpus.error {
            println!("  Error:            {}", error);
        }
        for warning in &corpus.warnings {
            println!("  - {}", warning);
        }
    }

    println!();
    if report.is_usable() {
        println!("Status: READY");
    } else {
        println!("Status: NO FAQ DATA");
    }
}
