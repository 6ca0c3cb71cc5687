//! Full conversion run: parse every database file into one shared
//! accumulator, then write the three wordlist files.
//!
//! Nothing is written until the whole database has parsed cleanly, so
//! a fatal error in file fifteen cannot leave truncated lists behind.

use std::path::{Path, PathBuf};

use belforms_core::{Result, WordlistBuilder, Wordlists};
use belforms_export_wordlist::{write_alt_pairs_file, write_wordforms_file};
use belforms_parsers_xml::{parse_grammar_file, ParseStats};
use tracing::info;

/// Release tag of the GrammarDB checkout the lists are built from.
pub const GRAMMAR_DB_TAG: &str = "RELEASE-202309";

/// Database files, processed in this fixed order.
pub const SOURCE_FILES: [&str; 18] = [
    "A1.xml", "A2.xml", "C.xml", "E.xml", "I.xml", "K.xml", "M.xml", "N1.xml", "N2.xml", "N3.xml",
    "NP.xml", "P.xml", "R.xml", "S.xml", "V.xml", "W.xml", "Y.xml", "Z.xml",
];

/// Strict list for spellcheckers, official 2008 orthography only.
pub const MODERN_WORDFORMS_FILE: &str = "wordforms-be-2008.txt";

/// Permissive list with deprecated spellings included.
pub const ALL_WORDFORMS_FILE: &str = "wordforms-be-all.txt";

/// Pairs of alternative spellings of the same word.
pub const ALT_PAIRS_FILE: &str = "wordforms-be-altpairs.txt";

fn common_header() -> String {
    format!(
        "# This file was automatically generated from the https://github.com/Belarus/GrammarDB\n\
         # data (Grammar Database of Belarusian language) using the {GRAMMAR_DB_TAG} tag.\n\
         # Creative Commons Attribution-ShareAlike 4.0 International License.\n\
         #\n"
    )
}

const WORDFORMS_FORMAT_NOTE: &str = "\
# Uses UTF-8 format with U+0301 stress marks and U+2BC apostrophes. Each line starts\n\
# with a single lemma, followed by the '|' delimited list of all its possible forms.\n\
# The ў/у variants and different apostrophe types are also present in the list.\n\
#\n";

/// Header of [`MODERN_WORDFORMS_FILE`].
pub fn modern_header() -> String {
    format!(
        "{}{}\
         # Official Belarusian orthography (be-1959acad) adhering to the latest 2008 reform.\n\
         # Intended to be used by spellcheckers, which need to be strict.\n\
         #\n",
        common_header(),
        WORDFORMS_FORMAT_NOTE
    )
}

/// Header of [`ALL_WORDFORMS_FILE`].
pub fn all_header() -> String {
    format!(
        "{}{}\
         # Official Belarusian orthography (be-1959acad), but deprecated Narkamaŭka spelling\n\
         # forms are also included. Intended to be used by ebook dictionaries to 'catch them all'.\n\
         #\n",
        common_header(),
        WORDFORMS_FORMAT_NOTE
    )
}

/// Header of [`ALT_PAIRS_FILE`].
pub fn alt_pairs_header() -> String {
    format!(
        "{}\
         # Uses UTF-8 format with U+0301 stress marks and U+2BC apostrophes. Each line lists\n\
         # a pair of alternative spelling variants of the same word delimited by '|'.\n\
         # Intended to be used by ebook dictionaries. If these two are not separate headwords\n\
         # in a dictionary, then it makes sense to link them together.\n\
         #\n",
        common_header()
    )
}

/// Что получилось после полного прохода по базе.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub files: usize,
    pub stats: ParseStats,
    pub modern_lemmas: usize,
    pub all_lemmas: usize,
    pub alt_pairs: usize,
    pub outputs: Vec<PathBuf>,
}

/// Parses the whole database in the fixed file order into one builder.
pub(crate) fn parse_all(data_dir: &Path) -> Result<(WordlistBuilder, ParseStats)> {
    let mut builder = WordlistBuilder::new();
    let mut totals = ParseStats::default();
    for name in SOURCE_FILES {
        info!("Processing: {}", name);
        let stats = parse_grammar_file(&data_dir.join(name), &mut builder)?;
        totals.merge(&stats);
    }
    Ok((builder, totals))
}

fn assemble(data_dir: &Path) -> Result<(Wordlists, ParseStats)> {
    let (builder, totals) = parse_all(data_dir)?;
    Ok((builder.finish(), totals))
}

/// Parses the database under `data_dir` and writes the three lists
/// into `out_dir`.
pub fn build_wordlists(data_dir: &Path, out_dir: &Path) -> Result<BuildSummary> {
    let (lists, stats) = assemble(data_dir)?;

    let modern_path = out_dir.join(MODERN_WORDFORMS_FILE);
    let all_path = out_dir.join(ALL_WORDFORMS_FILE);
    let alt_path = out_dir.join(ALT_PAIRS_FILE);

    info!("Generating: {}", MODERN_WORDFORMS_FILE);
    write_wordforms_file(&modern_path, &modern_header(), &lists.modern)?;
    info!("Generating: {}", ALL_WORDFORMS_FILE);
    write_wordforms_file(&all_path, &all_header(), &lists.all)?;
    info!("Generating: {}", ALT_PAIRS_FILE);
    write_alt_pairs_file(&alt_path, &alt_pairs_header(), &lists.alt_pairs)?;

    Ok(BuildSummary {
        files: SOURCE_FILES.len(),
        stats,
        modern_lemmas: lists.modern.len(),
        all_lemmas: lists.all.len(),
        alt_pairs: lists.alt_pairs.len(),
        outputs: vec![modern_path, all_path, alt_path],
    })
}

/// План сухого прогона: какие файлы и какого размера были бы записаны.
#[derive(Debug, Clone)]
pub struct DryRunPlan {
    /// Путь будущего файла и количество строк данных в нём.
    pub files: Vec<(PathBuf, usize)>,
}

impl DryRunPlan {
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|(_, n)| *n).sum()
    }
}

/// Same full parse as [`build_wordlists`], but nothing touches the disk.
pub fn plan_wordlists(data_dir: &Path, out_dir: &Path) -> Result<DryRunPlan> {
    let (lists, _) = assemble(data_dir)?;
    Ok(DryRunPlan {
        files: vec![
            (out_dir.join(MODERN_WORDFORMS_FILE), lists.modern.len()),
            (out_dir.join(ALL_WORDFORMS_FILE), lists.all.len()),
            (out_dir.join(ALT_PAIRS_FILE), lists.alt_pairs.len()),
        ],
    })
}
