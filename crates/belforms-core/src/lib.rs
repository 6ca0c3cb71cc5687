use std::path::PathBuf;
use thiserror::Error;

pub mod text;
pub mod wordlist;

pub use wordlist::{WordlistBuilder, Wordlists};

/// Общий результат для всего воркспейса.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Ошибки, которые останавливают конвертацию целиком.
///
/// Нарушение структуры означает повреждённый checkout базы, а не
/// "плохую" словарную статью: до записи выходных файлов дело не доходит.
#[derive(Debug, Error)]
pub enum GrammarDbError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid XML in {}: {detail}", .path.display())]
    Xml { path: PathBuf, detail: String },

    #[error("paradigm without a lemma attribute in {}", .path.display())]
    ParadigmMissingLemma { path: PathBuf },

    #[error("variant without a lemma attribute under paradigm '{paradigm}' in {}", .path.display())]
    VariantMissingLemma { path: PathBuf, paradigm: String },

    #[error("pipe character in variant lemma '{lemma}' in {}", .path.display())]
    PipeInLemma { path: PathBuf, lemma: String },
}
