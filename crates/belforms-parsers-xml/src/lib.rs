//! Парсер XML файлов GrammarDB.
//!
//! Каждый файл устроен как `<Wordlist>` со списком `<Paradigm>`, внутри
//! которых `<Variant>` (написание леммы) и `<Form>` (словоформы).
//! Парсер не строит промежуточных структур на файл, а сразу складывает
//! формы в общий [`WordlistBuilder`].

use std::path::Path;

use belforms_core::text::{normalize, spellings};
use belforms_core::{GrammarDbError, WordlistBuilder};
use roxmltree::{Document, Node};
use tracing::debug;

/// Счётчики по разобранным файлам. Элементы считаются в момент
/// встречи, до фильтров, а `skipped_*` выделяют отброшенное.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseStats {
    pub paradigms: usize,
    pub variants: usize,
    pub forms: usize,
    pub skipped_variants: usize,
    pub skipped_forms: usize,
}

impl ParseStats {
    pub fn merge(&mut self, other: &ParseStats) {
        self.paradigms += other.paradigms;
        self.variants += other.variants;
        self.forms += other.forms;
        self.skipped_variants += other.skipped_variants;
        self.skipped_forms += other.skipped_forms;
    }
}

/// Читает один файл базы и накапливает его содержимое в `ctx`.
///
/// Ошибка структуры в любом месте файла фатальна: накопленное до неё
/// состояние `ctx` считается испорченным и записывать его нельзя.
pub fn parse_grammar_file(
    path: &Path,
    ctx: &mut WordlistBuilder,
) -> Result<ParseStats, GrammarDbError> {
    let text = std::fs::read_to_string(path).map_err(|source| GrammarDbError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grammar_source(&text, path, ctx)
}

fn parse_grammar_source(
    xml: &str,
    origin: &Path,
    ctx: &mut WordlistBuilder,
) -> Result<ParseStats, GrammarDbError> {
    let doc = Document::parse(xml).map_err(|e| GrammarDbError::Xml {
        path: origin.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut stats = ParseStats::default();

    for paradigm in doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Paradigm")
    {
        stats.paradigms += 1;
        let Some(raw_paradigm_lemma) = paradigm.attribute("lemma") else {
            return Err(GrammarDbError::ParadigmMissingLemma {
                path: origin.to_path_buf(),
            });
        };
        let paradigm_lemma = normalize(raw_paradigm_lemma);

        for variant in paradigm
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "Variant")
        {
            stats.variants += 1;
            let Some(raw_lemma) = variant.attribute("lemma") else {
                return Err(GrammarDbError::VariantMissingLemma {
                    path: origin.to_path_buf(),
                    paradigm: paradigm_lemma.clone(),
                });
            };

            // Вариант считается современным, если он входит в свод
            // правил 2008 года и не помечен как нестандартный.
            let modern_pravapis = variant
                .attribute("pravapis")
                .is_some_and(|p| p.contains("A2008"))
                && !marked_type(variant);

            let lemma = normalize(raw_lemma);
            if lemma.contains('|') {
                return Err(GrammarDbError::PipeInLemma {
                    path: origin.to_path_buf(),
                    lemma,
                });
            }
            // Составные и сокращённые написания в списки не берём.
            if lemma.contains('-') || lemma.contains('.') || lemma.chars().any(char::is_whitespace)
            {
                stats.skipped_variants += 1;
                debug!(event = "variant_skipped", file = %origin.display(), lemma = %lemma);
                continue;
            }

            if paradigm_lemma != lemma {
                ctx.add_alt_pair(&paradigm_lemma, &lemma);
            }
            ctx.ensure_lemma(&lemma, modern_pravapis);

            for form in variant
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == "Form")
            {
                stats.forms += 1;
                let word = normalize(form.text().unwrap_or(""));
                if word.is_empty() || word.contains('|') || word.contains('-') {
                    stats.skipped_forms += 1;
                    debug!(event = "form_skipped", file = %origin.display(), lemma = %lemma, word = %word);
                    continue;
                }
                let standard_form = !marked_type(form);
                for spelling in spellings(&word) {
                    ctx.add_form(&lemma, &spelling, modern_pravapis && standard_form);
                }
            }
        }
    }

    Ok(stats)
}

/// Пометки `nonstandard` и `potential` исключают вариант или форму
/// из современного списка, но не из полного.
fn marked_type(node: Node) -> bool {
    node.attribute("type")
        .is_some_and(|t| t.contains("nonstandard") || t.contains("potential"))
}
