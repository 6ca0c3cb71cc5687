//! Накопитель словоформ, разделяемый всеми входными файлами базы.

use std::collections::{BTreeMap, BTreeSet};

/// Аккумулятор, в который парсер складывает формы из всех файлов.
///
/// `BTreeMap`/`BTreeSet` сравнивают строки побайтово, что для UTF-8
/// совпадает с порядком кодовых точек. Выходные файлы поэтому
/// получаются отсортированными без отдельного шага сортировки.
#[derive(Debug, Default)]
pub struct WordlistBuilder {
    /// Леммы современной орфографии (A2008) и их формы.
    modern: BTreeMap<String, BTreeSet<String>>,
    /// Все леммы, включая дореформенные написания.
    all: BTreeMap<String, BTreeSet<String>>,
    alt_pairs: Vec<(String, String)>,
}

impl WordlistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заводит ключ под лемму, даже если ни одна её форма не пройдёт
    /// фильтры. Такая лемма попадёт в выходной файл одинокой строкой.
    pub fn ensure_lemma(&mut self, lemma: &str, modern: bool) {
        self.all.entry(lemma.to_string()).or_default();
        if modern {
            self.modern.entry(lemma.to_string()).or_default();
        }
    }

    /// Регистрирует написание как форму леммы. В современный список
    /// форма попадает только с поднятым флагом `modern`.
    pub fn add_form(&mut self, lemma: &str, spelling: &str, modern: bool) {
        self.all
            .entry(lemma.to_string())
            .or_default()
            .insert(spelling.to_string());
        if modern {
            self.modern
                .entry(lemma.to_string())
                .or_default()
                .insert(spelling.to_string());
        }
    }

    /// Запоминает пару "лемма парадигмы, лемма варианта" с разным
    /// написанием одного слова.
    pub fn add_alt_pair(&mut self, paradigm_lemma: &str, lemma: &str) {
        self.alt_pairs
            .push((paradigm_lemma.to_string(), lemma.to_string()));
    }

    /// Завершает накопление: сортирует пары и убирает дубликаты.
    pub fn finish(self) -> Wordlists {
        let mut alt_pairs = self.alt_pairs;
        alt_pairs.sort();
        alt_pairs.dedup();
        Wordlists {
            modern: self.modern,
            all: self.all,
            alt_pairs,
        }
    }
}

/// Готовые, упорядоченные списки для записи на диск.
#[derive(Debug)]
pub struct Wordlists {
    pub modern: BTreeMap<String, BTreeSet<String>>,
    pub all: BTreeMap<String, BTreeSet<String>>,
    pub alt_pairs: Vec<(String, String)>,
}
