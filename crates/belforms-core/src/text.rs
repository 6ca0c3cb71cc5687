//! Правила нормализации словоформ GrammarDB.
//!
//! В базе ударение помечается знаком `+` после гласной, а апостроф
//! хранится как ASCII `'`. В выходных списках вместо них используются
//! U+0301 (combining acute accent) и U+02BC (modifier letter apostrophe).

/// Комбинируемый знак ударения, U+0301.
pub const STRESS: &str = "\u{0301}";

/// Апостроф-буква, U+02BC.
pub const APOSTROPHE: &str = "\u{02BC}";

/// Односложные предлоги, которые в базе размечены с ударением,
/// хотя в речи они безударные. Для них знак `+` просто убирается.
const UNSTRESSED_PREPOSITIONS: [&str; 3] = ["у+", "не+", "бе+з"];

/// Приводит сырую словоформу из XML к выходной орфографии:
/// обрезает окружающие пробелы, превращает `+` в U+0301 и `'` в U+02BC.
///
/// Уже нормализованный текст проходит через функцию без изменений.
pub fn normalize(raw: &str) -> String {
    let word = raw.trim();
    if UNSTRESSED_PREPOSITIONS.contains(&word) {
        return word.replace('+', "");
    }
    word.replace('+', STRESS).replace('\'', APOSTROPHE)
}

/// Разворачивает нормализованную форму во все принятые варианты записи.
///
/// Начальное безударное `у` даёт дополнительный вариант с `ў`
/// (в поэзии и после гласной такая замена допустима). Форма с U+02BC
/// дополнительно дублируется с ASCII `'` и с U+2019, потому что обе
/// записи встречаются в реальных текстах.
///
/// Первым элементом всегда идёт исходная форма.
pub fn spellings(word: &str) -> Vec<String> {
    let mut result = vec![word.to_string()];

    if let Some(rest) = word.strip_prefix('у') {
        if !rest.starts_with('\u{0301}') {
            result.push(format!("ў{rest}"));
        }
    }

    if word.contains(APOSTROPHE) {
        let ascii: Vec<String> = result.iter().map(|w| w.replace(APOSTROPHE, "'")).collect();
        let curly: Vec<String> = result
            .iter()
            .map(|w| w.replace(APOSTROPHE, "\u{2019}"))
            .collect();
        result.extend(ascii);
        result.extend(curly);
    }

    result
}
