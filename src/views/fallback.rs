use crate::models::{Bilingual, Lang, Resource};

/// Built-in copy for one text slot, shown when the backend has nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fallback {
    pub bn: &'static str,
    pub en: &'static str,
}

impl Fallback {
    pub const fn new(bn: &'static str, en: &'static str) -> Self {
        Self { bn, en }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Bn => self.bn,
            Lang::En => self.en,
        }
    }
}

/// `value` unless blank, else `fallback`.
pub fn resolve(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Pick the `{bn, en}` flat field pair for `lang`, falling back per language.
pub fn resolve_pair(lang: Lang, bn: &str, en: &str, fallback: Fallback) -> String {
    let value = match lang {
        Lang::Bn => bn,
        Lang::En => en,
    };
    resolve(value, fallback.get(lang))
}

pub fn resolve_text(lang: Lang, text: &Bilingual<String>, fallback: Fallback) -> String {
    resolve(text.get(lang), fallback.get(lang))
}

/// A whole list in `lang`: the stored list when it has any non-blank entry,
/// else the fallback list. Blank stored entries take the fallback at the
/// same index when there is one.
pub fn resolve_list(lang: Lang, list: &Bilingual<Vec<String>>, fallback: &[Fallback]) -> Vec<String> {
    let stored = list.get(lang);
    if stored.iter().all(|s| s.trim().is_empty()) {
        return fallback.iter().map(|f| f.get(lang).to_string()).collect();
    }
    stored
        .iter()
        .enumerate()
        .map(|(i, s)| resolve(s, fallback.get(i).map_or("", |f| f.get(lang))))
        .collect()
}

/// A fetched document counts only when it carries an `_id`.
pub fn present<R: Resource>(doc: Option<&R>) -> Option<&R> {
    doc.filter(|d| d.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: Fallback = Fallback::new("স্বাগতম", "Welcome");

    #[test]
    fn blank_values_fall_back_per_language() {
        assert_eq!(resolve_pair(Lang::Bn, "", "Hi", HELLO), "স্বাগতম");
        assert_eq!(resolve_pair(Lang::En, "", "Hi", HELLO), "Hi");
        assert_eq!(resolve_pair(Lang::En, "x", "   ", HELLO), "Welcome");
    }

    #[test]
    fn lists_fall_back_whole_or_per_slot() {
        let fallback = [Fallback::new("এক", "One"), Fallback::new("দুই", "Two")];

        let empty = Bilingual::<Vec<String>>::default();
        assert_eq!(resolve_list(Lang::En, &empty, &fallback), vec!["One", "Two"]);

        let partial = Bilingual::new(vec![], vec!["".to_string(), "Deux".to_string(), "".to_string()]);
        assert_eq!(resolve_list(Lang::En, &partial, &fallback), vec!["One", "Deux", ""]);
        assert_eq!(resolve_list(Lang::Bn, &partial, &fallback), vec!["এক", "দুই"]);
    }
}
