use serde::{Deserialize, Serialize};

/// Display language of the affiliate site.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Bn,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bn => "bn",
            Self::En => "en",
        }
    }

    pub fn is_bangla(&self) -> bool {
        matches!(self, Self::Bn)
    }

    pub fn from_bangla(is_bangla: bool) -> Self {
        if is_bangla { Self::Bn } else { Self::En }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Bn => Self::En,
            Self::En => Self::Bn,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bn" | "bangla" | "bengali" => Ok(Self::Bn),
            "en" | "english" => Ok(Self::En),
            _ => Err(format!("invalid language: {}", s)),
        }
    }
}

/// A value stored once per language, `{ "bn": .., "en": .. }` on the wire.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bilingual<T> {
    pub bn: T,
    pub en: T,
}

impl<T> Bilingual<T> {
    pub fn new(bn: T, en: T) -> Self {
        Self { bn, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Bn => &self.bn,
            Lang::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut T {
        match lang {
            Lang::Bn => &mut self.bn,
            Lang::En => &mut self.en,
        }
    }
}

impl Bilingual<String> {
    pub fn text(bn: &str, en: &str) -> Self {
        Self::new(bn.to_string(), en.to_string())
    }

    /// Both languages filled in (ignoring whitespace).
    pub fn is_complete(&self) -> bool {
        !self.bn.trim().is_empty() && !self.en.trim().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.bn.trim().is_empty() && self.en.trim().is_empty()
    }
}

impl<T> Bilingual<Vec<T>> {
    /// Append to both language lists so they stay aligned.
    pub fn push_pair(&mut self, bn: T, en: T) {
        self.bn.push(bn);
        self.en.push(en);
    }

    /// Remove index `idx` from both lists; false when out of range in either.
    pub fn remove_pair(&mut self, idx: usize) -> bool {
        if idx >= self.bn.len() || idx >= self.en.len() {
            return false;
        }
        self.bn.remove(idx);
        self.en.remove(idx);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_parses_loose_names() {
        assert_eq!("BN".parse::<Lang>(), Ok(Lang::Bn));
        assert_eq!("english".parse::<Lang>(), Ok(Lang::En));
        assert!("de".parse::<Lang>().is_err());
        assert_eq!(Lang::Bn.toggled(), Lang::En);
        assert_eq!(Lang::from_bangla(false), Lang::En);
    }

    #[test]
    fn bilingual_accepts_partial_documents() {
        let b: Bilingual<String> = serde_json::from_str(r#"{"en":"Hello"}"#).unwrap();
        assert_eq!(b.en, "Hello");
        assert_eq!(b.bn, "");
        assert!(!b.is_complete());
    }

    #[test]
    fn remove_pair_keeps_lists_aligned() {
        let mut list: Bilingual<Vec<String>> = Bilingual::default();
        list.push_pair("ক".into(), "a".into());
        list.push_pair("খ".into(), "b".into());

        assert!(list.remove_pair(0));
        assert_eq!(list.bn, vec!["খ".to_string()]);
        assert_eq!(list.en, vec!["b".to_string()]);
        assert!(!list.remove_pair(5));
    }
}
