/// Single-letter part-of-speech tags used by the frequency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,        // n
    Verb,        // v
    Adjective,   // j
    Adverb,      // r
    Pronoun,     // p
    Preposition, // i
    Conjunction, // c
}

impl PartOfSpeech {
    /// Parse a frequency-list tag; anything else (articles, "n/a", ...) is `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "j" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            "p" => Some(PartOfSpeech::Pronoun),
            "i" => Some(PartOfSpeech::Preposition),
            "c" => Some(PartOfSpeech::Conjunction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PartOfSpeech;

    #[test]
    fn known_tags_parse() {
        assert_eq!(PartOfSpeech::from_tag("j"), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_tag("p"), Some(PartOfSpeech::Pronoun));
        assert_eq!(PartOfSpeech::from_tag("i"), Some(PartOfSpeech::Preposition));
        assert_eq!(PartOfSpeech::from_tag("n/a"), None);
        assert_eq!(PartOfSpeech::from_tag("a"), None);
    }
}
