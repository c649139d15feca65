use crate::chance::Chance;
use crate::pos::PartOfSpeech;

const HIGH_FREQUENCY_ABOVE: u64 = 100_000;
const POS_SENTENCE_ABOVE: f64 = 0.5;
const MAX_GENERATED: usize = 2;

/// Fixed example sentence for a part of speech
pub fn pos_sentence(word: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Noun => format!("The {word} was clearly visible from here."),
        PartOfSpeech::Verb => format!("They decided to {word} the project immediately."),
        PartOfSpeech::Adjective => format!("It was a very {word} situation."),
        PartOfSpeech::Adverb => format!("She {word} completed the task."),
        PartOfSpeech::Pronoun => format!("This belongs to {word}."),
        PartOfSpeech::Preposition => format!("The book is {word} the table."),
        PartOfSpeech::Conjunction => format!("I'll go {word} you want to come."),
    }
}

pub fn high_frequency_sentence(word: &str) -> String {
    format!("'{}' is one of the most common words in English.", capitalize(word))
}

/// Up to two generated sentences; the part-of-speech one is included on a coin flip
pub fn generate_examples(
    word: &str,
    pos: Option<PartOfSpeech>,
    frequency: u64,
    chance: &mut impl Chance,
) -> Vec<String> {
    let mut examples = Vec::new();

    if frequency > HIGH_FREQUENCY_ABOVE {
        examples.push(high_frequency_sentence(word));
    }

    if let Some(pos) = pos {
        if chance.roll() > POS_SENTENCE_ABOVE {
            examples.push(pos_sentence(word, pos));
        }
    }

    examples.truncate(MAX_GENERATED);
    examples
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRoll(f64);

    impl Chance for FixedRoll {
        fn roll(&mut self) -> f64 {
            self.0
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn frequent_words_get_the_common_word_sentence() {
        let examples = generate_examples(
            "time",
            Some(PartOfSpeech::Noun),
            1_500_000,
            &mut FixedRoll(0.9),
        );
        assert_eq!(
            examples,
            [
                "'Time' is one of the most common words in English.",
                "The time was clearly visible from here.",
            ]
        );
    }

    #[test]
    fn pos_sentence_needs_a_winning_roll() {
        let lost = generate_examples("swim", Some(PartOfSpeech::Verb), 5_000, &mut FixedRoll(0.5));
        assert!(lost.is_empty());

        let won = generate_examples("swim", Some(PartOfSpeech::Verb), 5_000, &mut FixedRoll(0.51));
        assert_eq!(won, ["They decided to swim the project immediately."]);
    }

    #[test]
    fn unknown_pos_gets_no_template() {
        let examples = generate_examples("the", None, 50, &mut FixedRoll(0.99));
        assert!(examples.is_empty());
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
    }
}
