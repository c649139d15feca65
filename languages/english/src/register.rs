use crate::chance::Chance;

const INFORMAL_ABOVE: u64 = 500_000;
const FORMAL_ABOVE: u64 = 100_000;
const SPECIALIZED_BELOW: u64 = 10_000;

/// Coarse style classification derived from corpus frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageRegister {
    Informal,
    Formal,
    Technical,
    Archaic,
    Regional,
}

impl UsageRegister {
    const SPECIALIZED: [UsageRegister; 3] = [
        UsageRegister::Technical,
        UsageRegister::Archaic,
        UsageRegister::Regional,
    ];

    /// Very frequent words read as informal, frequent ones as formal;
    /// rare words get one of the specialized registers at random.
    pub fn classify(frequency: u64, chance: &mut impl Chance) -> Option<Self> {
        if frequency > INFORMAL_ABOVE {
            Some(UsageRegister::Informal)
        } else if frequency > FORMAL_ABOVE {
            Some(UsageRegister::Formal)
        } else if frequency < SPECIALIZED_BELOW {
            Some(Self::SPECIALIZED[chance.pick(Self::SPECIALIZED.len())])
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageRegister::Informal => "informal",
            UsageRegister::Formal => "formal",
            UsageRegister::Technical => "technical",
            UsageRegister::Archaic => "archaic",
            UsageRegister::Regional => "regional",
        }
    }

    /// Candidate usage notes for this register
    pub fn notes(&self) -> &'static [&'static str] {
        match self {
            UsageRegister::Formal => &[
                "This term is commonly used in formal or academic contexts.",
                "Frequently appears in professional writing and documentation.",
                "Preferred in business and official communications.",
            ],
            UsageRegister::Informal => &[
                "Common in everyday conversation and casual writing.",
                "Often used in informal settings and colloquial speech.",
                "Popular in social media and text messaging.",
            ],
            UsageRegister::Technical => &[
                "Specialized term used in technical or scientific contexts.",
                "Common in industry-specific documentation.",
                "Used primarily by professionals in the field.",
            ],
            UsageRegister::Archaic => &[
                "This word is considered archaic or outdated.",
                "Rarely used in modern English except in historical contexts.",
                "May be encountered in classic literature.",
            ],
            UsageRegister::Regional => &[
                "Usage varies by geographic region.",
                "More common in certain dialects or varieties of English.",
                "May have different meanings in different regions.",
            ],
        }
    }

    pub fn pick_note(&self, chance: &mut impl Chance) -> &'static str {
        let notes = self.notes();
        notes[chance.pick(notes.len())]
    }
}
