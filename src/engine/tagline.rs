//! Tagline generation.
//!
//! A short "pain phrase" is pulled out of the complaint text. Only phrases
//! that are short and free of question marks are allowed into the
//! pain-referencing templates; anything messier falls back to templates
//! that mention nothing but the category, which keeps raw forum text from
//! producing broken slogans.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;

use super::{capitalize, display_category};

/// Phrase used when nothing can be extracted from the pain text.
pub const DEFAULT_PHRASE: &str = "the hassle";

/// Phrases at or above this length are not used in pain templates.
const MAX_CLEAN_PHRASE_LEN: usize = 20;

/// Substring to phrase mapping, checked in order.
const KEYWORD_PHRASES: &[(&str, &str)] = &[
    ("back pain", "back pain"),
    ("back-breaking", "back strain"),
    ("wrist strain", "wrist strain"),
    ("clutter", "clutter"),
    ("cable", "cable chaos"),
    ("pet hair", "pet hair"),
    ("odor", "lingering odors"),
    ("jet lag", "jet lag"),
    ("posture", "bad posture"),
    ("wrinkled", "wrinkled clothes"),
    ("blue light", "blue light"),
    ("anxiety", "the worry"),
    ("noise", "noise"),
    ("tangle", "tangles"),
    ("mildew", "mildew"),
    ("moldy", "mold"),
    ("clog", "clogs"),
    ("leak", "leaks"),
];

/// Extraction rule: the first capture group is rendered into a phrase.
struct PhraseRule {
    pattern: &'static str,
    render: fn(&str) -> String,
}

const PHRASE_RULES: &[PhraseRule] = &[
    PhraseRule {
        pattern: r"^(?:constant |endless )?([a-z' ]+?) (?:causes?|makes?|ruins?|disturbs?|disrupts?|reduces?) ",
        render: |cap| cap.to_string(),
    },
    PhraseRule {
        pattern: r"^([a-z' ]+?) (?:is|are) (?:a |too |so )?(?:nightmare|unreliable|unflattering|inconsistent|limited|miserable|overpriced|bulky|slippery|confusing|jarring)\b",
        render: |cap| cap.to_string(),
    },
    PhraseRule {
        pattern: r"^(?:hard|impossible|difficult) to ([a-z]+)\b",
        render: |cap| format!("hard-to-{} gear", cap),
    },
    PhraseRule {
        pattern: r"^(?:cheap |gimmicky |poor )?((?:[a-z]+ )?[a-z]+) (?:breaks?|snaps?|jams?|slips?|go|goes|loses?|falls?|gets?|drops?)\b",
        render: |cap| format!("flimsy {}", cap),
    },
    PhraseRule {
        pattern: r"^(?:lack of|no good|too many) (.+)$",
        render: |cap| cap.to_string(),
    },
];

fn compiled_rules() -> &'static [(Regex, fn(&str) -> String)] {
    static RULES: OnceLock<Vec<(Regex, fn(&str) -> String)>> = OnceLock::new();
    RULES.get_or_init(|| {
        PHRASE_RULES
            .iter()
            .map(|rule| {
                let regex = Regex::new(rule.pattern).expect("phrase rule pattern is valid");
                (regex, rule.render)
            })
            .collect()
    })
}

/// A phrase naming the pain, and whether it is safe to put in a slogan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainPhrase {
    /// Phrase text.
    pub text: String,
    /// Whether the phrase reads naturally inside a template.
    pub clean: bool,
}

impl PainPhrase {
    fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let clean = text.chars().count() < MAX_CLEAN_PHRASE_LEN && !text.contains('?');
        Self { text, clean }
    }
}

/// Pull a short phrase out of a complaint.
///
/// Tries keyword containment first, then the ordered extraction rules
/// (first match wins), then [`DEFAULT_PHRASE`].
pub fn extract_pain_phrase(pain_text: &str) -> PainPhrase {
    let lower = pain_text.trim().to_lowercase();

    if let Some((_, phrase)) = KEYWORD_PHRASES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
    {
        return PainPhrase::new(*phrase);
    }

    for (regex, render) in compiled_rules() {
        if let Some(cap) = regex.captures(&lower).and_then(|c| c.get(1)) {
            let phrase = render(cap.as_str().trim());
            if !phrase.is_empty() {
                return PainPhrase::new(phrase);
            }
        }
    }

    PainPhrase::new(DEFAULT_PHRASE)
}

/// Inputs available to tagline templates.
#[derive(Debug, Clone)]
pub struct TaglineContext {
    /// Category as shown in prose.
    pub category: String,
    /// Pain phrase.
    pub phrase: String,
}

type TaglineTemplate = fn(&TaglineContext) -> String;

/// Templates that name the pain. Only fed clean phrases.
const PAIN_TEMPLATES: &[TaglineTemplate] = &[
    |c| format!("Say goodbye to {}", c.phrase),
    |c| format!("{}? Not anymore.", capitalize(&c.phrase)),
    |c| format!("Built to end {}", c.phrase),
    |c| format!("Finally free from {}", c.phrase),
    |c| format!("The cure for {}", c.phrase),
];

/// Templates parameterized only by category.
const CATEGORY_TEMPLATES: &[TaglineTemplate] = &[
    |c| format!("{} done right", capitalize(&c.category)),
    |c| format!("Finally, {} that just work", c.category),
    |c| format!("The {} upgrade you deserve", c.category),
    |c| format!("Rethinking {} from scratch", c.category),
    |c| format!("Smarter {} for modern life", c.category),
];

/// Compose a tagline for a concept solving `pain_text`.
///
/// With a clean pain phrase the pick is uniform over pain and category
/// templates together; otherwise over the category templates only.
pub fn generate_tagline<R: Rng + ?Sized>(pain_text: &str, category: &str, rng: &mut R) -> String {
    let phrase = extract_pain_phrase(pain_text);
    let context = TaglineContext {
        category: display_category(category).to_string(),
        phrase: phrase.text,
    };

    let pain_count = if phrase.clean { PAIN_TEMPLATES.len() } else { 0 };
    let index = rng.gen_range(0..pain_count + CATEGORY_TEMPLATES.len());
    let template = if index < pain_count {
        PAIN_TEMPLATES[index]
    } else {
        CATEGORY_TEMPLATES[index - pain_count]
    };
    template(&context)
}
