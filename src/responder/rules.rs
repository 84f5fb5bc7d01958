//! Rule bank
//!
//! An ordered list of (matcher, replies) pairs. The first rule whose matcher
//! accepts the lowercased utterance wins; the last rule always matches.

/// How a rule decides whether it applies to an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when any of the words appears as a whole word
    AnyWord(&'static [&'static str]),
    /// Matches when any of the fragments appears anywhere in the text
    Contains(&'static [&'static str]),
    /// Always matches
    Always,
}

impl Matcher {
    /// Evaluate against an already-lowercased utterance.
    pub fn is_match(&self, lowered: &str) -> bool {
        match self {
            Matcher::AnyWord(words) => lowered
                .split(|c: char| !c.is_alphanumeric() && c != '\'')
                .any(|token| words.contains(&token)),
            Matcher::Contains(fragments) => fragments.iter().any(|f| lowered.contains(f)),
            Matcher::Always => true,
        }
    }
}

/// A rule in the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short label used in logs
    pub name: &'static str,
    pub matcher: Matcher,
    /// Candidate replies, in preference order
    pub replies: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.matcher.is_match(lowered)
    }
}

/// Substring that marks an utterance as gratitude. Also consulted by the length guard.
pub const GRATITUDE_FRAGMENT: &str = "thank";

pub const RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        matcher: Matcher::AnyWord(&["hi", "hello", "hey", "hiya", "howdy", "yo"]),
        replies: &[
            "Hi! What's the vibe today?",
            "Hello hello! How's it going?",
            "Hey there! Anything fun happening?",
        ],
    },
    Rule {
        name: "gratitude",
        matcher: Matcher::Contains(&[GRATITUDE_FRAGMENT, "thx", "appreciate"]),
        replies: &[
            "Anytime! That's what I'm here for.",
            "Of course! I'm enjoying this chat.",
            "You're welcome! What else is going on?",
        ],
    },
    Rule {
        name: "wellbeing",
        matcher: Matcher::Contains(&["how are you", "how's it going", "how are things", "you ok"]),
        replies: &[
            "I'm doing great, thanks for asking! How about you?",
            "Pretty good over here. What about you?",
            "Can't complain! How's your day shaping up?",
        ],
    },
    Rule {
        name: "low_mood",
        matcher: Matcher::AnyWord(&["sad", "tired", "stressed", "bored", "lonely", "upset", "exhausted"]),
        replies: &[
            "Aw, that sounds rough. Want to talk about it?",
            "I'm sorry you're feeling that way. What's been going on?",
            "That's a lot to carry. Anything that might help a little?",
        ],
    },
    Rule {
        name: "high_mood",
        matcher: Matcher::AnyWord(&["happy", "great", "awesome", "excited", "amazing", "good"]),
        replies: &[
            "Love that energy! What's got you feeling good?",
            "That's awesome to hear! Tell me more.",
            "Nice! Sounds like things are going well.",
        ],
    },
    Rule {
        name: "identity",
        matcher: Matcher::Contains(&["your name", "who are you", "what are you"]),
        replies: &[
            "I'm just a friendly chat companion, here to keep you company.",
            "Think of me as a pal you can talk to anytime.",
        ],
    },
    Rule {
        name: "farewell",
        matcher: Matcher::AnyWord(&["bye", "goodbye", "goodnight", "cya", "later"]),
        replies: &[
            "Bye for now! Come back anytime.",
            "See you later! Take care.",
            "Catch you soon!",
        ],
    },
    Rule {
        name: "question",
        matcher: Matcher::Contains(&["?"]),
        replies: &[
            "Ooh, good question. What do you think?",
            "Hmm, I'm not totally sure. What's your take?",
            "That's a tricky one! What made you wonder?",
        ],
    },
    Rule {
        name: "fallback",
        matcher: Matcher::Always,
        replies: &[
            "Interesting! Tell me more.",
            "I hear you. What happened next?",
            "Oh really? How did that make you feel?",
            "Got it! What else is on your mind?",
        ],
    },
];

/// First rule in the bank that accepts the lowercased utterance.
pub fn match_rule(lowered: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matches(lowered))
        .unwrap_or(&RULES[RULES.len() - 1])
}
