//! Static reference tables for the relevance analyzer.
//!
//! Every table here is data, not logic: ordered lists of tagged
//! patterns that the signal extractors fold over. They are compiled
//! once on first use and behave as compile-time constants, so the
//! analyzer stays deterministic across calls and threads.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

use crate::types::Topic;

macro_rules! lexical_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("static pattern must compile"));
    };
}

// ── Negative-signal gate ───────────────────────────────────────────────────

/// Case-insensitive substrings that reject content outright.
pub const BLOCKED_KEYWORDS: &[&str] = &[
    "politics",
    "celebrity",
    "sports",
    "gossip",
    "horoscope",
    "lottery",
    "tabloid",
    "paparazzi",
];

/// Substring automaton over the blocklist.
pub static BLOCKED_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(BLOCKED_KEYWORDS)
        .expect("blocklist automaton must build")
});

/// Negative lexical patterns. The gate counts total occurrences across
/// title+content and blocks past the configured tolerance.
pub const NEGATIVE_PATTERNS: &[&str] = &[
    // Breaking-news phrasing
    r"(?i)\bbreaking(?:\s+news)?\b",
    r"(?i)\bjust in\b",
    r"(?i)\bdeveloping story\b",
    // Clickbait phrasing
    r"(?i)you won'?t believe",
    r"(?i)\bshocking\b",
    r"(?i)\bjaw[- ]dropping\b",
    r"(?i)\bgo(?:es|ne)? viral\b",
    r"(?i)number \d+ will",
    // Political/partisan terms
    r"(?i)\b(?:left|right)[- ]wing\b",
    r"(?i)\bpartisan\b",
    r"(?i)\bpolls? show\b",
    // Sports-score terms
    r"(?i)\bfinal score\b",
    r"(?i)\bseason opener\b",
    r"(?i)\b\d+\s*[-:]\s*\d+\s+(?:win|loss|victory|defeat)\b",
    // Listicle titles
    r"(?im)^\s*\d+\s+(?:things|reasons|ways|facts|celebs)\b",
    r"(?i)\btop \d+\b",
    // Social-media drama
    r"(?i)\bslams?\b",
    r"(?i)\bclaps? back\b",
    r"(?i)\bfeud\b",
    r"(?i)\bdrama\b",
];

pub static NEGATIVE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NEGATIVE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("negative pattern must compile"))
        .collect()
});

// ── Learning indicators ────────────────────────────────────────────────────

/// A tagged learning-signal pattern. Group tags surface in
/// `LearningIndicators::matched_groups` for downstream display.
pub struct LearningPattern {
    pub group: &'static str,
    pub pattern: &'static str,
}

/// Ordered list of learning-intent patterns. Order is stable so the
/// reported group tags are deterministic.
pub const LEARNING_PATTERNS: &[LearningPattern] = &[
    // Tutorial / how-to phrasing
    LearningPattern { group: "tutorial", pattern: r"(?i)\bhow to\b" },
    LearningPattern { group: "tutorial", pattern: r"(?i)\btutorial\b" },
    LearningPattern { group: "tutorial", pattern: r"(?i)\bguide to\b" },
    LearningPattern { group: "tutorial", pattern: r"(?i)\bgetting started\b" },
    LearningPattern { group: "tutorial", pattern: r"(?i)\bwalkthrough\b" },
    // Technical depth
    LearningPattern { group: "deep-dive", pattern: r"(?i)\bdeep dive\b" },
    LearningPattern { group: "deep-dive", pattern: r"(?i)\bunder the hood\b" },
    LearningPattern { group: "deep-dive", pattern: r"(?i)\binternals\b" },
    LearningPattern { group: "deep-dive", pattern: r"(?i)\barchitecture of\b" },
    // Insight / case study
    LearningPattern { group: "case-study", pattern: r"(?i)\bcase study\b" },
    LearningPattern { group: "case-study", pattern: r"(?i)\blessons? (?:learned|from)\b" },
    LearningPattern { group: "case-study", pattern: r"(?i)\bpost[- ]?mortem\b" },
    LearningPattern { group: "case-study", pattern: r"(?i)\bkey takeaways?\b" },
    // Future / innovation
    LearningPattern { group: "innovation", pattern: r"(?i)\bthe future of\b" },
    LearningPattern { group: "innovation", pattern: r"(?i)\bstate of the art\b" },
    LearningPattern { group: "innovation", pattern: r"(?i)\bbreakthrough\b" },
    // Skill development
    LearningPattern { group: "skill", pattern: r"(?i)\bbest practices?\b" },
    LearningPattern { group: "skill", pattern: r"(?i)\bcommon mistakes?\b" },
    LearningPattern { group: "skill", pattern: r"(?i)\bimprove your\b" },
    LearningPattern { group: "skill", pattern: r"(?i)\bmaster(?:ing)?\b" },
    // Problem solving
    LearningPattern { group: "problem-solving", pattern: r"(?i)\bhow (?:i|we) (?:solved|fixed|debugged)\b" },
    LearningPattern { group: "problem-solving", pattern: r"(?i)\btroubleshoot(?:ing)?\b" },
    LearningPattern { group: "problem-solving", pattern: r"(?i)\broot cause\b" },
    LearningPattern { group: "problem-solving", pattern: r"(?i)\bdebugging\b" },
    // Technical documentation
    LearningPattern { group: "documentation", pattern: r"(?i)\bdocumentation\b" },
    LearningPattern { group: "documentation", pattern: r"(?i)\bapi reference\b" },
    LearningPattern { group: "documentation", pattern: r"(?i)\bspecification\b" },
    LearningPattern { group: "documentation", pattern: r"(?i)\brelease notes\b" },
    // Business strategy
    LearningPattern { group: "strategy", pattern: r"(?i)\bbusiness model\b" },
    LearningPattern { group: "strategy", pattern: r"(?i)\bgo[- ]to[- ]market\b" },
    LearningPattern { group: "strategy", pattern: r"(?i)\bproduct[- ]market fit\b" },
    LearningPattern { group: "strategy", pattern: r"(?i)\bunit economics\b" },
    LearningPattern { group: "strategy", pattern: r"(?i)\bcompetitive advantage\b" },
    // Historical example
    LearningPattern { group: "history", pattern: r"(?i)\bthe (?:history|story) of\b" },
    LearningPattern { group: "history", pattern: r"(?i)\bthe rise (?:and fall )?of\b" },
    LearningPattern { group: "history", pattern: r"(?i)\bretrospective\b" },
    // Strategic thinking
    LearningPattern { group: "thinking", pattern: r"(?i)\bfirst principles\b" },
    LearningPattern { group: "thinking", pattern: r"(?i)\bmental models?\b" },
    LearningPattern { group: "thinking", pattern: r"(?i)\btrade[- ]?offs?\b" },
    LearningPattern { group: "thinking", pattern: r"(?i)\bframework for\b" },
];

pub static LEARNING_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    LEARNING_PATTERNS
        .iter()
        .map(|p| {
            (
                p.group,
                Regex::new(p.pattern).expect("learning pattern must compile"),
            )
        })
        .collect()
});

lexical_pattern!(
    QUESTION_FORMAT,
    r"(?i)\b(?:how|why|what|when|where|which|who)\b[^?\n]{0,80}\?"
);

lexical_pattern!(
    STEP_BY_STEP,
    r"(?im)(?:\bstep\s*\d+\b|\bstep[- ]by[- ]step\b|^\s*\d{1,2}\.\s+\w)"
);

lexical_pattern!(
    ACTIONABLE_VERBS,
    r"(?i)\b(?:implement|build|create|design|optimi[sz]e|configure|deploy|integrate|automate|measure|refactor|migrate|benchmark|validate)\b"
);

/// Whole-word technical vocabulary; occurrences feed term density.
lexical_pattern!(
    TECHNICAL_TERMS,
    r"(?i)\b(?:api|rest|graphql|grpc|oauth|https?|json|yaml|sql|nosql|async|await|closure|inheritance|polymorphism|recursion|algorithm|data structure|compiler|interpreter|runtime|kernel|container|kubernetes|docker|microservices?|latency|throughput|encryption|hashing|cache|queue|mutex|protocol|tcp|udp|dns|machine learning|neural network|implementation|refactoring|deployment|observability)\b"
);

// ── Content quality ────────────────────────────────────────────────────────

lexical_pattern!(
    CODE_MARKERS,
    r#"(?m)(?:```|<code>|\bfunction\s+\w+\s*\(|\bdef\s+\w+\s*\(|\bfn\s+\w+|\bclass\s+\w+\s*[{:(]|#include\s*<|\bconsole\.log\b)"#
);

lexical_pattern!(
    STRUCTURE_MARKERS,
    r"(?m)^\s*(?:#{1,6}\s+\S|[-*]\s+\S|\d{1,2}\.\s+\S)|<h[1-6][\s>]|<[uo]l[\s>]"
);

lexical_pattern!(
    REFERENCE_VOCAB,
    r"(?i)\b(?:sources?|references?|study|studies|according to|documentation|bibliography|citations?|et al)\b"
);

lexical_pattern!(HYPERLINKS, r"https?://");

// ── Topical relevance ──────────────────────────────────────────────────────

/// Curated keyword lists per topic. Content occurrences count +1,
/// title occurrences +2.
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Technology,
        &[
            "programming", "software", "developer", "code review", "algorithm",
            "database", "cloud", "api", "framework", "machine learning",
            "artificial intelligence", "open source", "devops", "compiler",
            "operating system", "security",
        ],
    ),
    (
        Topic::Science,
        &[
            "research", "experiment", "physics", "biology", "chemistry",
            "neuroscience", "climate", "genome", "quantum", "astronomy",
            "peer-reviewed", "hypothesis",
        ],
    ),
    (
        Topic::Education,
        &[
            "learning", "course", "curriculum", "teaching", "students",
            "lecture", "pedagogy", "certification", "textbook", "syllabus",
        ],
    ),
    (
        Topic::Business,
        &[
            "startup", "strategy", "revenue", "market", "leadership",
            "management", "investment", "economics", "negotiation", "pricing",
            "customers", "product launch",
        ],
    ),
    (
        Topic::FutureTrends,
        &[
            "future of", "forecast", "disruption", "innovation", "automation",
            "emerging technology", "next decade", "biotech", "trend",
        ],
    ),
];

/// One automaton over every topic keyword, with a parallel table
/// mapping pattern index back to its topic.
pub static TOPIC_MATCHER: LazyLock<(AhoCorasick, Vec<Topic>)> = LazyLock::new(|| {
    let mut keywords = Vec::new();
    let mut topics = Vec::new();
    for (topic, words) in TOPIC_KEYWORDS {
        for word in *words {
            keywords.push(*word);
            topics.push(*topic);
        }
    }
    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(&keywords)
        .expect("topic automaton must build");
    (matcher, topics)
});

// ── Source credibility ─────────────────────────────────────────────────────

/// Well-known high-quality publishers (substring match on hostname).
pub const HIGH_CREDIBILITY_DOMAINS: &[&str] = &[
    "arxiv.org",
    "nature.com",
    "science.org",
    "acm.org",
    "ieee.org",
    "mit.edu",
    "stanford.edu",
    "berkeley.edu",
    "github.com",
    "stackoverflow.com",
    "developer.mozilla.org",
    "docs.python.org",
    "rust-lang.org",
    "martinfowler.com",
    "hbr.org",
    "economist.com",
    "paulgraham.com",
    "stratechery.com",
];

/// MOOC and learning-platform domains (educational tier).
pub const EDUCATIONAL_PLATFORMS: &[&str] = &[
    "coursera.org",
    "edx.org",
    "udemy.com",
    "udacity.com",
    "khanacademy.org",
    "pluralsight.com",
    "brilliant.org",
    "ocw.mit.edu",
    "freecodecamp.org",
];

// ── Platform-specific heuristics ───────────────────────────────────────────

/// Educational video channels/creators (matched against title+content).
pub const EDUCATIONAL_CHANNELS: &[&str] = &[
    "3blue1brown",
    "computerphile",
    "numberphile",
    "veritasium",
    "crashcourse",
    "kurzgesagt",
    "mit opencourseware",
    "lex fridman",
    "two minute papers",
    "fireship",
    "ben eater",
];

/// Learning-oriented sub-communities on link aggregators (matched
/// against the URL path).
pub const LEARNING_COMMUNITIES: &[&str] = &[
    "r/programming",
    "r/machinelearning",
    "r/askscience",
    "r/compsci",
    "r/explainlikeimfive",
    "r/datascience",
    "r/rust",
    "r/experienceddevs",
];

lexical_pattern!(
    THREAD_MARKERS,
    r"(?i)(?:🧵|\b\d+/\d+\b|\bthread\b|\(cont(?:inued)?\.?\))"
);

lexical_pattern!(TRANSCRIPT_MARKERS, r"(?i)\b(?:transcript|captions?|subtitles?)\b");

lexical_pattern!(
    ANALYTICAL_MARKERS,
    r"(?i)\b(?:analysis|in-depth|detailed|nuance|trade-?offs?|benchmarks?)\b"
);
