//! Query classification: turning a raw string into a match plan.
//!
//! Every non-empty query classifies into exactly one of four modes, checked
//! in precedence order:
//!
//! 1. **Article number** — `"25"`, `"Article 25"`, `"art. 25"`: the query
//!    names a provision by its number. Wins over everything, including
//!    explicit quoting.
//! 2. **Quoted phrase** — `"\"fair trial\""`: literal substring containment.
//! 3. **Single word** — one token, whole-word match.
//! 4. **All words** — two or more tokens, each required as a whole word,
//!    order irrelevant.
//!
//! Classification is total: any string, including unbalanced quotes and
//! regex metacharacters, lands in some mode. User text is passed through
//! [`regex::escape`] before being embedded in a pattern, so a query like
//! `"(a|b)*"` is matched literally instead of being interpreted.
//!
//! The mode is a tagged enum rather than a bag of optional fields; each
//! variant carries only the patterns its matcher needs, precompiled once
//! per search call.

use crate::normalize::Normalizer;
use regex::Regex;

/// The classified form of one query, built once per search call and
/// discarded at the end. Never mutated after construction.
#[derive(Debug)]
pub struct QueryDescriptor {
    /// The query exactly as the caller passed it.
    pub raw: String,
    /// The normalized form of the full query.
    pub normalized: String,
    pub mode: QueryMode,
}

/// One matching strategy with its precompiled predicates.
#[derive(Debug)]
pub enum QueryMode {
    /// The query names a provision by number.
    ArticleNumber {
        number: u32,
        /// Keyword form (`article 25`, `art. 25`) anywhere in searchable
        /// text. The trailing `\b` rejects longer numbers: digits are word
        /// characters, so `25\b` cannot match inside "258".
        text_pattern: Regex,
        /// Keyword form anchored to the start of the title.
        title_prefix: Regex,
    },
    /// Literal substring containment of a quoted phrase.
    Phrase { phrase: String },
    /// One token, matched as a whole word.
    Word { token: String, word: Regex },
    /// Two or more tokens, each matched as a whole word, ANDed.
    AllWords { tokens: Vec<String>, words: Vec<Regex> },
}

impl QueryMode {
    /// Short mode name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::ArticleNumber { .. } => "article-number",
            QueryMode::Phrase { .. } => "phrase",
            QueryMode::Word { .. } => "word",
            QueryMode::AllWords { .. } => "all-words",
        }
    }
}

/// Classify a raw query into a [`QueryDescriptor`].
///
/// Callers short-circuit blank queries before reaching this point (the
/// engine returns the browse prefix instead); classify itself still handles
/// any input without panicking.
pub fn classify(raw: &str, normalizer: &Normalizer) -> QueryDescriptor {
    let normalized = normalizer.normalize(raw);
    let unquoted = strip_quotes(raw.trim());

    // Article-number references win over everything, quoted or not.
    if let Some(number) = parse_article_number(&normalizer.normalize(unquoted)) {
        return QueryDescriptor {
            raw: raw.to_string(),
            normalized,
            mode: article_number_mode(number),
        };
    }

    if is_quoted(raw.trim()) {
        let phrase = normalizer.normalize(unquoted);
        return QueryDescriptor {
            raw: raw.to_string(),
            normalized,
            mode: QueryMode::Phrase { phrase },
        };
    }

    let tokens: Vec<String> = normalized
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let mode = match tokens.len() {
        0 | 1 => {
            let token = tokens.into_iter().next().unwrap_or_default();
            let word = whole_word(&token);
            QueryMode::Word { token, word }
        }
        _ => {
            let words = tokens.iter().map(|t| whole_word(t)).collect();
            QueryMode::AllWords { tokens, words }
        }
    };

    QueryDescriptor {
        raw: raw.to_string(),
        normalized,
        mode,
    }
}

/// Match `article 25` / `art. 25` / `25`, anchored to the whole string.
fn parse_article_number(normalized: &str) -> Option<u32> {
    let rest = if let Some(stripped) = normalized.strip_prefix("article") {
        stripped
    } else if let Some(stripped) = normalized.strip_prefix("art.") {
        stripped
    } else if let Some(stripped) = normalized.strip_prefix("art") {
        stripped
    } else {
        normalized
    };
    let digits = rest.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn article_number_mode(number: u32) -> QueryMode {
    let keyword_form = format!(r"\bart(?:icle)?\.?\s*{}\b", number);
    let anchored_form = format!(r"^art(?:icle)?\.?\s*{}\b", number);
    QueryMode::ArticleNumber {
        number,
        text_pattern: compile(&keyword_form),
        title_prefix: compile(&anchored_form),
    }
}

/// Whole-word pattern for one already-normalized token.
fn whole_word(token: &str) -> Regex {
    compile(&format!(r"\b{}\b", regex::escape(token)))
}

fn is_quoted(trimmed: &str) -> bool {
    trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"')
}

fn strip_quotes(trimmed: &str) -> &str {
    if is_quoted(trimmed) {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Compile a pattern built from escaped user text.
///
/// Escaped input always yields a syntactically valid pattern; the only
/// conceivable failure is the compiled-size limit on absurdly long queries,
/// which degrades to a never-matching predicate instead of a panic.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| never_matching())
}

#[allow(clippy::expect_used)]
fn never_matching() -> Regex {
    // End-of-text followed by a required literal can never match.
    Regex::new(r"$x").expect("static pattern")
}
