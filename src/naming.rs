//! Naming utilities
//!
//! Case conversion for identifiers and English noun pluralization.
//! Pure string functions, no state.

use convert_case::{Case, Casing};

/// Nouns with irregular plural forms (singular, plural), lowercase.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("shelf", "shelves"),
    ("wolf", "wolves"),
    ("thief", "thieves"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("datum", "data"),
    ("medium", "media"),
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("quiz", "quizzes"),
];

/// Nouns whose plural equals the singular, lowercase.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "data",
    "metadata",
    "feedback",
    "inventory",
    "staff",
];

/// `order_item`, `orderItem` → `OrderItem`
pub fn pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// `OrderItem`, `order_item` → `orderItem`
pub fn camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// `OrderItem`, `orderItem` → `order_item`
pub fn snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Pluralize the last word of an identifier, keeping the identifier's casing.
///
/// `OrderItem` → `OrderItems`, `category` → `categories`, `Person` → `People`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let split = last_word_start(word);
    let (head, last) = word.split_at(split);
    format!("{}{}", head, pluralize_word(last))
}

/// Byte offset where the last word of a camel/Pascal/snake identifier begins.
fn last_word_start(word: &str) -> usize {
    if let Some(pos) = word.rfind(['_', '-', ' ']) {
        return pos + 1;
    }
    let mut start = 0;
    let mut prev_lower = false;
    for (i, c) in word.char_indices() {
        if c.is_uppercase() && prev_lower {
            start = i;
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    start
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() {
        return word.to_string();
    }

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    let plural = if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{}es", word)
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    };

    if is_all_upper(word) {
        plural.to_uppercase()
    } else {
        plural
    }
}

fn ends_with_vowel_y(lower: &str) -> bool {
    ["ay", "ey", "iy", "oy", "uy"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

fn is_all_upper(word: &str) -> bool {
    word.len() > 1 && word.chars().all(|c| !c.is_lowercase())
}

/// Apply the casing of `original` (lower, Capitalized, UPPER) to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    if is_all_upper(original) {
        return replacement.to_uppercase();
    }
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if starts_upper {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}
