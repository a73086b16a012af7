/// Rust keywords that cannot be used as plain field identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that are not allowed even as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// Convert a directive or section name to PascalCase.
///
/// Words are split on any non-alphanumeric character, at lower-to-upper
/// transitions, and before the last capital of an uppercase run that is
/// followed by a lowercase letter (so `TCPCongestion` splits as `TCP`,
/// `Congestion`). Each word is capitalized and the rest lowercased.
///
/// An identifier that is already mixed case, starts uppercase and has no
/// separators is returned unchanged.
///
/// # Examples
/// ```
/// use unitd_core::to_pascal_case;
/// assert_eq!(to_pascal_case("on-boot-sec"), "OnBootSec");
/// assert_eq!(to_pascal_case("OnActiveSec"), "OnActiveSec"); // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let has_separator = s.chars().any(|c| !c.is_alphanumeric());
    let has_lowercase = s.chars().any(char::is_lowercase);
    let starts_uppercase = s.chars().next().is_some_and(char::is_uppercase);

    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    for word in split_words(s) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }
    result
}

/// Convert a directive name to snake_case.
///
/// Names that already contain `-` or `_` are lowercased with hyphens turned
/// into underscores. Otherwise an underscore is inserted at every
/// lower-to-upper transition and before the last capital of an uppercase run
/// followed by a lowercase letter.
///
/// # Examples
/// ```
/// use unitd_core::to_snake_case;
/// assert_eq!(to_snake_case("OnCalendar"), "on_calendar");
/// assert_eq!(to_snake_case("on-boot-sec"), "on_boot_sec");
/// assert_eq!(to_snake_case("USBFunctionStrings"), "usb_function_strings");
/// ```
pub fn to_snake_case(s: &str) -> String {
    if s.contains(['-', '_']) {
        return s.replace('-', "_").to_lowercase();
    }

    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_word_start(&chars, i) {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Split an identifier into words.
///
/// Non-alphanumeric characters separate words and are dropped. Case
/// transitions split as described on [`to_pascal_case`].
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && is_word_start(&chars, i) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Whether `chars[i]` starts a new word by case alone.
fn is_word_start(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    let prev = chars[i - 1];

    if prev.is_lowercase() && c.is_uppercase() {
        return true;
    }

    prev.is_uppercase()
        && c.is_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

/// Greedily wrap `text` into lines no wider than `width`.
///
/// Whitespace runs collapse to single spaces. A word longer than `width`
/// gets a line of its own rather than being split.
pub fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    if text.len() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Make `name` usable as a Rust identifier.
///
/// Keywords become raw identifiers (`type` → `r#type`); the few keywords that
/// cannot be raw get a trailing underscore.
pub fn escape_ident(name: &str) -> String {
    if RESERVED.contains(&name) {
        return format!("{name}_");
    }
    if KEYWORDS.contains(&name) {
        return format!("r#{name}");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{name}");
    }
    name.to_string()
}
