/// Characters stripped from both sides of a comparison. Stripping happens
/// after whitespace collapsing, so punctuation sitting between two words
/// leaves a doubled space behind and "a . b" does not match "a b".
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')',
];

/// Canonical form used for spelling comparison: trimmed, lowercased,
/// internal whitespace runs collapsed to a single space, punctuation
/// removed. Total for any input; the empty string canonicalizes to itself.
pub fn normalize(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run {
            collapsed.push(' ');
            in_run = false;
        }
        collapsed.push(c);
    }
    collapsed
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Whether an attempt spells the target, tolerating case, stray punctuation,
/// and spacing variance. Internal spaces are collapsed rather than removed,
/// so "newyork" still fails against "New York".
pub fn is_correct(attempt: &str, target: &str) -> bool {
    normalize(attempt) == normalize(target)
}
