use graphql_fixtures_config::NamingConvention;

/// Apply a naming convention to a GraphQL type name.
///
/// PascalCase follows `change-case`: each underscore-separated segment is
/// split into words at case and letter/digit boundaries, and each word is
/// capitalized with the rest lowercased. Underscores are kept.
#[must_use]
pub fn convert_name(name: &str, convention: NamingConvention) -> String {
    match convention {
        NamingConvention::Keep => name.to_string(),
        NamingConvention::PascalCase => name
            .split('_')
            .map(pascal_case)
            .collect::<Vec<_>>()
            .join("_"),
    }
}

fn pascal_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for (index, word) in split_words(segment).iter().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if index > 0 && first.is_ascii_digit() {
            out.push('_');
            out.push(first);
        } else {
            out.extend(first.to_uppercase());
        }
        out.extend(chars.flat_map(char::to_lowercase));
    }
    out
}

/// Words of a segment. A boundary falls between a lowercase letter or digit
/// and an uppercase letter, and before the last capital of an acronym that
/// is followed by a lowercase letter (`HTMLParser` is `HTML`, `Parser`).
/// Characters other than letters and digits separate words.
fn split_words(segment: &str) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next = chars.get(i + 1).copied();
            let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            if (lower_to_upper || acronym_end) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
