/// Fuzzy closeness of a submitted answer to the expected one, as a 0-100
/// percentage.
///
/// A blank input never earns credit, even against another blank input.
/// Comparison ignores case and leading/trailing whitespace. Equal strings
/// score 100; anything else scores the Levenshtein distance scaled against
/// the longer string's length, rounded to the nearest integer.
pub fn text_similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let s1 = a.trim().to_lowercase();
    let s2 = b.trim().to_lowercase();

    // Also covers two whitespace-only inputs, which both trim to "".
    if s1 == s2 {
        return 100;
    }

    // Distance is computed over characters, not bytes. Paigham answers are
    // routinely Urdu, where a byte-level distance would overcount.
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    let (longer, shorter) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let distance = levenshtein(&longer, &shorter);

    (((longer.len() - distance) as f64 / longer.len() as f64) * 100.0).round() as u8
}

/// Single-row Levenshtein. Insert, delete and substitute all cost one.
fn levenshtein(longer: &[char], shorter: &[char]) -> usize {
    let mut costs: Vec<usize> = (0..=shorter.len()).collect();

    for (i, lc) in longer.iter().enumerate() {
        let mut diagonal = i;
        costs[0] = i + 1;

        for (j, sc) in shorter.iter().enumerate() {
            let above = costs[j + 1];
            costs[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + diagonal.min(above).min(costs[j])
            };
            diagonal = above;
        }
    }

    costs[shorter.len()]
}
