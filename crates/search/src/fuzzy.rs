//! Fuzzy matching algorithms.
//!
//! Suggestions use a normalized Levenshtein ratio,
//! `1 - distance / max(len_a, len_b)`, computed over lowercased and trimmed
//! strings. The candidate with the highest ratio wins; ties go to the
//! candidate seen first.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Case-insensitive similarity ratio in `[0, 1]`.
///
/// Two empty strings are identical (1.0).
///
/// # Example
/// ```
/// use boikot_search::similarity_ratio;
///
/// assert_eq!(similarity_ratio("Nestle", "nestle"), 1.0);
/// assert!(similarity_ratio("Nestel", "Nestle") > 0.6);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(&a, &b) as f64 / max_len as f64
}

/// Best fuzzy candidate for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    /// Candidate as given (original casing)
    pub candidate: &'a str,
    /// Position of the candidate in the input sequence
    pub index: usize,
    /// Similarity ratio in `[0, 1]`
    pub ratio: f64,
}

/// Find the candidate most similar to `query`.
///
/// Returns `None` only when `candidates` is empty.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    best_match_above(query, candidates, 0.0)
}

/// Like [`best_match`], ignoring candidates whose ratio is below `min_ratio`.
pub fn best_match_above<'a, I>(
    query: &str,
    candidates: I,
    min_ratio: f64,
) -> Option<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<FuzzyMatch<'a>> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let ratio = similarity_ratio(query, candidate);
        if ratio < min_ratio {
            continue;
        }
        if best.is_none_or(|b| ratio > b.ratio) {
            best = Some(FuzzyMatch { candidate, index, ratio });
        }
    }

    best
}
