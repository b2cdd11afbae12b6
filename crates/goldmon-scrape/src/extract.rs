use regex::Regex;

/// Patterns tried in order of specificity; the page layout shifts
/// between the per-gram table and inline mentions, so later patterns
/// are deliberately looser.
const RATE_PATTERNS: [&str; 4] = [
    r"(?is)24K\s+Gold\s*/g.*?\u{20B9}\s*([\d,]+)",
    r"(?is)Kerala.*?24K.*?\u{20B9}\s*([\d,]+)",
    r"(?is)24K.*?\u{20B9}\s*([\d,]+)",
    r"(?is)24\s*Karat.*?\u{20B9}\s*([\d,]+)",
];

/// Locates the 24K gold rate in page markup. Returns `None` when no
/// pattern matches or the matched number does not parse.
pub fn extract_rate(page: &str) -> Option<f64> {
    for (index, pattern) in RATE_PATTERNS.iter().enumerate() {
        let re = Regex::new(pattern).expect("rate pattern is valid");
        if let Some(captures) = re.captures(page) {
            let raw = captures.get(1)?.as_str().replace(',', "");
            if let Ok(rate) = raw.parse::<f64>() {
                tracing::debug!(pattern = index + 1, rate, "rate matched");
                return Some(rate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::extract_rate;

    #[test]
    fn extracts_from_the_per_gram_table() {
        let page = "<td>24K Gold /g</td><td>\u{20B9} 6,245</td>";
        assert_eq!(extract_rate(page), Some(6245.0));
    }

    #[test]
    fn extracts_from_an_inline_mention() {
        let page = "Today's Kerala rate for 24K gold is \u{20B9}6120 per gram.";
        assert_eq!(extract_rate(page), Some(6120.0));
    }

    #[test]
    fn extracts_karat_spelling() {
        let page = "24 Karat gold: \u{20B9} 5,980";
        assert_eq!(extract_rate(page), Some(5980.0));
    }

    #[test]
    fn strips_thousands_separators() {
        let page = "24K \u{20B9} 10,05,000";
        assert_eq!(extract_rate(page), Some(1005000.0));
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(extract_rate("<html><body>Silver rates only</body></html>"), None);
        assert_eq!(extract_rate(""), None);
    }
}
