use unicode_normalization::UnicodeNormalization;

/// Normalize a raw search query before validation: trim, Unicode NFKC,
/// drop stray line breaks that OCR or paste can introduce.
pub fn clean_query(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_strips_line_breaks() {
        assert_eq!(clean_query("  running \n"), "running");
        assert_eq!(clean_query("run\r\nning"), "running");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(clean_query("   \t \n"), "");
        assert_eq!(clean_query(""), "");
    }

    #[test]
    fn applies_nfkc() {
        // fullwidth letters fold to ASCII under NFKC
        assert_eq!(clean_query("ｗｏｒｄ"), "word");
    }
}
