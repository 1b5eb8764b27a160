use lexi_types::TextBlock;

/// Words worth offering in the candidate picker: recognized words with the
/// punctuation stripped, deduplicated, in recognition order. Falls back to
/// splitting the block's raw text when the OCR pass produced no word list.
pub fn candidate_words(block: &TextBlock) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    let raw: Vec<&str> = if block.words.is_empty() {
        block.text.split_whitespace().collect()
    } else {
        block.words.iter().map(|w| w.text.as_str()).collect()
    };

    for word in raw {
        let cleaned: String = word.chars().filter(|c| c.is_alphabetic()).collect();
        if cleaned.is_empty() || out.contains(&cleaned) {
            continue;
        }
        out.push(cleaned);
    }

    out
}

#[cfg(test)]
mod tests {
    use lexi_types::RecognizedWord;

    use super::*;

    fn word(text: &str) -> RecognizedWord {
        RecognizedWord {
            text: text.to_string(),
            confidence: None,
        }
    }

    #[test]
    fn strips_punctuation_and_dedupes() {
        let block = TextBlock {
            text: String::new(),
            words: vec![word("happy,"), word("happy"), word("birthday!"), word("42")],
        };
        assert_eq!(candidate_words(&block), vec!["happy", "birthday"]);
    }

    #[test]
    fn falls_back_to_raw_text() {
        let block = TextBlock {
            text: "the quick brown fox".to_string(),
            words: vec![],
        };
        assert_eq!(
            candidate_words(&block),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn empty_block_yields_no_candidates() {
        let block = TextBlock {
            text: "  ".to_string(),
            words: vec![word("!!"), word("123")],
        };
        assert!(candidate_words(&block).is_empty());
    }
}
