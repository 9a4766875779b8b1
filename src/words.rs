use std::{collections::BTreeSet, path::Path};

use crate::error::PuzzleError;

/// Uppercases, trims and deduplicates, returning the words sorted.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Accepts either one word per line or a JSON array of strings.
pub fn parse_words(contents: &str) -> Result<Vec<String>, PuzzleError> {
    if contents.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(contents)?;
        return Ok(normalize_words(words));
    }
    Ok(normalize_words(contents.lines()))
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PuzzleError> {
    let contents = std::fs::read_to_string(path)?;
    let words = parse_words(&contents)?;
    log::debug!("loaded {} distinct words", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::{normalize_words, parse_words};
    use crate::error::PuzzleError;

    #[test]
    fn plain_text_works() {
        let words = parse_words(include_str!("../data/words0.txt")).unwrap();

        assert_eq!(words.len(), 10);
        assert_eq!(words[0], "EIGHT");
        assert!(words.contains(&String::from("SEVEN")));
    }

    #[test]
    fn json_works() {
        let words = parse_words(include_str!("../data/words1.json")).unwrap();

        assert_eq!(words.len(), 13);
        assert!(words.contains(&String::from("BIT")));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(parse_words("[\"cat\", 3]"), Err(PuzzleError::Json(_))));
    }

    #[test]
    fn normalize_dedups_and_skips_blanks() {
        assert_eq!(
            normalize_words(vec!["cat", " Cat ", "", "dog\r", "   "]),
            vec![String::from("CAT"), String::from("DOG")]
        );
    }
}
