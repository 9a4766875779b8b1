use crate::FxHashMap;

pub type Bigrams = FxHashMap<(u8, u8), usize>;

pub fn bigrams<S: AsRef<str>>(words: &[S]) -> Bigrams {
    let mut result = FxHashMap::default();

    for word in words {
        let word = word.as_ref().as_bytes();
        for bigram in word.iter().copied().zip(word.iter().skip(1).copied()) {
            let count = result.entry(bigram).or_insert(0);
            *count += 1;
        }
    }

    result
}

/// The count of the rarest bigram in `word`. Single letters score `usize::MAX`.
pub fn fillability(word: &str, bigrams: &Bigrams) -> usize {
    let word = word.as_bytes();
    word.iter()
        .zip(word.iter().skip(1))
        .map(|(prev, curr)| *bigrams.get(&(*prev, *curr)).unwrap_or(&usize::MIN))
        .min()
        .unwrap_or(usize::MAX)
}
