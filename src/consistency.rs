//! Node and arc consistency over crossword domains.
//!
//! Node consistency filters each domain by the unary constraints of its
//! variable (length and any letters already in the grid). Arc consistency is
//! AC-3: an arc `(x, y)` is revised by dropping every word of `x` that has no
//! distinct word in `y` with the same letter at their shared cell, and any
//! change to `x` requeues the arcs pointing at it.

use std::collections::VecDeque;

use crate::{domain::Domains, parse::Variable, puzzle::Puzzle, FxHashMap, FxHashSet};

/// AC-3 emptied the domain of `variable`; nothing can be assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainWipeout {
    pub variable: Variable,
}

pub fn enforce_node_consistency(puzzle: &Puzzle, domains: &mut Domains) {
    for variable in puzzle.variables() {
        let removed = domains.retain(variable, |word| puzzle.fits(variable, word));
        if removed > 0 {
            log::trace!(
                "node consistency removed {} words from {}",
                removed,
                variable
            );
        }
    }
}

/// Makes `x` arc consistent with `y`. Returns whether `x`'s domain changed.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
    let (i, j) = match puzzle.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    // Letters y offers at the crossing, with how many words offer each and
    // one of them. A word cannot support an identical word.
    let mut offered: FxHashMap<u8, (usize, String)> = FxHashMap::default();
    for word in domains.iter(y) {
        if let Some(letter) = word.as_bytes().get(j) {
            offered
                .entry(*letter)
                .and_modify(|(count, _)| *count += 1)
                .or_insert_with(|| (1, word.clone()));
        }
    }

    let removed = domains.retain(x, |word| {
        match word.as_bytes().get(i).and_then(|letter| offered.get(letter)) {
            Some((count, only)) => *count > 1 || only != word,
            None => false,
        }
    });

    removed > 0
}

/// Runs AC-3 to a fixpoint, starting from `arcs` or from every arc in the
/// puzzle when `arcs` is `None`.
pub fn ac3(
    puzzle: &Puzzle,
    domains: &mut Domains,
    arcs: Option<Vec<(Variable, Variable)>>,
) -> Result<u64, DomainWipeout> {
    let mut queue: VecDeque<(Variable, Variable)> = VecDeque::new();
    let mut pending = FxHashSet::default();
    for arc in arcs.unwrap_or_else(|| puzzle.arcs()) {
        if pending.insert(arc) {
            queue.push_back(arc);
        }
    }

    let mut revisions: u64 = 0;
    while let Some((x, y)) = queue.pop_front() {
        pending.remove(&(x, y));
        if !revise(puzzle, domains, &x, &y) {
            continue;
        }
        revisions += 1;

        if domains.is_empty(&x) {
            log::debug!("domain of {} wiped out while revising against {}", x, y);
            return Err(DomainWipeout { variable: x });
        }
        for z in puzzle.neighbors(&x) {
            if *z != y && pending.insert((*z, x)) {
                queue.push_back((*z, x));
            }
        }
    }

    // Variables without neighbours are never revised, so check them too.
    if let Some(variable) = puzzle.variables().iter().find(|v| domains.is_empty(v)) {
        return Err(DomainWipeout {
            variable: *variable,
        });
    }

    Ok(revisions)
}

#[cfg(test)]
mod tests {
    use super::{ac3, enforce_node_consistency, revise, DomainWipeout};
    use crate::{domain::Domains, parse::Variable, puzzle::Puzzle, Crossword, Direction};

    fn pair(words: &[&str]) -> (Puzzle, Variable, Variable) {
        let a = Variable::new(0, 0, Direction::Across, 3);
        let b = Variable::new(0, 1, Direction::Down, 3);
        let puzzle = Puzzle::new(vec![a, b], vec![(a, b, (1, 0))], words.iter())
            .unwrap();
        (puzzle, a, b)
    }

    fn sorted(domains: &Domains, variable: &Variable) -> Vec<String> {
        let mut words: Vec<String> = domains.iter(variable).cloned().collect();
        words.sort();
        words
    }

    #[test]
    fn node_consistency_filters_by_length() {
        let crossword = Crossword::new(include_str!("../data/structure0.txt")).unwrap();
        let words = crate::words::parse_words(include_str!("../data/words0.txt")).unwrap();
        let puzzle = Puzzle::from_crossword(crossword, words).unwrap();
        let mut domains = Domains::new(&puzzle);

        enforce_node_consistency(&puzzle, &mut domains);

        for variable in puzzle.variables() {
            assert!(!domains.is_empty(variable));
            assert!(domains.iter(variable).all(|w| w.len() == variable.length()));
        }
        let down = Variable::new(0, 1, Direction::Down, 5);
        assert_eq!(sorted(&domains, &down), vec!["EIGHT", "SEVEN", "THREE"]);
    }

    #[test]
    fn node_consistency_is_idempotent() {
        let (puzzle, a, b) = pair(&["cat", "cars", "dog", "ox"]);
        let mut domains = Domains::new(&puzzle);

        enforce_node_consistency(&puzzle, &mut domains);
        let once = (sorted(&domains, &a), sorted(&domains, &b));
        enforce_node_consistency(&puzzle, &mut domains);
        let twice = (sorted(&domains, &a), sorted(&domains, &b));

        assert_eq!(once, twice);
        assert_eq!(once.0, vec!["CAT", "DOG"]);
    }

    #[test]
    fn node_consistency_respects_fixed_letters() {
        let crossword = Crossword::new("__T\n_##\n_##").unwrap();
        let puzzle = Puzzle::from_crossword(crossword, ["cat", "cot", "dog", "ant"]).unwrap();
        let mut domains = Domains::new(&puzzle);

        enforce_node_consistency(&puzzle, &mut domains);

        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 0, Direction::Down, 3);
        assert_eq!(sorted(&domains, &across), vec!["ANT", "CAT", "COT"]);
        assert_eq!(sorted(&domains, &down).len(), 4);
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let (puzzle, a, b) = pair(&["cat", "car", "dog", "art"]);
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        assert!(revise(&puzzle, &mut domains, &a, &b));
        assert_eq!(sorted(&domains, &a), vec!["CAR", "CAT"]);
        assert!(!revise(&puzzle, &mut domains, &a, &b));
    }

    #[test]
    fn revise_requires_distinct_support() {
        // Both start on the same cell, and AAA only matches itself there.
        let a = Variable::new(0, 0, Direction::Across, 3);
        let b = Variable::new(0, 0, Direction::Down, 3);
        let puzzle = Puzzle::new(vec![a, b], vec![(a, b, (0, 0))], ["aaa", "bcd"]).unwrap();
        let mut domains = Domains::new(&puzzle);
        domains.retain(&b, |w| w == "AAA");

        assert!(revise(&puzzle, &mut domains, &a, &b));
        assert!(domains.is_empty(&a));
    }

    #[test]
    fn revise_ignores_non_neighbors() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        let c = Variable::new(2, 0, Direction::Across, 3);
        let puzzle = Puzzle::new(vec![a, c], vec![], ["cat", "dog"]).unwrap();
        let mut domains = Domains::new(&puzzle);
        domains.retain(&c, |_| false);

        assert!(!revise(&puzzle, &mut domains, &a, &c));
        assert_eq!(domains.len(&a), 2);
    }

    #[test]
    fn ac3_is_sound() {
        let crossword = Crossword::new(include_str!("../data/structure1.txt")).unwrap();
        let words = crate::words::parse_words(include_str!("../data/words1.json")).unwrap();
        let puzzle = Puzzle::from_crossword(crossword, words).unwrap();
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        assert!(ac3(&puzzle, &mut domains, None).is_ok());

        for (x, y) in puzzle.arcs() {
            let (i, j) = puzzle.overlap(&x, &y).unwrap();
            for w in domains.iter(&x) {
                assert!(
                    domains
                        .iter(&y)
                        .any(|w2| w != w2 && w.as_bytes()[i] == w2.as_bytes()[j]),
                    "{} in {} has no support in {}",
                    w,
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn ac3_detects_mismatched_singletons() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        let b = Variable::new(0, 1, Direction::Down, 4);
        let puzzle = Puzzle::new(vec![a, b], vec![(a, b, (1, 0))], ["cat", "dogs"]).unwrap();
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        let result = ac3(&puzzle, &mut domains, None);

        assert!(matches!(result, Err(DomainWipeout { .. })));
        assert!(puzzle.variables().iter().any(|v| domains.is_empty(v)));
    }

    #[test]
    fn ac3_reports_isolated_empty_domain() {
        let a = Variable::new(0, 0, Direction::Across, 5);
        let puzzle = Puzzle::new(vec![a], vec![], ["cat"]).unwrap();
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);

        assert_eq!(
            ac3(&puzzle, &mut domains, None),
            Err(DomainWipeout { variable: a })
        );
    }

    #[test]
    fn ac3_from_explicit_arcs_propagates() {
        let (puzzle, a, b) = pair(&["cat", "car", "dog", "art"]);
        let mut domains = Domains::new(&puzzle);
        enforce_node_consistency(&puzzle, &mut domains);
        domains.retain(&a, |w| w == "CAT");

        assert!(ac3(&puzzle, &mut domains, Some(vec![(b, a)])).is_ok());
        assert_eq!(sorted(&domains, &b), vec!["ART"]);
    }
}
