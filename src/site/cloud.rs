//! Word cloud ranking of the filtered search index.

use super::index::SearchIndex;

/// `(term, page count)` pairs, most linked first.
pub type WordCloud = Vec<(String, usize)>;

/// Rank terms by the number of pages they link to.
///
/// The sort is stable, so equally common terms keep index order.
pub fn rank(index: &SearchIndex) -> WordCloud {
    let mut cloud: WordCloud = index
        .iter()
        .map(|(term, links)| (term.clone(), links.len()))
        .collect();
    cloud.sort_by(|a, b| b.1.cmp(&a.1));
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending_and_stable() {
        let mut index = SearchIndex::new();
        for (term, links) in [("b", 1), ("a", 3), ("c", 1), ("d", 2)] {
            let entry = index.entry(term.to_owned()).or_default();
            for n in 0..links {
                entry.insert(format!("blog/{n}.html"));
            }
        }

        let cloud = rank(&index);
        assert_eq!(
            cloud,
            [
                ("a".to_owned(), 3),
                ("d".to_owned(), 2),
                ("b".to_owned(), 1),
                ("c".to_owned(), 1),
            ]
        );
        assert!(cloud.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&SearchIndex::new()).is_empty());
    }
}
