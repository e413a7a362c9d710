use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::domain::{company::Company, filter::SortOrder};

/// Primary collation key: accents and case folded away, so "Émile" files under "e".
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent- and case-insensitive comparison with a tie-break on the raw names, so
/// "apple" and "Apple" sit next to each other the way a locale collator places them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Display order of `items` as indices into it.
///
/// The underlying slice is never reordered. `SortOrder::None` yields arrival order and
/// both directions are stable for equal names. Keys are computed once per item.
pub fn sort_indices(items: &[Company], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    if order == SortOrder::None {
        return indices;
    }

    let keys: Vec<String> = items.iter().map(|c| collation_key(&c.name)).collect();
    let compare = |a: usize, b: usize| {
        keys[a]
            .cmp(&keys[b])
            .then_with(|| items[a].name.cmp(&items[b].name))
    };
    match order {
        SortOrder::None => {}
        SortOrder::Asc => indices.sort_by(|&a, &b| compare(a, b)),
        SortOrder::Desc => indices.sort_by(|&a, &b| compare(b, a)),
    }
    indices
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn companies(names: &[&str]) -> Vec<Company> {
        names.iter().map(|name| Company::new(*name)).collect()
    }

    fn names(items: &[Company], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| items[i].name.clone()).collect()
    }

    #[test]
    fn test_none_keeps_arrival_order() {
        let items = companies(&["b", "a", "c"]);
        assert_eq!(sort_indices(&items, SortOrder::None), vec![0, 1, 2]);
    }

    #[test]
    fn test_asc_and_desc() {
        let items = companies(&["Globex", "acme", "Initech"]);
        assert_eq!(
            names(&items, &sort_indices(&items, SortOrder::Asc)),
            vec!["acme", "Globex", "Initech"]
        );
        assert_eq!(
            names(&items, &sort_indices(&items, SortOrder::Desc)),
            vec!["Initech", "Globex", "acme"]
        );
    }

    #[test]
    fn test_stable_for_duplicates() {
        // the same company delivered on two pages
        let items = vec![
            Company::new("Acme").city("Berlin"),
            Company::new("Zeta"),
            Company::new("Acme").city("Paris"),
        ];
        let asc = sort_indices(&items, SortOrder::Asc);
        assert_eq!(asc, vec![0, 2, 1]);
        let desc = sort_indices(&items, SortOrder::Desc);
        assert_eq!(desc, vec![1, 0, 2]);
    }

    #[test]
    fn test_does_not_mutate_and_toggle_back_restores_arrival() {
        let items = companies(&["c", "a", "b"]);
        let before = items.clone();
        let _ = sort_indices(&items, SortOrder::Asc);
        let _ = sort_indices(&items, SortOrder::Desc);
        assert_eq!(items, before);
        assert_eq!(sort_indices(&items, SortOrder::None), vec![0, 1, 2]);
    }

    #[rstest]
    #[case("Émile", "Zeta", Ordering::Less)]
    #[case("Ångström", "Bosch", Ordering::Less)]
    #[case("Zürich Re", "Zurich Insurance", Ordering::Greater)]
    #[case("émile", "Emile", Ordering::Greater)]
    #[case("Café", "Cafe", Ordering::Greater)]
    fn test_accents_sort_with_base_letter(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_names(a, b), expected);
    }

    #[test]
    fn test_accented_names_interleave() {
        let items = companies(&["Zeta", "Émile", "Anchor", "elan", "Öko"]);
        assert_eq!(
            names(&items, &sort_indices(&items, SortOrder::Asc)),
            vec!["Anchor", "elan", "Émile", "Öko", "Zeta"]
        );
    }

    #[test]
    fn test_collation_key() {
        assert_eq!(collation_key("Émile Ünal"), "emile unal");
    }

    #[test]
    fn test_case_tie_break() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Greater);
        assert_eq!(compare_names("Apple", "banana"), Ordering::Less);
    }
}
