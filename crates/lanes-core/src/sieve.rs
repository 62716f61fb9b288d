use lanes_model::Item;

/// Items split into the two scheduling buckets.
///
/// Both lists keep the relative order the items had on input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sieved {
    pub normal: Vec<Item>,
    pub slow: Vec<Item>,
}

impl Sieved {
    #[inline]
    pub fn len(&self) -> usize {
        self.normal.len() + self.slow.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.slow.is_empty()
    }
}

/// Separate `items` into slow and normal buckets.
///
/// An item is slow when any matcher occurs in it as a literal, case-sensitive substring.
/// No glob or regex interpretation is applied. With no matchers every item is normal.
pub fn sieve<M>(items: impl IntoIterator<Item = Item>, matchers: &[M]) -> Sieved
where
    M: AsRef<str>,
{
    let (slow, normal) = items
        .into_iter()
        .partition(|item| is_slow(item, matchers));
    Sieved { normal, slow }
}

/// Matchers that hit none of `items`, in matcher order.
pub(crate) fn inert_matchers<'m, M>(items: &[Item], matchers: &'m [M]) -> Vec<&'m str>
where
    M: AsRef<str>,
{
    matchers
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !items.iter().any(|item| item.contains(*m)))
        .collect()
}

#[inline]
fn is_slow<M: AsRef<str>>(item: &str, matchers: &[M]) -> bool {
    matchers.iter().any(|m| item.contains(m.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[&str]) -> Vec<Item> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn substring_match_fans_out() {
        let out = sieve(
            items(&[
                "v0.8/Foo1.test.ts",
                "v0.8/bar.test.ts",
                "v0.8/dev/eolpe/Foo.test.ts",
            ]),
            &["Foo"],
        );
        assert_eq!(out.slow, items(&["v0.8/Foo1.test.ts", "v0.8/dev/eolpe/Foo.test.ts"]));
        assert_eq!(out.normal, items(&["v0.8/bar.test.ts"]));
    }

    #[test]
    fn no_matchers_means_all_normal() {
        let input = items(&["a", "b", "c"]);
        let out = sieve(input.clone(), &[] as &[&str]);
        assert_eq!(out.normal, input);
        assert!(out.slow.is_empty());
    }

    #[test]
    fn empty_items() {
        let out = sieve(Vec::new(), &["Foo"]);
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn match_is_case_sensitive() {
        let out = sieve(items(&["v0.8/foo.test.ts", "v0.8/Foo.test.ts"]), &["Foo"]);
        assert_eq!(out.slow, items(&["v0.8/Foo.test.ts"]));
        assert_eq!(out.normal, items(&["v0.8/foo.test.ts"]));
    }

    #[test]
    fn matchers_are_literal() {
        let out = sieve(items(&["a/x.test.ts", "a/*.test.ts", "a/b.test.ts"]), &["*", "."]);
        // "." is contained in every item, "*" only in one.
        assert_eq!(out.slow.len(), 3);

        let out = sieve(items(&["a/x.test.ts", "a/*.test.ts"]), &["*.test"]);
        assert_eq!(out.slow, items(&["a/*.test.ts"]));
    }

    #[test]
    fn partition_is_stable() {
        let out = sieve(
            items(&["s1-slow", "n1", "s2-slow", "n2", "n3", "s3-slow"]),
            &["slow"],
        );
        assert_eq!(out.slow, items(&["s1-slow", "s2-slow", "s3-slow"]));
        assert_eq!(out.normal, items(&["n1", "n2", "n3"]));
    }

    #[test]
    fn stale_matcher_is_inert() {
        let input = items(&["v0.8/A.test.ts", "v0.8/B.test.ts"]);
        let out = sieve(input.clone(), &["Removed", "B"]);
        assert_eq!(out.slow, items(&["v0.8/B.test.ts"]));
        assert_eq!(inert_matchers(&input, &["Removed", "B"]), vec!["Removed"]);
    }
}
