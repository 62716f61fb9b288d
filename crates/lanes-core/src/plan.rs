use lanes_model::{Item, NumOfSplits};
use tracing::{debug, instrument, warn};

use crate::{
    error::CoreError,
    sieve::{inert_matchers, sieve},
    split::simple_split,
};

/// One execution lane with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    index: usize,
    id: String,
    items: Vec<Item>,
}

impl Split {
    /// 1-based position among the lanes of its set.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Label such as `"4/10"` or `"v0.8 2/5"`.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items joined by single spaces, for passing as shell arguments.
    pub fn shell_args(&self) -> String {
        self.items.join(" ")
    }

    /// Items as a brace glob (`{a,b}`), the form coverage tooling expects.
    ///
    /// A single item is returned bare because `{a}` does not expand in most globbers.
    pub fn brace_glob(&self) -> String {
        match self.items.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            many => format!("{{{}}}", many.join(",")),
        }
    }
}

/// The ordered lanes produced by one scheduling request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSet {
    splits: Vec<Split>,
}

impl SplitSet {
    /// Label raw lanes, `lanes[i]` becoming the split with index `i + 1`.
    ///
    /// With a `label` the ids read `"<label> <n>/<N>"`, otherwise `"<n>/<N>"`.
    pub fn new(lanes: Vec<Vec<Item>>, label: Option<&str>) -> Self {
        let total = lanes.len();
        let splits = lanes
            .into_iter()
            .enumerate()
            .map(|(i, items)| {
                let index = i + 1;
                let id = match label {
                    Some(label) => format!("{label} {index}/{total}"),
                    None => format!("{index}/{total}"),
                };
                Split { index, id, items }
            })
            .collect();
        Self { splits }
    }

    #[inline]
    pub fn num_of_splits(&self) -> NumOfSplits {
        self.splits.len()
    }

    /// Total number of items over all lanes.
    pub fn item_count(&self) -> usize {
        self.splits.iter().map(Split::len).sum()
    }

    /// Lookup by 1-based index.
    pub fn get(&self, index: usize) -> Option<&Split> {
        index.checked_sub(1).and_then(|i| self.splits.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Split> {
        self.splits.iter()
    }

    pub fn into_lanes(self) -> Vec<Vec<Item>> {
        self.splits.into_iter().map(|s| s.items).collect()
    }

    /// Rewrite every item in place, keeping lane membership, order and ids.
    pub fn map_items<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(Item) -> Item,
    {
        for split in &mut self.splits {
            split.items = std::mem::take(&mut split.items).into_iter().map(&mut f).collect();
        }
        self
    }
}

impl<'a> IntoIterator for &'a SplitSet {
    type Item = &'a Split;
    type IntoIter = std::slice::Iter<'a, Split>;

    fn into_iter(self) -> Self::IntoIter {
        self.splits.iter()
    }
}

/// Sieve `items` with `matchers`, split them over `num_of_splits` lanes and label the result.
#[instrument(level = "debug", skip(items, matchers))]
pub fn plan<M>(
    items: Vec<Item>,
    matchers: &[M],
    num_of_splits: NumOfSplits,
    label: Option<&str>,
) -> Result<SplitSet, CoreError>
where
    M: AsRef<str>,
{
    if num_of_splits == 0 {
        return Err(CoreError::InvalidSplitCount(num_of_splits));
    }

    for matcher in inert_matchers(&items, matchers) {
        warn!(matcher, "slow test matcher does not match any item");
    }

    let sieved = sieve(items, matchers);
    debug!(
        slow = sieved.slow.len(),
        normal = sieved.normal.len(),
        num_of_splits,
        "sieved items"
    );

    let lanes = simple_split(sieved.normal, sieved.slow, num_of_splits)?;
    Ok(SplitSet::new(lanes, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[&str]) -> Vec<Item> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ids_without_label() {
        let set = plan(items(&["a", "b", "c"]), &[] as &[&str], 2, None).unwrap();
        let ids: Vec<_> = set.iter().map(Split::id).collect();
        assert_eq!(ids, vec!["1/2", "2/2"]);
        assert_eq!(set.get(1).unwrap().items(), items(&["a", "c"]).as_slice());
        assert_eq!(set.get(2).unwrap().index(), 2);
        assert!(set.get(0).is_none());
        assert!(set.get(3).is_none());
    }

    #[test]
    fn ids_with_label() {
        let set = plan(Vec::new(), &["Foo"], 3, Some("v0.8")).unwrap();
        let ids: Vec<_> = set.iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["v0.8 1/3", "v0.8 2/3", "v0.8 3/3"]);
        assert_eq!(set.item_count(), 0);
    }

    #[test]
    fn slow_items_are_spread() {
        let set = plan(
            items(&[
                "v0.8/Foo1.test.ts",
                "v0.8/a.test.ts",
                "v0.8/b.test.ts",
                "v0.8/dev/Foo.test.ts",
            ]),
            &["Foo"],
            2,
            Some("v0.8"),
        )
        .unwrap();

        let lanes = set.into_lanes();
        assert_eq!(
            lanes,
            vec![
                items(&["v0.8/Foo1.test.ts", "v0.8/a.test.ts"]),
                items(&["v0.8/dev/Foo.test.ts", "v0.8/b.test.ts"]),
            ]
        );
    }

    #[test]
    fn map_items_keeps_labels() {
        let set = plan(items(&["a", "b", "c"]), &["c"], 2, Some("v0.8"))
            .unwrap()
            .map_items(|item| format!("test/{item}"));

        let first = set.get(1).unwrap();
        assert_eq!(first.id(), "v0.8 1/2");
        assert_eq!(first.items(), items(&["test/c", "test/b"]).as_slice());
        assert_eq!(set.get(2).unwrap().items(), items(&["test/a"]).as_slice());
    }

    #[test]
    fn rejects_zero_splits() {
        let err = plan(items(&["a"]), &["a"], 0, None).unwrap_err();
        assert_eq!(err, CoreError::InvalidSplitCount(0));
    }

    #[test]
    fn rendering() {
        let set = SplitSet::new(
            vec![items(&["t/A.test.ts", "t/B.test.ts"]), items(&["t/C.test.ts"]), Vec::new()],
            None,
        );
        let mut it = set.iter();

        let first = it.next().unwrap();
        assert_eq!(first.shell_args(), "t/A.test.ts t/B.test.ts");
        assert_eq!(first.brace_glob(), "{t/A.test.ts,t/B.test.ts}");

        let second = it.next().unwrap();
        assert_eq!(second.shell_args(), "t/C.test.ts");
        assert_eq!(second.brace_glob(), "t/C.test.ts");

        let third = it.next().unwrap();
        assert!(third.is_empty());
        assert_eq!(third.shell_args(), "");
        assert_eq!(third.brace_glob(), "");
    }
}
