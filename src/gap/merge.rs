use super::bucket::NgramBucket;
use crate::error::Result;
use crate::ngram::NgramCount;
use std::collections::HashMap;

/// Full outer join of two corpora's n-gram counts
///
/// Every n-gram present in either list yields exactly one bucket; the side
/// where it is absent gets a count of zero. Output order is unspecified.
///
/// # Example
/// ```
/// use ngram_gap::gap::merge;
/// use ngram_gap::ngram::NgramCount;
///
/// let counts1 = vec![NgramCount::new("hello", 2).unwrap()];
/// let counts2 = vec![NgramCount::new("hello", 1).unwrap(), NgramCount::new("you", 1).unwrap()];
///
/// let buckets = merge(&counts1, &counts2).unwrap();
/// assert_eq!(buckets.len(), 2);
/// ```
pub fn merge(counts1: &[NgramCount], counts2: &[NgramCount]) -> Result<Vec<NgramBucket>> {
    let mut buckets: HashMap<&str, NgramBucket> =
        HashMap::with_capacity(counts1.len() + counts2.len());

    for count in counts1 {
        buckets.insert(
            count.ngram(),
            NgramBucket::new(count.ngram(), count.count(), 0)?,
        );
    }

    for count in counts2 {
        let count1 = buckets.get(count.ngram()).map_or(0, NgramBucket::count1);
        buckets.insert(
            count.ngram(),
            NgramBucket::new(count.ngram(), count1, count.count())?,
        );
    }

    Ok(buckets.into_values().collect())
}
