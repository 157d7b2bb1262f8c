/// Every distinct recall value across all raw curves, highest first.
pub fn union_recall<'a, I>(recalls: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut all: Vec<f64> = recalls.into_iter().flatten().copied().collect();
    all.sort_by(|a, b| b.total_cmp(a));
    all.dedup();
    all
}
