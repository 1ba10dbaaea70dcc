//! Batch helpers for serializing many independent forms.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub fn map_items_parallel<T, R, F>(items: &[T], func: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(func).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn map_items_parallel<T, R, F>(items: &[T], func: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(func).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_map_items_preserves_order() {
        let items: Vec<u32> = (0..100).collect();
        let doubled = map_items_parallel(&items, |n| n * 2);
        assert_eq!(doubled, (0..100).map(|n| n * 2).collect::<Vec<u32>>());
    }
}
