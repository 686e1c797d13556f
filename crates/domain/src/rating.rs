//! Star-rating aggregation.

use crate::review::Stars;

/// Arithmetic mean of `stars`, or `None` when there is nothing to average.
#[must_use]
pub fn average<I>(stars: I) -> Option<f64>
where
    I: IntoIterator<Item = Stars>,
{
    let (sum, count) = stars
        .into_iter()
        .fold((0_u32, 0_u32), |(sum, count), star| {
            (sum + u32::from(star.get()), count + 1)
        });

    (count > 0).then(|| f64::from(sum) / f64::from(count))
}
