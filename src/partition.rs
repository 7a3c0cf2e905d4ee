use crate::tree::Point;
use std::cmp::Ordering;

/// Result of one binary space partition step: the median entry that becomes
/// the node, and the entries falling on either side of its hyperplane.
pub(crate) struct Split {
    pub axis: usize,
    pub key: String,
    pub point: Point,
    pub left: Vec<(String, Point)>,
    pub right: Vec<(String, Point)>,
}

/// Partitions a set of at least two entries along its widest axis.
///
/// The split axis is the axis with the greatest span (max - min) over all
/// points; ties go to the lowest axis index. Entries are ordered by their
/// coordinate on that axis, with coordinate ties broken by key, so the same
/// input always produces the same split. The entry at index ⌊n/2⌋ of that
/// order becomes the median and belongs to neither side.
pub(crate) fn partition(mut entries: Vec<(String, Point)>) -> Split {
    debug_assert!(entries.len() >= 2, "partition requires at least two entries");

    // Split along the widest axis of the data so points spread out evenly
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for (_, point) in &entries {
        for k in 0..3 {
            if point[k] < min[k] {
                min[k] = point[k];
            }
            if point[k] > max[k] {
                max[k] = point[k];
            }
        }
    }

    let mut axis = 0;
    for k in 1..3 {
        if max[k] - min[k] > max[axis] - min[axis] {
            axis = k;
        }
    }

    entries.sort_unstable_by(|a, b| {
        a.1[axis]
            .partial_cmp(&b.1[axis])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    // The median partitions the remainder; split_off leaves [0, median] behind
    let median = entries.len() / 2;
    let right = entries.split_off(median + 1);
    let (key, point) = entries.swap_remove(median);

    Split {
        axis,
        key,
        point,
        left: entries,
        right,
    }
}
