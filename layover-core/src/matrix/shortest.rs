//! All-pairs shortest travel times (Floyd–Warshall).

use super::{AdjacencyMatrix, cell};

/// Minimum achievable travel time between every ordered pair of locations.
///
/// Built once per terminal by [`compute_shortest_paths`] and read-only
/// afterwards. For every `i`, `j` and `k`:
///
/// - `get(i, i) == Some(0)`;
/// - `get(i, j) <= adjacency.get(i, j)` whenever the direct edge exists;
/// - `get(i, j) <= get(i, k) + get(k, j)` whenever both legs are reachable.
///
/// Alongside the distances the matrix keeps a next-hop table so the walking
/// route behind each time can be recovered with [`ShortestPathMatrix::path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathMatrix {
    size: usize,
    minutes: Vec<Option<u64>>,
    next_hop: Vec<Option<usize>>,
}

/// Compute the shortest travel time between every pair of locations.
///
/// Runs in `O(n³)` time and `O(n²)` space over a copy of `adjacency`, which
/// is left untouched. Intermediate locations are considered one at a time in
/// the outer loop, so by the time location `via` is tried every distance
/// already reflects the best route through locations `0..via`.
///
/// # Examples
/// ```
/// use layover_core::{AdjacencyMatrix, compute_shortest_paths};
///
/// # fn main() -> Result<(), layover_core::MatrixError> {
/// let adjacency = AdjacencyMatrix::from_rows(&[
///     vec![Some(0), Some(10), Some(3)],
///     vec![None, Some(0), None],
///     vec![None, Some(4), Some(0)],
/// ])?;
/// let shortest = compute_shortest_paths(&adjacency);
/// assert_eq!(shortest.get(0, 1), Some(7));
/// assert_eq!(shortest.path(0, 1), Some(vec![0, 2, 1]));
/// assert_eq!(shortest.get(1, 0), None);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn compute_shortest_paths(adjacency: &AdjacencyMatrix) -> ShortestPathMatrix {
    let size = adjacency.len();
    let mut minutes: Vec<Option<u64>> = adjacency.rows().flatten().copied().collect();
    let mut next_hop: Vec<Option<usize>> = (0..size)
        .flat_map(|from| (0..size).map(move |to| (from, to)))
        .map(|(from, to)| adjacency.get(from, to).map(|_| to))
        .collect();

    for via in 0..size {
        for from in 0..size {
            let Some(leg_in) = read(&minutes, size, from, via) else {
                continue;
            };
            let hop_to_via = read(&next_hop, size, from, via);
            for to in 0..size {
                let Some(leg_out) = read(&minutes, size, via, to) else {
                    continue;
                };
                let Some(through) = leg_in.checked_add(leg_out) else {
                    continue;
                };
                let improves =
                    read(&minutes, size, from, to).is_none_or(|current| through < current);
                if improves {
                    write(&mut minutes, size, from, to, through);
                    if let Some(hop) = hop_to_via {
                        write(&mut next_hop, size, from, to, hop);
                    }
                }
            }
        }
    }

    ShortestPathMatrix {
        size,
        minutes,
        next_hop,
    }
}

fn read<T: Copy>(table: &[Option<T>], size: usize, from: usize, to: usize) -> Option<T> {
    cell(size, from, to)
        .and_then(|offset| table.get(offset))
        .copied()
        .flatten()
}

fn write<T>(table: &mut [Option<T>], size: usize, from: usize, to: usize, value: T) {
    if let Some(slot) = cell(size, from, to).and_then(|offset| table.get_mut(offset)) {
        *slot = Some(value);
    }
}

impl ShortestPathMatrix {
    /// Number of locations covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no locations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether `id` is a location covered by the matrix.
    #[must_use]
    pub const fn contains(&self, id: usize) -> bool {
        id < self.size
    }

    /// Shortest travel time from `from` to `to` in minutes.
    ///
    /// Returns `None` when `to` cannot be reached from `from` or either index
    /// is out of range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        read(&self.minutes, self.size, from, to)
    }

    /// Locations walked through on the shortest route from `from` to `to`,
    /// both ends included.
    ///
    /// Returns `None` when `to` is unreachable from `from`.
    #[must_use]
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.get(from, to)?;
        let mut route = vec![from];
        let mut current = from;
        while current != to {
            current = read(&self.next_hop, self.size, current, to)?;
            route.push(current);
            // A simple path never revisits a location.
            if route.len() > self.size {
                return None;
            }
        }
        Some(route)
    }
}
