//! Tours: cyclic visiting orders over the locations of a matrix.
//!
//! A tour is a permutation of `0..n` stored as `Vec<usize>`. Position 0
//! is the anchor of the cycle: the swap move never touches it, so every
//! reported route begins (and ends) at the location stored there.

mod labels;

pub use labels::{location_label, LabelStyle};

use rand::Rng;

use crate::distance::DistanceMatrix;

/// Total cost of the closed cycle `tour[0] -> ... -> tour[n-1] -> tour[0]`.
///
/// Empty and single-location tours cost 0.
pub fn tour_cost(matrix: &DistanceMatrix, tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let open: f64 = tour.windows(2).map(|w| matrix.cost(w[0], w[1])).sum();
    open + matrix.cost(tour[tour.len() - 1], tour[0])
}

/// Returns a copy of `tour` with two positions in `1..len` swapped.
///
/// Both positions are drawn independently and may coincide, in which
/// case the copy equals the input. Tours shorter than 2 are returned
/// unchanged.
pub fn swap_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let mut candidate = tour.to_vec();
    if candidate.len() < 2 {
        return candidate;
    }
    let i = rng.random_range(1..candidate.len());
    let j = rng.random_range(1..candidate.len());
    candidate.swap(i, j);
    candidate
}

/// `true` if `tour` contains every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &loc in tour {
        if loc >= n || seen[loc] {
            return false;
        }
        seen[loc] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 4.0, 5.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![3.0, 5.0, 6.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_tour_cost_closes_cycle() {
        let dm = square();
        // 0->1 (1) + 1->2 (4) + 2->3 (6) + 3->0 (3)
        assert!((tour_cost(&dm, &[0, 1, 2, 3]) - 14.0).abs() < 1e-10);
        // 0->2 (2) + 2->1 (4) + 1->3 (5) + 3->0 (3)
        assert!((tour_cost(&dm, &[0, 2, 1, 3]) - 14.0).abs() < 1e-10);
        // 0->1 (1) + 1->3 (5) + 3->2 (6) + 2->0 (2)
        assert!((tour_cost(&dm, &[0, 1, 3, 2]) - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_asymmetric_uses_direction() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 2.0, 5.0, 0.0]).expect("valid");
        assert!((tour_cost(&dm, &[0, 1]) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_degenerate() {
        let dm = DistanceMatrix::from_data(1, vec![9.0]).expect("valid");
        assert_eq!(tour_cost(&dm, &[0]), 0.0);
        assert_eq!(tour_cost(&dm, &[]), 0.0);
    }

    #[test]
    fn test_swap_neighbor_keeps_anchor() {
        let mut rng = StdRng::seed_from_u64(7);
        let tour: Vec<usize> = (0..8).collect();
        for _ in 0..500 {
            let candidate = swap_neighbor(&tour, &mut rng);
            assert_eq!(candidate[0], 0);
            assert!(is_permutation(&candidate, 8));
            let moved = candidate.iter().zip(&tour).filter(|(a, b)| a != b).count();
            assert!(moved == 0 || moved == 2, "moved {moved} positions");
        }
    }

    #[test]
    fn test_swap_neighbor_short_tours() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(swap_neighbor(&[], &mut rng).is_empty());
        assert_eq!(swap_neighbor(&[0], &mut rng), vec![0]);
        assert_eq!(swap_neighbor(&[0, 1], &mut rng), vec![0, 1]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[0, 2, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 1, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}
