//! Weighted DBSCAN over a dense dissimilarity matrix.
//!
//! # The Algorithm
//!
//! Classical DBSCAN (Ester et al., 1996) declares a point "core" when its
//! epsilon-neighborhood contains at least `min_pts` points. The weighted
//! variant implemented here replaces the *count* with a *weight sum*: given a
//! pairwise weight matrix `W`, point `i` is core iff
//!
//! ```text
//! Σ_{j : D[i][j] ≤ ε} W[i][j]  ≥  μ
//! ```
//!
//! With all-ones weights this reduces exactly to classical DBSCAN, so the
//! unweighted entry point is a special case rather than a separate algorithm.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: maximum dissimilarity between two points to be neighbors.
//! - **Mu (μ)**: minimum neighborhood weight for a point to be "core".
//! - **Core point**: epsilon-neighborhood weighs at least μ.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Noise point**: neither core nor border.
//!
//! ## Inputs
//!
//! The engine consumes a fully materialized n×n dissimilarity matrix rather
//! than raw feature vectors, so it works for any dissimilarity the caller can
//! tabulate (edit distance, 1 − cosine, DTW, ...). Neighbor lookup is
//! brute-force over matrix rows; there is no spatial index.
//!
//! ## Weights
//!
//! Weights are *not* required to be positive or symmetric. A neighborhood
//! containing large negative weights may be unable to reach μ no matter how
//! many points it contains; that is accepted behavior, not an error.
//!
//! ## Determinism
//!
//! Cluster discovery order is fixed: the outer loop visits points in ascending
//! index order, neighborhoods are enumerated in ascending index order, and the
//! expansion worklist is FIFO. Repeated runs over the same inputs produce
//! identical label vectors, and ties at every level break toward the lower
//! index.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) neighborhood/weight-sum evaluations.
//! - **Space**: O(n) beyond the caller's matrices.

use std::collections::VecDeque;

use ndarray::Array2;

use super::traits::{Clustering, WeightedClusteringExt};
use crate::error::{Error, Result};

/// Label assigned to noise points when noise labeling is enabled.
pub const NOISE: i32 = -1;

// Internal sentinel: never assigned yet. Guaranteed to be absent from the
// returned vector; cluster ids start at 1 so 0 stays reserved.
const UNCLASSIFIED: i32 = 0;

/// Weighted DBSCAN clustering over a dense dissimilarity matrix.
///
/// See the [module docs](self) for the algorithm description.
#[derive(Debug, Clone)]
pub struct WeightedDbscan {
    /// Epsilon: maximum dissimilarity for neighborhood membership (`<=`).
    epsilon: f64,
    /// Mu: minimum neighborhood weight for core classification.
    mu: f64,
    /// Whether unclustered points are labeled [`NOISE`] (`true`) or promoted
    /// to singleton clusters of their own (`false`).
    noise: bool,
}

impl WeightedDbscan {
    /// Create a new weighted DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum dissimilarity between two points to be neighbors.
    /// * `mu` - Minimum neighborhood weight to form a dense region. With
    ///   all-ones weights this is the classical `min_pts` (self included).
    ///
    /// Noise labeling defaults to on; see [`with_noise`](Self::with_noise).
    pub fn new(epsilon: f64, mu: f64) -> Self {
        Self {
            epsilon,
            mu,
            noise: true,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set mu (minimum neighborhood weight).
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Choose how unclustered points are reported.
    ///
    /// With `noise = true` (the default) they are labeled [`NOISE`]. With
    /// `noise = false` each one becomes a singleton cluster with a fresh id
    /// strictly greater than every real cluster id, assigned in ascending
    /// index order. This is a relabeling pass only; nearby noise points are
    /// never merged with each other.
    pub fn with_noise(mut self, noise: bool) -> Self {
        self.noise = noise;
        self
    }

    /// Find all neighbors of `i` within epsilon, in ascending index order.
    ///
    /// `i` is its own neighbor whenever `D[i][i] <= epsilon`; for the usual
    /// zero diagonal and non-negative epsilon that is always the case. A
    /// negative epsilon legitimately produces an empty neighborhood.
    fn epsilon_neighborhood(&self, dissimilarities: &Array2<f64>, i: usize) -> Vec<usize> {
        dissimilarities
            .row(i)
            .iter()
            .enumerate()
            .filter(|(_, &d)| d <= self.epsilon)
            .map(|(j, _)| j)
            .collect()
    }

    /// Total weight of `i`'s relations to the given neighbor set.
    ///
    /// `None` weights mean implicit all-ones, so the sum collapses to the
    /// neighborhood cardinality and no ones matrix is ever materialized.
    fn neighborhood_weight(
        weights: Option<&Array2<f64>>,
        i: usize,
        neighborhood: &[usize],
    ) -> f64 {
        match weights {
            Some(w) => {
                let row = w.row(i);
                neighborhood.iter().map(|&j| row[j]).sum()
            }
            None => neighborhood.len() as f64,
        }
    }

    /// Validate shapes and parameters, then run the expansion loop.
    fn cluster(
        &self,
        dissimilarities: &Array2<f64>,
        weights: Option<&Array2<f64>>,
    ) -> Result<Vec<i32>> {
        let n = dissimilarities.nrows();
        if dissimilarities.ncols() != n {
            return Err(Error::NonSquareMatrix {
                rows: n,
                cols: dissimilarities.ncols(),
            });
        }
        if let Some(w) = weights {
            if w.dim() != dissimilarities.dim() {
                return Err(Error::DimensionMismatch {
                    expected: dissimilarities.dim(),
                    found: w.dim(),
                });
            }
        }
        if self.epsilon.is_nan() {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must not be NaN",
            });
        }
        if self.mu.is_nan() {
            return Err(Error::InvalidParameter {
                name: "mu",
                message: "must not be NaN",
            });
        }

        let mut status = vec![UNCLASSIFIED; n];
        let mut cluster_id: i32 = 1;
        let mut worklist: VecDeque<usize> = VecDeque::new();

        for i in 0..n {
            if status[i] != UNCLASSIFIED {
                continue;
            }

            let seeds = self.epsilon_neighborhood(dissimilarities, i);
            if Self::neighborhood_weight(weights, i, &seeds) < self.mu {
                // Not core: provisionally noise. A later cluster's expansion
                // may still reclaim i as a border point.
                status[i] = NOISE;
                continue;
            }

            // i is core: the whole seed neighborhood joins the cluster up
            // front, and everything but i itself awaits expansion. Seeds that
            // were previously noise are expanded too, matching the labeling
            // just applied.
            for &j in &seeds {
                status[j] = cluster_id;
            }
            worklist.clear();
            worklist.extend(seeds.iter().copied().filter(|&j| j != i));

            while let Some(j) = worklist.pop_front() {
                let eneighborhood = self.epsilon_neighborhood(dissimilarities, j);
                if Self::neighborhood_weight(weights, j, &eneighborhood) >= self.mu {
                    for &k in &eneighborhood {
                        // The status vector doubles as the "already queued"
                        // check: anything holding a cluster id was either
                        // expanded already or is in the worklist. Reclaimed
                        // noise points join the cluster as border points but
                        // are not expanded further.
                        if status[k] == UNCLASSIFIED {
                            worklist.push_back(k);
                            status[k] = cluster_id;
                        } else if status[k] == NOISE {
                            status[k] = cluster_id;
                        }
                    }
                }
            }

            cluster_id += 1;
        }

        if !self.noise {
            // Promote leftover noise to singleton clusters. Fresh ids start
            // past every assigned cluster id and follow ascending index order.
            for s in &mut status {
                if *s == NOISE {
                    *s = cluster_id;
                    cluster_id += 1;
                }
            }
        }

        Ok(status)
    }
}

impl Default for WeightedDbscan {
    fn default() -> Self {
        Self::new(0.5, 5.0)
    }
}

impl Clustering for WeightedDbscan {
    /// Cluster with implicit all-ones weights (classical DBSCAN semantics).
    fn fit_predict(&self, dissimilarities: &Array2<f64>) -> Result<Vec<i32>> {
        self.cluster(dissimilarities, None)
    }
}

impl WeightedClusteringExt for WeightedDbscan {
    fn fit_predict_weighted(
        &self,
        dissimilarities: &Array2<f64>,
        weights: &Array2<f64>,
    ) -> Result<Vec<i32>> {
        self.cluster(dissimilarities, Some(weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Dissimilarity matrix of absolute differences between 1-D coordinates.
    fn dist_1d(coords: &[f64]) -> Array2<f64> {
        let n = coords.len();
        Array2::from_shape_fn((n, n), |(i, j)| (coords[i] - coords[j]).abs())
    }

    #[test]
    fn test_two_clusters_1d() {
        // Two groups of three points each, far apart.
        let d = dist_1d(&[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);

        let labels = WeightedDbscan::new(1.5, 2.0).fit_predict(&d).unwrap();

        // Deterministic discovery order: the low-index group is cluster 1.
        assert_eq!(labels, vec![1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_isolated_point_is_noise() {
        // Point 2 is unreachable from everything else.
        let d = dist_1d(&[0.0, 1.0, 100.0]);

        let labels = WeightedDbscan::new(1.5, 2.0).fit_predict(&d).unwrap();
        assert_eq!(labels, vec![1, 1, NOISE]);
    }

    #[test]
    fn test_noise_promoted_to_singleton_cluster() {
        let d = dist_1d(&[0.0, 1.0, 100.0]);

        let labels = WeightedDbscan::new(1.5, 2.0)
            .with_noise(false)
            .fit_predict(&d)
            .unwrap();

        // Same partition as the noise=true run, with -1 replaced by a fresh
        // id past the last real cluster.
        assert_eq!(labels, vec![1, 1, 2]);
    }

    #[test]
    fn test_multiple_noise_points_get_distinct_ids() {
        let d = dist_1d(&[0.0, 50.0, 100.0, 150.0]);

        let labels = WeightedDbscan::new(1.0, 2.0)
            .with_noise(false)
            .fit_predict(&d)
            .unwrap();

        // No clusters form, so fresh ids start at 1, ascending by index.
        assert_eq!(labels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_noise_reclaimed_as_border_point() {
        // Point 0's own neighborhood {0, 1} weighs 2 < 3, so the outer loop
        // first marks it noise. Point 1 is core ({0, 1, 2} weighs 3) and
        // absorbs 0 into cluster 1.
        let d = dist_1d(&[0.0, 1.0, 2.0]);

        let labels = WeightedDbscan::new(1.0, 3.0).fit_predict(&d).unwrap();
        assert_eq!(labels, vec![1, 1, 1]);
    }

    #[test]
    fn test_weighted_core_test() {
        // Unweighted, all three points form one cluster at mu = 3. Downweigh
        // point 1's relations so only points 0 and 2 can be core.
        let d = dist_1d(&[0.0, 1.0, 2.0]);
        let w = array![
            [1.0, 1.0, 1.0],
            [0.1, 0.1, 0.1],
            [1.0, 1.0, 1.0],
        ];

        let model = WeightedDbscan::new(1.0, 3.0);
        assert_eq!(model.fit_predict(&d).unwrap(), vec![1, 1, 1]);

        // Point 0's neighborhood {0, 1} weighs 2.0 < 3.0, point 1's weighs
        // 0.3, point 2's {1, 2} weighs 2.0. Nothing is core.
        let labels = model.fit_predict_weighted(&d, &w).unwrap();
        assert_eq!(labels, vec![NOISE, NOISE, NOISE]);
    }

    #[test]
    fn test_negative_weights_force_all_noise() {
        // Every neighborhood weight sum is negative, so no point is ever
        // core regardless of epsilon.
        let d = dist_1d(&[0.0, 1.0, 2.0]);
        let w = Array2::from_elem((3, 3), -1.0);

        let labels = WeightedDbscan::new(f64::MAX, 2.0)
            .fit_predict_weighted(&d, &w)
            .unwrap();
        assert_eq!(labels, vec![NOISE, NOISE, NOISE]);

        let labels = WeightedDbscan::new(f64::MAX, 2.0)
            .with_noise(false)
            .fit_predict_weighted(&d, &w)
            .unwrap();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_asymmetric_weights_are_permitted() {
        // Row 0 carries enough weight to make point 0 core; row 1 does not
        // make point 1 core. Directed density is allowed by construction.
        let d = dist_1d(&[0.0, 1.0]);
        let w = array![
            [2.0, 2.0],
            [0.0, 0.0],
        ];

        let labels = WeightedDbscan::new(1.0, 3.0)
            .fit_predict_weighted(&d, &w)
            .unwrap();
        assert_eq!(labels, vec![1, 1]);
    }

    #[test]
    fn test_zero_epsilon_self_only_neighborhood() {
        // With eps = 0 each neighborhood is the point itself (zero diagonal),
        // so mu = 1 makes every point a singleton core.
        let d = dist_1d(&[0.0, 1.0, 2.0]);

        let labels = WeightedDbscan::new(0.0, 1.0).fit_predict(&d).unwrap();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_negative_epsilon_empty_neighborhoods() {
        // D[i][i] = 0 > epsilon, so even the point itself is excluded and
        // every weight sum is 0. Valid input, degenerate all-noise output.
        let d = dist_1d(&[0.0, 1.0, 2.0]);

        let labels = WeightedDbscan::new(-1.0, 1.0).fit_predict(&d).unwrap();
        assert_eq!(labels, vec![NOISE, NOISE, NOISE]);
    }

    #[test]
    fn test_chain_connects_into_one_cluster() {
        let coords: Vec<f64> = (0..10).map(|i| i as f64 * 0.3).collect();
        let d = dist_1d(&coords);

        let labels = WeightedDbscan::new(0.5, 2.0).fit_predict(&d).unwrap();
        assert_eq!(labels, vec![1; 10]);
    }

    #[test]
    fn test_empty_input() {
        let d = Array2::<f64>::zeros((0, 0));
        let labels = WeightedDbscan::new(0.5, 2.0).fit_predict(&d).unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let d = Array2::<f64>::zeros((2, 3));
        let err = WeightedDbscan::new(0.5, 2.0).fit_predict(&d).unwrap_err();
        assert!(matches!(err, Error::NonSquareMatrix { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_weight_shape_mismatch_rejected() {
        let d = Array2::<f64>::zeros((3, 3));
        let w = Array2::<f64>::ones((2, 2));
        let err = WeightedDbscan::new(0.5, 2.0)
            .fit_predict_weighted(&d, &w)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: (3, 3),
                found: (2, 2),
            }
        ));
    }

    #[test]
    fn test_nan_parameters_rejected() {
        let d = Array2::<f64>::zeros((2, 2));

        let err = WeightedDbscan::new(f64::NAN, 2.0)
            .fit_predict(&d)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "epsilon", .. }));

        let err = WeightedDbscan::new(0.5, f64::NAN)
            .fit_predict(&d)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "mu", .. }));
    }

    #[test]
    fn test_is_noise() {
        assert!(WeightedDbscan::is_noise(NOISE));
        assert!(!WeightedDbscan::is_noise(1));
    }
}
