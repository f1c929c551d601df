//! Density-based clustering over dense dissimilarity matrices.
//!
//! ## Why a dissimilarity matrix?
//!
//! Most clustering libraries consume raw feature vectors and fix a metric
//! (usually Euclidean). Working from a precomputed n×n dissimilarity matrix
//! instead decouples the clustering from the metric: anything the caller can
//! tabulate pairwise — edit distance, 1 − cosine, DTW alignment cost — clusters
//! the same way. The cost is O(n²) memory and brute-force neighbor lookup;
//! there is no spatial index, by design.
//!
//! ## Weighted DBSCAN
//!
//! Classical DBSCAN calls a point *core* when at least `min_pts` points lie
//! within distance ε of it. The weighted generalization implemented here sums
//! pairwise *weights* over the ε-neighborhood instead of counting members, so
//! relations can count for more or less than one — or negatively. With
//! all-ones weights (the default) the two definitions coincide.
//!
//! Noise handling is configurable: outliers are either labeled with the
//! [`NOISE`] sentinel or promoted to singleton clusters of their own.
//!
//! ## Usage
//!
//! ```rust
//! use ndarray::Array2;
//! use wdbscan::{Clustering, WeightedDbscan, NOISE};
//!
//! // Two tight pairs and one outlier, as 1-D coordinates.
//! let coords = [0.0_f64, 0.5, 10.0, 10.5, 100.0];
//! let n = coords.len();
//! let d = Array2::from_shape_fn((n, n), |(i, j)| (coords[i] - coords[j]).abs());
//!
//! let labels = WeightedDbscan::new(1.0, 2.0).fit_predict(&d).unwrap();
//! assert_eq!(labels, vec![1, 1, 2, 2, NOISE]);
//! ```

mod traits;
mod wdbscan;

pub use traits::{Clustering, WeightedClusteringExt};
pub use wdbscan::{WeightedDbscan, NOISE};
