use ndarray::Array2;

use crate::error::Result;

/// Common interface for hard clustering over a dissimilarity matrix.
pub trait Clustering {
    /// Fit and return one cluster label per object.
    ///
    /// `dissimilarities` must be square; labels are cluster ids starting at 1,
    /// with noise reported per the algorithm's configuration.
    fn fit_predict(&self, dissimilarities: &Array2<f64>) -> Result<Vec<i32>>;
}

/// Extended interface for algorithms that accept pairwise instance weights.
pub trait WeightedClusteringExt {
    /// Fit and predict using an explicit pairwise weight matrix.
    ///
    /// `weights` must have the same shape as `dissimilarities`. Entries may be
    /// negative or asymmetric.
    fn fit_predict_weighted(
        &self,
        dissimilarities: &Array2<f64>,
        weights: &Array2<f64>,
    ) -> Result<Vec<i32>>;

    /// Check if a label represents noise.
    fn is_noise(label: i32) -> bool {
        label == super::NOISE
    }
}
