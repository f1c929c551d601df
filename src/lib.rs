//! Weighted density clustering over dense dissimilarity matrices.
//!
//! `wdbscan` is a small library implementing a weighted generalization of
//! DBSCAN: a point's density is the total *weight* of its pairwise relations
//! within a fixed dissimilarity radius rather than their count. Inputs are a
//! precomputed n×n dissimilarity matrix and an optional n×n weight matrix;
//! output is one integer label per object, with explicit noise handling.
//!
//! The primary public API is under [`cluster`]:
//! - [`WeightedDbscan`]: the clustering engine (deterministic, single pass)
//! - [`Clustering`] / [`WeightedClusteringExt`]: the fit-predict traits
//!
//! Computing the dissimilarity matrix is the caller's job; this crate neither
//! loads data nor measures distances between feature vectors.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, WeightedClusteringExt, WeightedDbscan, NOISE};
pub use error::{Error, Result};
