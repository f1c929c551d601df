//! Weighted DBSCAN on a simple 2D dataset tabulated as a dissimilarity matrix.

use ndarray::Array2;
use wdbscan::{Clustering, WeightedClusteringExt, WeightedDbscan, NOISE};

fn main() {
    // Two well-separated clusters plus one outlier, in 2D.
    let points: Vec<[f64; 2]> = vec![
        // Cluster A (near origin)
        [0.0, 0.0],
        [0.1, 0.2],
        [0.2, 0.1],
        [-0.1, 0.1],
        // Cluster B (near (5, 5))
        [5.0, 5.0],
        [5.1, 4.9],
        [4.9, 5.1],
        [5.2, 5.2],
        // Outlier
        [20.0, 20.0],
    ];
    let n = points.len();

    // Euclidean dissimilarities; any pairwise dissimilarity works here.
    let dmatrix = Array2::from_shape_fn((n, n), |(i, j)| {
        let dx = points[i][0] - points[j][0];
        let dy = points[i][1] - points[j][1];
        (dx * dx + dy * dy).sqrt()
    });

    // --- Unweighted (classical DBSCAN counting) ---
    let model = WeightedDbscan::new(1.0, 2.0);
    let labels = model.fit_predict(&dmatrix).unwrap();
    println!("=== Weighted DBSCAN (eps=1.0, mu=2.0, all-ones weights) ===");
    print_labels(&points, &labels);

    // --- Noise promoted to singleton clusters ---
    let labels = WeightedDbscan::new(1.0, 2.0)
        .with_noise(false)
        .fit_predict(&dmatrix)
        .unwrap();
    println!("\n=== Same run with noise promoted to singletons ===");
    print_labels(&points, &labels);

    // --- Pairwise weights: cluster B downweighted below core threshold ---
    let weights = Array2::from_shape_fn((n, n), |(i, _)| if (4..8).contains(&i) { 0.4 } else { 1.0 });
    let labels = model.fit_predict_weighted(&dmatrix, &weights).unwrap();
    println!("\n=== Weighted run (cluster B rows weigh 0.4 per relation) ===");
    print_labels(&points, &labels);
}

fn print_labels(points: &[[f64; 2]], labels: &[i32]) {
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => {}",
            i, points[i][0], points[i][1], tag
        );
    }
}
