//! Random forest regression over a small dense feature matrix.
//!
//! Each tree is a CART regression tree grown on a bootstrap sample until its
//! leaves are pure or hold a single sample. Every feature is considered at
//! every split. Split thresholds sit halfway between adjacent distinct
//! feature values. The forest predicts the mean of its trees.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::errors::EstimateError;

/// Forest hyperparameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub seed: u64,
    /// Nodes with fewer samples than this become leaves.
    pub min_samples_split: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 250,
            seed: 42,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, sample: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if sample[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    cost: f64,
}

/// A single CART regression tree.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    root: Node,
}

impl RegressionTree {
    fn grow(
        features: &[Vec<f64>],
        targets: &[f64],
        indices: Vec<usize>,
        min_samples_split: usize,
    ) -> Self {
        Self {
            root: build_node(features, targets, indices, min_samples_split),
        }
    }

    pub fn predict(&self, sample: &[f64]) -> f64 {
        self.root.predict(sample)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

fn mean_of(targets: &[f64], indices: &[usize]) -> f64 {
    indices.iter().map(|&i| targets[i]).sum::<f64>() / indices.len() as f64
}

fn sum_squared_error(sum: f64, sum_sq: f64, n: f64) -> f64 {
    (sum_sq - sum * sum / n).max(0.0)
}

fn build_node(
    features: &[Vec<f64>],
    targets: &[f64],
    indices: Vec<usize>,
    min_samples_split: usize,
) -> Node {
    let mean = mean_of(targets, &indices);
    if indices.len() < min_samples_split.max(2) {
        return Node::Leaf(mean);
    }

    let (sum, sum_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
        (s + targets[i], sq + targets[i] * targets[i])
    });
    let parent_cost = sum_squared_error(sum, sum_sq, indices.len() as f64);
    if parent_cost <= f64::EPSILON * sum_sq.max(1.0) {
        return Node::Leaf(mean);
    }

    let Some(best) = find_best_split(features, targets, &indices) else {
        return Node::Leaf(mean);
    };
    if best.cost >= parent_cost {
        return Node::Leaf(mean);
    }

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| features[i][best.feature] <= best.threshold);

    Node::Split {
        feature: best.feature,
        threshold: best.threshold,
        left: Box::new(build_node(features, targets, left, min_samples_split)),
        right: Box::new(build_node(features, targets, right, min_samples_split)),
    }
}

fn find_best_split(features: &[Vec<f64>], targets: &[f64], indices: &[usize]) -> Option<BestSplit> {
    let n_features = features[indices[0]].len();
    let total = indices.len();
    let mut best: Option<BestSplit> = None;

    for feature in 0..n_features {
        let mut order = indices.to_vec();
        order.sort_by(|&a, &b| features[a][feature].total_cmp(&features[b][feature]));

        let total_sum: f64 = order.iter().map(|&i| targets[i]).sum();
        let total_sq: f64 = order.iter().map(|&i| targets[i] * targets[i]).sum();

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for pos in 0..total - 1 {
            let y = targets[order[pos]];
            left_sum += y;
            left_sq += y * y;

            let here = features[order[pos]][feature];
            let next = features[order[pos + 1]][feature];
            if here == next {
                continue;
            }

            let n_left = (pos + 1) as f64;
            let n_right = (total - pos - 1) as f64;
            let cost = sum_squared_error(left_sum, left_sq, n_left)
                + sum_squared_error(total_sum - left_sum, total_sq - left_sq, n_right);

            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(BestSplit {
                    feature,
                    threshold: here + (next - here) / 2.0,
                    cost,
                });
            }
        }
    }

    best
}

/// Bagged ensemble of regression trees.
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    trees: Vec<RegressionTree>,
    n_features: usize,
}

impl RandomForestRegressor {
    /// Trains a forest on `features` (one row per sample) and `targets`.
    pub fn fit(
        features: &[Vec<f64>],
        targets: &[f64],
        config: &ForestConfig,
    ) -> Result<Self, EstimateError> {
        if features.is_empty() {
            return Err(EstimateError::invalid_training_data("no samples"));
        }
        if features.len() != targets.len() {
            return Err(EstimateError::invalid_training_data(format!(
                "{} feature rows but {} targets",
                features.len(),
                targets.len()
            )));
        }
        if config.n_estimators == 0 {
            return Err(EstimateError::invalid_training_data("n_estimators must be positive"));
        }
        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(EstimateError::invalid_training_data("ragged feature rows"));
        }
        if features.iter().flatten().chain(targets).any(|v| !v.is_finite()) {
            return Err(EstimateError::invalid_training_data("non-finite value"));
        }

        let n = features.len();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let trees = (0..config.n_estimators)
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::grow(features, targets, sample, config.min_samples_split)
            })
            .collect();

        Ok(Self { trees, n_features })
    }

    /// Mean prediction of all trees.
    pub fn predict(&self, sample: &[f64]) -> Result<f64, EstimateError> {
        if sample.len() != self.n_features {
            return Err(EstimateError::invalid_training_data(format!(
                "expected {} features, got {}",
                self.n_features,
                sample.len()
            )));
        }
        let total: f64 = self.trees.iter().map(|t| t.predict(sample)).sum();
        Ok(total / self.trees.len() as f64)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let features = (0..10).map(|i| vec![i as f64]).collect();
        let targets = (0..10).map(|i| if i < 5 { 10.0 } else { 20.0 }).collect();
        (features, targets)
    }

    fn small_config(n: usize) -> ForestConfig {
        ForestConfig {
            n_estimators: n,
            ..Default::default()
        }
    }

    #[test]
    fn default_config_matches_service_defaults() {
        let config = ForestConfig::default();
        assert_eq!(config.n_estimators, 250);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn single_tree_on_full_data_fits_exactly() {
        let (features, targets) = step_data();
        let tree = RegressionTree::grow(&features, &targets, (0..10).collect(), 2);
        assert_eq!(tree.predict(&[2.0]), 10.0);
        assert_eq!(tree.predict(&[7.0]), 20.0);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn tree_threshold_is_midpoint_between_values() {
        let (features, targets) = step_data();
        let tree = RegressionTree::grow(&features, &targets, (0..10).collect(), 2);
        assert_eq!(tree.predict(&[4.5]), 10.0);
        assert_eq!(tree.predict(&[4.51]), 20.0);
    }

    #[test]
    fn constant_targets_make_a_leaf() {
        let features = vec![vec![1.0], vec![2.0], vec![3.0]];
        let targets = vec![5.0, 5.0, 5.0];
        let tree = RegressionTree::grow(&features, &targets, vec![0, 1, 2], 2);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict(&[100.0]), 5.0);
    }

    #[test]
    fn forest_prediction_stays_within_target_range() {
        let (features, targets) = step_data();
        let forest = RandomForestRegressor::fit(&features, &targets, &small_config(50)).unwrap();
        assert_eq!(forest.n_trees(), 50);
        for x in 0..10 {
            let p = forest.predict(&[x as f64]).unwrap();
            assert!((10.0..=20.0).contains(&p), "prediction {} out of range", p);
        }
    }

    #[test]
    fn forest_separates_clear_step() {
        let (features, targets) = step_data();
        let forest = RandomForestRegressor::fit(&features, &targets, &small_config(100)).unwrap();
        assert!(forest.predict(&[0.0]).unwrap() < 12.0);
        assert!(forest.predict(&[9.0]).unwrap() > 18.0);
    }

    #[test]
    fn same_seed_gives_same_predictions() {
        let (features, targets) = step_data();
        let a = RandomForestRegressor::fit(&features, &targets, &small_config(20)).unwrap();
        let b = RandomForestRegressor::fit(&features, &targets, &small_config(20)).unwrap();
        for x in 0..10 {
            let sample = [x as f64 + 0.25];
            assert_eq!(a.predict(&sample).unwrap(), b.predict(&sample).unwrap());
        }
    }

    #[test]
    fn single_sample_predicts_its_target() {
        let forest =
            RandomForestRegressor::fit(&[vec![1.0, 2.0]], &[42.0], &small_config(5)).unwrap();
        assert_eq!(forest.predict(&[9.0, 9.0]).unwrap(), 42.0);
    }

    #[test]
    fn fit_rejects_bad_input() {
        let config = small_config(5);
        assert!(RandomForestRegressor::fit(&[], &[], &config).is_err());
        assert!(RandomForestRegressor::fit(&[vec![1.0]], &[1.0, 2.0], &config).is_err());
        assert!(RandomForestRegressor::fit(&[vec![1.0], vec![1.0, 2.0]], &[1.0, 2.0], &config).is_err());
        assert!(RandomForestRegressor::fit(&[vec![f64::NAN]], &[1.0], &config).is_err());
        assert!(RandomForestRegressor::fit(&[vec![1.0]], &[1.0], &small_config(0)).is_err());
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let forest = RandomForestRegressor::fit(&[vec![1.0, 2.0]], &[1.0], &small_config(1)).unwrap();
        assert!(forest.predict(&[1.0]).is_err());
    }
}
