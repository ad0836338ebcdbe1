//! CostEstimator - predicts a treatment cost for a disease.
//!
//! Features per catalog row are the label-encoded category, disease and
//! procedure plus the raw min/max cost. The model learns the midpoint of the
//! cost range.

use super::catalog::{CostCatalog, CostRecord};
use super::encoder::LabelEncoder;
use super::errors::EstimateError;
use super::forest::{ForestConfig, RandomForestRegressor};
use crate::domain::foundation::round_to;

/// A cost prediction for one disease.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    /// The catalog row the prediction was made from.
    pub record: CostRecord,
    /// Predicted cost in Rupiah, rounded to 2 decimals.
    pub predicted_cost: f64,
}

/// Label encoders for the three categorical columns.
#[derive(Debug, Clone)]
struct FeatureEncoders {
    categories: LabelEncoder,
    diseases: LabelEncoder,
    procedures: LabelEncoder,
}

impl FeatureEncoders {
    fn fit(catalog: &CostCatalog) -> Self {
        let records = catalog.records();
        Self {
            categories: LabelEncoder::fit(records.iter().map(|r| r.category.as_str())),
            diseases: LabelEncoder::fit(records.iter().map(|r| r.disease.as_str())),
            procedures: LabelEncoder::fit(records.iter().map(|r| r.procedure.as_str())),
        }
    }

    fn features_for(&self, record: &CostRecord) -> Result<Vec<f64>, EstimateError> {
        let encode = |encoder: &LabelEncoder, value: &str, column: &str| {
            encoder.transform(value).map(|i| i as f64).ok_or_else(|| {
                EstimateError::invalid_training_data(format!(
                    "value '{}' was not seen in column '{}'",
                    value, column
                ))
            })
        };

        Ok(vec![
            encode(&self.categories, &record.category, "category")?,
            encode(&self.diseases, &record.disease, "disease")?,
            encode(&self.procedures, &record.procedure, "procedure")?,
            record.min_cost,
            record.max_cost,
        ])
    }
}

/// Trained cost model together with the catalog it was trained on.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    catalog: CostCatalog,
    encoders: FeatureEncoders,
    forest: RandomForestRegressor,
}

impl CostEstimator {
    /// Fits the encoders and trains the forest on every catalog row.
    pub fn train(catalog: CostCatalog, config: &ForestConfig) -> Result<Self, EstimateError> {
        let encoders = FeatureEncoders::fit(&catalog);
        let features = catalog
            .records()
            .iter()
            .map(|r| encoders.features_for(r))
            .collect::<Result<Vec<_>, _>>()?;
        let targets: Vec<f64> = catalog.records().iter().map(CostRecord::midpoint).collect();

        let forest = RandomForestRegressor::fit(&features, &targets, config)?;

        tracing::info!(
            rows = catalog.len(),
            trees = forest.n_trees(),
            "Cost model trained"
        );

        Ok(Self {
            catalog,
            encoders,
            forest,
        })
    }

    /// Predicts the cost for `disease` from its first catalog row.
    pub fn estimate(&self, disease: &str) -> Result<CostEstimate, EstimateError> {
        let record = self
            .catalog
            .find_disease(disease)
            .ok_or_else(|| EstimateError::unknown_disease(disease))?;

        let features = self.encoders.features_for(record)?;
        let predicted = self.forest.predict(&features)?;

        Ok(CostEstimate {
            record: record.clone(),
            predicted_cost: round_to(predicted, 2),
        })
    }

    pub fn catalog(&self) -> &CostCatalog {
        &self.catalog
    }

    /// Number of trees in the trained forest.
    pub fn forest_size(&self) -> usize {
        self.forest.n_trees()
    }
}
