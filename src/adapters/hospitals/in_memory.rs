//! In-Memory Hospital Adapter
//!
//! Serves hospitals held in memory. Useful for testing and development.

use async_trait::async_trait;

use crate::domain::hospital::{Hospital, HospitalError};
use crate::ports::HospitalSource;

/// Hospital source returning a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHospitalSource {
    hospitals: Vec<Hospital>,
}

impl InMemoryHospitalSource {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }
}

#[async_trait]
impl HospitalSource for InMemoryHospitalSource {
    async fn load(&self) -> Result<Vec<Hospital>, HospitalError> {
        Ok(self.hospitals.clone())
    }
}
