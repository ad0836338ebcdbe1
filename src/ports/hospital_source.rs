//! Hospital source port.

use crate::domain::hospital::{Hospital, HospitalError};
use async_trait::async_trait;

/// Port for loading the hospitals served by nearby search.
///
/// Implementations apply the hospital selection rules themselves, so every
/// returned entry is a hospital with both reference points computed.
#[async_trait]
pub trait HospitalSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Hospital>, HospitalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn HospitalSource) {}
}
