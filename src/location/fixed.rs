use crate::coordinates::GeoCoordinate;

use super::{LocationError, LocationProvider};

/// Reports a configured position.
#[derive(Clone, Copy, Debug)]
pub struct FixedLocation {
    position: GeoCoordinate,
}

impl FixedLocation {
    pub fn new(position: GeoCoordinate) -> Self {
        Self { position }
    }
}

impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        if !self.position.is_valid() {
            return Err(LocationError::Unavailable(format!(
                "configured position out of range: {:?}",
                self.position
            )));
        }
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_position() {
        let provider = FixedLocation::new(GeoCoordinate::new(51.48, 0.0));
        let position = provider.current_position().await.unwrap();
        assert_eq!(position, GeoCoordinate::new(51.48, 0.0));
    }

    #[tokio::test]
    async fn rejects_invalid_position() {
        let provider = FixedLocation::new(GeoCoordinate { lat: 100.0, lon: 0.0 });
        assert!(matches!(
            provider.current_position().await,
            Err(LocationError::Unavailable(_))
        ));
    }
}
