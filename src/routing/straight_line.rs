//! Offline route provider.

use async_trait::async_trait;

use super::RouteProvider;
use crate::domain::GeoPoint;
use crate::error::Result;

/// Degenerate provider that draws a straight segment between the
/// endpoints. Default when no routing service is configured; also keeps
/// exports working without network access.
#[derive(Debug, Default, Clone)]
pub struct StraightLineRouter;

impl StraightLineRouter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteProvider for StraightLineRouter {
    fn name(&self) -> &'static str {
        "straight-line"
    }

    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>> {
        Ok(vec![from, to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_the_two_endpoints() {
        let from = GeoPoint::try_new(10.0, 20.0).unwrap();
        let to = GeoPoint::try_new(11.0, 21.0).unwrap();

        let polyline = StraightLineRouter::new().route(from, to).await.unwrap();

        assert_eq!(polyline, vec![from, to]);
    }
}
