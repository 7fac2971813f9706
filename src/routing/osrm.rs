//! HTTP route provider for OSRM-compatible services.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::RouteProvider;
use crate::domain::GeoPoint;
use crate::error::{Error, Result};

/// Fetches driving polylines from an OSRM-compatible routing service.
///
/// The service endpoint and optional API key are caller-supplied
/// configuration; nothing here is a process-wide constant.
pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl OsrmRouter {
    /// Create a router against `base_url` (e.g.
    /// `https://router.project-osrm.org`).
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl RouteProvider for OsrmRouter {
    fn name(&self) -> &'static str {
        "osrm"
    }

    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>> {
        // OSRM takes lon,lat pairs.
        let path = format!(
            "route/v1/driving/{:.6},{:.6};{:.6},{:.6}",
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude()
        );
        let mut url = self.base_url.join(&path)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("overview", "full")
                .append_pair("geometries", "geojson");
            if let Some(key) = &self.api_key {
                query.append_pair("apikey", key);
            }
        }

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: RouteResponse = response.json().await?;

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| Error::Routing("response contained no routes".into()))?;

        route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| GeoPoint::try_new(lat, lon).map_err(Error::Domain))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}
