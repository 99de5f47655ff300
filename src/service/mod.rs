//! Server side of the pathway call: validation, caching and generation.

pub mod generator;
pub mod routes;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::catalog::DegreeLevel;
use crate::error::ServiceError;
use crate::pathway::{PathwayResponse, PathwayResult};

pub use generator::{GeminiGenerator, PathwayGenerator, parse_pathway};
pub use routes::{PathwayRouteState, pathway_routes};

/// A generated pathway kept for repeat requests.
#[derive(Debug, Clone)]
pub struct CachedPathway {
    pub career: String,
    pub pathway: PathwayResult,
    pub created_at: DateTime<Utc>,
}

/// Cache key: career slug and starting degree.
type CacheKey = (String, DegreeLevel);

/// Career id used as the cache key: lowercase, spaces to hyphens, commas
/// dropped.
pub fn career_slug(career: &str) -> String {
    career.to_lowercase().replace(' ', "-").replace(',', "")
}

/// Answers pathway requests from the cache or the generator.
pub struct PathwayService {
    generator: Option<Arc<dyn PathwayGenerator>>,
    cache: RwLock<HashMap<CacheKey, CachedPathway>>,
}

impl PathwayService {
    /// Without a generator every request gets the fallback pathway.
    pub fn new(generator: Option<Arc<dyn PathwayGenerator>>) -> Self {
        if generator.is_none() {
            warn!("No pathway generator configured, serving fallback pathways");
        }
        Self {
            generator,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Validate raw request fields. Both are trimmed; a missing degree level
    /// means associate.
    pub fn validate(
        career: Option<&str>,
        degree_level: Option<&str>,
    ) -> Result<(String, DegreeLevel), ServiceError> {
        let career = career.unwrap_or_default().trim();
        if career.is_empty() {
            return Err(ServiceError::MissingCareer);
        }
        let degree = match degree_level.map(str::trim) {
            None => DegreeLevel::default(),
            Some(raw) => raw
                .parse()
                .map_err(|_| ServiceError::UnsupportedDegree(raw.to_string()))?,
        };
        Ok((career.to_string(), degree))
    }

    pub async fn get_or_generate(
        &self,
        career: &str,
        degree_level: DegreeLevel,
    ) -> PathwayResponse {
        let key = (career_slug(career), degree_level);

        if let Some(hit) = self.cache.read().await.get(&key) {
            info!(career_id = %key.0, degree = %degree_level, "Serving cached pathway");
            return PathwayResponse {
                pathway: Some(hit.pathway.clone()),
                cached: true,
                career: Some(career.to_string()),
            };
        }

        let pathway = match self.generate(career, degree_level).await {
            Some(pathway) => {
                self.cache.write().await.insert(
                    key,
                    CachedPathway {
                        career: career.to_string(),
                        pathway: pathway.clone(),
                        created_at: Utc::now(),
                    },
                );
                pathway
            }
            None => PathwayResult::server_fallback(career, degree_level),
        };

        PathwayResponse {
            pathway: Some(pathway),
            cached: false,
            career: Some(career.to_string()),
        }
    }

    pub async fn cached(&self, career: &str, degree_level: DegreeLevel) -> Option<CachedPathway> {
        self.cache
            .read()
            .await
            .get(&(career_slug(career), degree_level))
            .cloned()
    }

    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn generate(&self, career: &str, degree_level: DegreeLevel) -> Option<PathwayResult> {
        let generator = self.generator.as_ref()?;
        match generator.generate(career, degree_level).await {
            Ok(pathway) => {
                info!(career, degree = %degree_level, "Pathway generated");
                Some(pathway)
            }
            Err(e) => {
                warn!(career, degree = %degree_level, error = %e, "Pathway generation failed, using fallback");
                None
            }
        }
    }
}
