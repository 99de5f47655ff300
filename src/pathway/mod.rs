//! Educational pathways: request/response model, fallback roadmap, and the
//! gateway to the generation service.

pub mod gateway;
pub mod model;

pub use gateway::{HttpPathwayGateway, PathwayGateway, UnconfiguredGateway, create_gateway};
pub use model::{
    AssociatesSection, BachelorsSection, Credential, FALLBACK_ROADMAP, MastersSection,
    PathwayRequest, PathwayResponse, PathwayResult, RoadmapStage,
};
