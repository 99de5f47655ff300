//! Career pathway wizard: choose a career, pick a degree, see the roadmap.
//!
//! Entering the roadmap step calls the pathway gateway. The session lives
//! behind an `Arc<RwLock<..>>` so the shell can close or step back while
//! that call is suspended. Each request is tagged with the session's
//! generation and its result is dropped if the generation has moved on.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::DegreeLevel;
use crate::error::WizardError;
use crate::pathway::{FALLBACK_ROADMAP, PathwayGateway, PathwayRequest, PathwayResult, RoadmapStage};

use super::sequencer::{Advance, Retreat, StepSequencer, WizardStep};

const FLOW: &str = "career wizard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerStep {
    ChooseCareer,
    SelectDegree,
    Roadmap,
}

impl WizardStep for CareerStep {
    const ORDER: &'static [Self] = &[Self::ChooseCareer, Self::SelectDegree, Self::Roadmap];
}

impl std::fmt::Display for CareerStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ChooseCareer => "choose-career",
            Self::SelectDegree => "select-degree",
            Self::Roadmap => "roadmap",
        };
        write!(f, "{s}")
    }
}

/// What the roadmap step shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "pathway", rename_all = "snake_case")]
pub enum RoadmapView {
    Generated(PathwayResult),
    /// The fixed three-stage roadmap. Any fetch error is in `error`.
    Fallback,
}

impl RoadmapView {
    pub fn pathway(&self) -> Option<&PathwayResult> {
        match self {
            Self::Generated(p) => Some(p),
            Self::Fallback => None,
        }
    }

    pub fn fallback_stages(&self) -> Option<&'static [RoadmapStage]> {
        match self {
            Self::Generated(_) => None,
            Self::Fallback => Some(&FALLBACK_ROADMAP),
        }
    }
}

/// Read-only copy of the wizard state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSnapshot {
    pub step: CareerStep,
    pub career: String,
    pub degree: Option<DegreeLevel>,
    pub roadmap: Option<RoadmapView>,
    pub loading: bool,
    pub error: Option<String>,
    pub can_advance: bool,
    pub closed: bool,
}

#[derive(Debug, Default)]
struct CareerSession {
    seq: StepSequencer<CareerStep>,
    career: String,
    degree: Option<DegreeLevel>,
    roadmap: Option<RoadmapView>,
    loading: bool,
    error: Option<String>,
    /// Bumped on every request, retreat-while-loading and close.
    generation: u64,
}

impl CareerSession {
    fn can_advance(&self) -> bool {
        if self.seq.is_closed() || self.loading {
            return false;
        }
        match self.seq.current() {
            CareerStep::ChooseCareer => !self.career.trim().is_empty(),
            CareerStep::SelectDegree => {
                self.degree.is_some() && !self.career.trim().is_empty()
            }
            CareerStep::Roadmap => false,
        }
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.seq.is_closed() {
            return Err(WizardError::Closed { flow: FLOW });
        }
        if self.loading {
            return Err(WizardError::Busy { flow: FLOW });
        }
        // The roadmap step only renders; step back to change its inputs.
        if self.seq.current() == CareerStep::Roadmap {
            return Err(WizardError::ReadOnlyStep {
                flow: FLOW,
                step: self.seq.current().to_string(),
            });
        }
        Ok(())
    }

    fn invalidate_roadmap(&mut self) {
        self.roadmap = None;
        self.error = None;
    }

    fn teardown(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
        self.seq.close();
    }

    fn snapshot(&self) -> CareerSnapshot {
        CareerSnapshot {
            step: self.seq.current(),
            career: self.career.clone(),
            degree: self.degree,
            roadmap: self.roadmap.clone(),
            loading: self.loading,
            error: self.error.clone(),
            can_advance: self.can_advance(),
            closed: self.seq.is_closed(),
        }
    }
}

/// Handle to one career wizard session. Clones share the session.
#[derive(Clone)]
pub struct CareerWizard {
    id: Uuid,
    session: Arc<RwLock<CareerSession>>,
    gateway: Arc<dyn PathwayGateway>,
}

impl CareerWizard {
    /// Open a wizard, pre-filling the career with the visitor's search text.
    pub fn open(gateway: Arc<dyn PathwayGateway>, initial_search: Option<&str>) -> Self {
        let session = CareerSession {
            career: initial_search.unwrap_or_default().to_string(),
            ..CareerSession::default()
        };
        let id = Uuid::new_v4();
        debug!(session = %id, "Career wizard opened");
        Self {
            id,
            session: Arc::new(RwLock::new(session)),
            gateway,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn snapshot(&self) -> CareerSnapshot {
        self.session.read().await.snapshot()
    }

    pub async fn step(&self) -> CareerStep {
        self.session.read().await.seq.current()
    }

    pub async fn loading(&self) -> bool {
        self.session.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.session.read().await.error.clone()
    }

    pub async fn roadmap(&self) -> Option<RoadmapView> {
        self.session.read().await.roadmap.clone()
    }

    pub async fn can_advance(&self) -> bool {
        self.session.read().await.can_advance()
    }

    pub async fn can_retreat(&self) -> bool {
        self.session.read().await.seq.can_retreat()
    }

    pub async fn is_closed(&self) -> bool {
        self.session.read().await.seq.is_closed()
    }

    /// Replace the career text. A changed career invalidates any roadmap
    /// already shown; the degree choice is kept. Not allowed on the roadmap
    /// step itself.
    pub async fn set_career(&self, career: &str) -> Result<(), WizardError> {
        let mut s = self.session.write().await;
        s.ensure_editable()?;
        if s.career != career {
            s.career = career.to_string();
            s.invalidate_roadmap();
        }
        Ok(())
    }

    pub async fn set_degree(&self, degree: DegreeLevel) -> Result<(), WizardError> {
        let mut s = self.session.write().await;
        s.ensure_editable()?;
        if s.degree != Some(degree) {
            s.degree = Some(degree);
            s.invalidate_roadmap();
        }
        Ok(())
    }

    /// String-keyed setter for the shell: `career` or `degree`.
    pub async fn set_field(&self, name: &str, value: &str) -> Result<(), WizardError> {
        match name {
            "career" => self.set_career(value).await,
            "degree" | "degreeLevel" => {
                let degree = value.parse().map_err(|reason| WizardError::InvalidValue {
                    field: name.to_string(),
                    reason,
                })?;
                self.set_degree(degree).await
            }
            other => Err(WizardError::UnknownField {
                flow: FLOW,
                name: other.to_string(),
            }),
        }
    }

    /// Move forward. From the degree step this fetches the pathway and
    /// always lands on the roadmap, with fallback data if the fetch fails.
    pub async fn advance(&self) -> Advance<CareerStep> {
        let (request, generation) = {
            let mut s = self.session.write().await;
            if s.seq.is_closed() {
                return Advance::Closed;
            }
            if s.loading {
                return Advance::Busy;
            }
            match s.seq.current() {
                CareerStep::ChooseCareer => {
                    let ok = s.can_advance();
                    return s.seq.advance_if(ok);
                }
                CareerStep::Roadmap => return Advance::AtEnd,
                CareerStep::SelectDegree => {
                    let Some(degree) = s.degree else {
                        return Advance::Blocked;
                    };
                    let Ok(request) = PathwayRequest::new(&s.career, degree) else {
                        return Advance::Blocked;
                    };
                    s.generation += 1;
                    s.loading = true;
                    s.invalidate_roadmap();
                    (request, s.generation)
                }
            }
        };

        info!(
            session = %self.id,
            career = request.career(),
            degree = %request.degree_level(),
            "Fetching career pathway"
        );
        let outcome = self.gateway.fetch(&request).await;

        let mut s = self.session.write().await;
        if s.generation != generation {
            debug!(session = %self.id, generation, "Discarding stale pathway result");
            return if s.seq.is_closed() {
                Advance::Closed
            } else {
                Advance::Superseded
            };
        }

        s.loading = false;
        match outcome {
            Ok(response) => {
                s.roadmap = Some(match response.pathway {
                    Some(pathway) => RoadmapView::Generated(pathway),
                    None => RoadmapView::Fallback,
                });
                info!(session = %self.id, cached = response.cached, "Pathway received");
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "Pathway fetch failed; showing fallback roadmap");
                s.error = Some(e.to_string());
                s.roadmap = Some(RoadmapView::Fallback);
            }
        }
        s.seq.advance_if(true)
    }

    /// Step back. An in-flight fetch is abandoned; from the first step the
    /// wizard closes.
    pub async fn retreat(&self) -> Retreat<CareerStep> {
        let mut s = self.session.write().await;
        if s.loading {
            s.generation += 1;
            s.loading = false;
            debug!(session = %self.id, "Abandoning in-flight pathway fetch");
        }
        match s.seq.retreat() {
            Retreat::Closed => {
                s.teardown();
                info!(session = %self.id, "Career wizard closed");
                Retreat::Closed
            }
            moved => moved,
        }
    }

    /// Tear the session down. Any in-flight fetch is orphaned.
    pub async fn close(&self) {
        let mut s = self.session.write().await;
        if !s.seq.is_closed() {
            info!(session = %self.id, "Career wizard closed");
        }
        s.teardown();
    }
}
