//! Services-deployment document extraction.
//!
//! A services-deployment document tells the launcher how to start the
//! orchestration services (orchestrator, command-and-control, application
//! companions) on a compute cluster: the `srun` invocation template used to
//! spawn parallel job steps, and per-service node/resource placement
//! settings. Deployment of these services targets HPC allocations, but the
//! same document shape works for local multi-core runs.

use serde::Serialize;

use crate::error::Result;
use crate::manager::SectionExtractor;
use crate::sections::{ParsedDocument, SectionMap};
use crate::tags;

/// Deployment plan consumed by the process launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesDeploymentPlan {
    /// Tokenized job-launch invocation, e.g.
    /// `["srun", "--exact", "--label", "--nodes=1", "--ntasks=1"]`.
    pub launch_command: Vec<String>,

    /// Per-service placement settings, copied verbatim from the document.
    pub settings: SectionMap,
}

/// Extractor for services-deployment documents.
///
/// Owns the plan built by its last successful dissection; a fresh plan is
/// started on every `build_particular_sections` call and published only when
/// both extraction steps succeed.
#[derive(Debug, Default)]
pub struct ServicesDeploymentManager {
    plan: Option<ServicesDeploymentPlan>,
}

impl ServicesDeploymentManager {
    /// Create a manager with no plan built yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The plan built by the last successful dissection.
    ///
    /// `None` before the first successful build, and after a failed one.
    #[must_use]
    pub fn services_deployment_plan(&self) -> Option<&ServicesDeploymentPlan> {
        self.plan.as_ref()
    }

    /// Consume the manager, yielding the plan if one was built.
    #[must_use]
    pub fn into_plan(self) -> Option<ServicesDeploymentPlan> {
        self.plan
    }
}

impl SectionExtractor for ServicesDeploymentManager {
    fn root_tag(&self) -> &str {
        tags::SERVICES_DEPLOYMENT_ROOT
    }

    /// Deployment documents carry no generic variables section by
    /// convention; succeeding unconditionally mimics that pipeline step.
    fn build_variables(&mut self, _doc: &ParsedDocument) -> Result<()> {
        Ok(())
    }

    /// Symmetric no-op: no generic parameters section in this format.
    fn build_parameters(&mut self, _doc: &ParsedDocument) -> Result<()> {
        Ok(())
    }

    fn build_particular_sections(&mut self, doc: &ParsedDocument) -> Result<()> {
        self.plan = None;

        // STEP 1 - srun command line options
        let raw_options = doc.require_text(tags::SRUN_OPTIONS)?;
        // TODO: validate that the first token names the launcher binary (srun)
        let launch_command: Vec<String> = raw_options
            .trim()
            .split(' ')
            .map(str::to_string)
            .collect();

        // STEP 2 - per-service node arrangement, passed through verbatim
        let settings = doc.require_map(tags::DEPLOYMENT_SETTINGS)?.clone();

        self.plan = Some(ServicesDeploymentPlan {
            launch_command,
            settings,
        });

        Ok(())
    }
}
