use crate::Host;
use retune_apply::{Applier, ApplyReport};
use retune_config::Loader;
use retune_model::ConfigurationDocument;
use retune_policy::{GrowthPolicy, GrowthSubject};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// What happened during start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    /// Whether a document was loaded.
    pub loaded: bool,
    /// `None` when there was no document or it had no defaults section.
    pub defaults: Option<ApplyReport>,
    pub entities: ApplyReport,
}

impl StartupReport {
    /// Total fields written across both steps.
    pub fn applied(&self) -> usize {
        self.defaults.as_ref().map_or(0, |d| d.applied) + self.entities.applied
    }

    /// Total records skipped across both steps.
    pub fn skipped(&self) -> usize {
        self.defaults.as_ref().map_or(0, |d| d.skipped.len()) + self.entities.skipped.len()
    }
}

/// The tuned state of one host process.
#[derive(Debug)]
pub struct Runtime {
    config: Option<Arc<ConfigurationDocument>>,
    policy: GrowthPolicy,
    report: StartupReport,
}

impl Runtime {
    /// Loads `<directory>/<identifier>.toml` and tunes `host` with it.
    ///
    /// Never fails. Without a usable document the host is left untouched and
    /// every level-up is permitted.
    pub fn start(identifier: &str, directory: &Path, host: &mut dyn Host) -> Self {
        Self::start_with(&Loader::new(identifier, directory), host)
    }

    /// Like [`Runtime::start`], with a caller-configured loader.
    pub fn start_with(loader: &Loader, host: &mut dyn Host) -> Self {
        let config = loader.load().map(Arc::new);
        Self::from_document(config, host)
    }

    /// Tunes `host` with an already loaded document.
    pub fn from_document(config: Option<Arc<ConfigurationDocument>>, host: &mut dyn Host) -> Self {
        let mut report = StartupReport::default();

        if let Some(doc) = &config {
            let applier = Applier::new(doc);
            report.loaded = true;
            report.defaults = applier.apply_defaults(host.defaults());
            report.entities = applier.apply_entities(&mut host.collections());
            host.log_state();
            info!(
                "Startup complete: {} fields set, {} skipped",
                report.applied(),
                report.skipped()
            );
        } else {
            info!("Startup complete without configuration");
        }

        let policy = GrowthPolicy::new(config.clone());
        Self {
            config,
            policy,
            report,
        }
    }

    /// Whether `subject` may grow one more level.
    pub fn permit_level_up<S: GrowthSubject + ?Sized>(&self, subject: &S) -> bool {
        self.policy.permits(subject)
    }

    pub fn config(&self) -> Option<&Arc<ConfigurationDocument>> {
        self.config.as_ref()
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    pub fn report(&self) -> &StartupReport {
        &self.report
    }
}
