use constguard_core::events::types::{ArtifactLoadedEvent, CheckStartedEvent};
use constguard_core::events::ConstguardEventHandler;

/// Prints run progress to stderr, keeping stdout for the report.
pub struct ProgressPrinter;

impl ConstguardEventHandler for ProgressPrinter {
    fn on_check_started(&self, event: &CheckStartedEvent) {
        eprintln!(
            "prepare.... flavor: {}   build type: {}",
            event.flavor, event.build_type
        );
    }

    fn on_artifact_loaded(&self, event: &ArtifactLoadedEvent) {
        eprintln!(
            "Processing {} ({} class observations)",
            event.artifact.display(),
            event.observations
        );
    }
}
