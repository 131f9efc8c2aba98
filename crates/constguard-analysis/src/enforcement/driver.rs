//! Run driver: walks every class of every artifact and stops at the first
//! violation.

use std::borrow::Borrow;
use std::path::PathBuf;
use std::time::Instant;

use constguard_core::errors::{ConstguardErrorCode, EnforcementError, RunError};
use constguard_core::events::types::{
    ArtifactLoadedEvent, CheckCompleteEvent, CheckStartedEvent, ClassCheckedEvent,
    FieldPassedEvent, RuleSkippedEvent, ViolationEvent,
};
use constguard_core::events::EventDispatcher;

use super::annotation::AnnotationDecoder;
use super::evaluator::{FieldOutcome, FieldVerdict, RuleEvaluator, VariantContext};
use super::rule::FieldDescriptor;
use super::summary::{CheckSummary, PassRecord};
use super::visitation::VisitedClasses;
use crate::model::ClassModel;
use crate::provider::ClassModelProvider;

/// State of one run: the evaluator, the visited set and the running counts.
///
/// The visited set lives here rather than in a global, so two runs never
/// share it.
pub struct CheckRun<'e> {
    evaluator: RuleEvaluator,
    decoder: AnnotationDecoder,
    visited: VisitedClasses,
    summary: CheckSummary,
    events: &'e EventDispatcher,
}

impl<'e> CheckRun<'e> {
    pub fn new(
        context: VariantContext,
        decoder: AnnotationDecoder,
        events: &'e EventDispatcher,
    ) -> Self {
        let summary = CheckSummary {
            flavor: context.flavor.clone(),
            build_type: context.build_type.clone(),
            ..Default::default()
        };
        Self {
            evaluator: RuleEvaluator::new(context),
            decoder,
            visited: VisitedClasses::new(),
            summary,
            events,
        }
    }

    /// Handle one class observation from the provider.
    ///
    /// Repeated observations of a class are counted and otherwise ignored.
    pub fn observe(&mut self, class: &ClassModel) -> Result<(), EnforcementError> {
        self.summary.classes_observed += 1;
        if !self.visited.mark_if_unseen(&class.name) {
            return Ok(());
        }
        tracing::trace!(class = %class.name, fields = class.fields.len(), "checking class");

        for field in &class.fields {
            let descriptor = FieldDescriptor::describe(&class.name, field, &self.decoder);
            self.summary.malformed_rules += descriptor.malformed_rules;

            let result = self.evaluator.evaluate(&descriptor);
            match result {
                Ok(outcome) => self.record(&descriptor, &outcome),
                Err(error) => {
                    tracing::debug!(
                        class = %class.name,
                        field = %field.name,
                        code = error.error_code(),
                        "{error}"
                    );
                    self.events.emit_violation(&ViolationEvent {
                        error: error.clone(),
                    });
                    return Err(error);
                }
            };
        }

        self.summary.classes_checked = self.visited.len();
        self.events.emit_class_checked(&ClassCheckedEvent {
            class_name: class.name.clone(),
            field_count: class.fields.len(),
        });
        Ok(())
    }

    fn record(&mut self, field: &FieldDescriptor, outcome: &FieldOutcome<'_>) {
        let context = self.evaluator.context();
        self.summary.rules_evaluated += outcome.passed.len() + outcome.skipped.len();
        self.summary.rules_skipped += outcome.skipped.len();

        for rule in &outcome.skipped {
            tracing::debug!(
                class = %field.class_name,
                field = %field.field_name,
                rule = %rule,
                "rule does not apply to the active variant; skipped"
            );
            self.events.emit_rule_skipped(&RuleSkippedEvent {
                class_name: field.class_name.clone(),
                field: field.field_name.clone(),
                rule_flavor: rule.flavor().map(str::to_string),
                rule_build_type: rule.build_type().map(str::to_string),
            });
        }

        match outcome.verdict {
            FieldVerdict::NoRules | FieldVerdict::NotApplicable => {}
            FieldVerdict::NonConstant => {
                tracing::debug!(
                    class = %field.class_name,
                    field = %field.field_name,
                    "field has no compile-time constant; rules not enforceable"
                );
                self.summary.fields_without_constant += 1;
            }
            FieldVerdict::Passed => {
                self.summary.fields_checked += 1;
                self.summary.fields_passed += 1;
                let Some(value) = field.actual.clone() else {
                    return;
                };
                for rule in &outcome.passed {
                    tracing::debug!(
                        class = %field.class_name,
                        field = %field.field_name,
                        value = %value,
                        "Enforce value pass: {rule}"
                    );
                }
                let pass = PassRecord {
                    class_name: field.class_name.clone(),
                    field: field.field_name.clone(),
                    value,
                    flavor: context.flavor.clone(),
                    build_type: context.build_type.clone(),
                };
                self.events.emit_field_passed(&FieldPassedEvent {
                    class_name: pass.class_name.clone(),
                    field: pass.field.clone(),
                    value: pass.value.clone(),
                    flavor: pass.flavor.clone(),
                    build_type: pass.build_type.clone(),
                });
                self.summary.passes.push(pass);
            }
        }
    }

    pub fn visited(&self) -> &VisitedClasses {
        &self.visited
    }

    pub fn finish(self) -> CheckSummary {
        self.summary
    }
}

/// Check a stream of class observations against the active variant.
///
/// The stream may repeat classes; each distinct class is checked once.
/// Returns at the first violation without looking at any further field or
/// class.
pub fn run_check<I, C>(
    classes: I,
    context: VariantContext,
    decoder: AnnotationDecoder,
    events: &EventDispatcher,
) -> Result<CheckSummary, EnforcementError>
where
    I: IntoIterator<Item = C>,
    C: Borrow<ClassModel>,
{
    let start = Instant::now();
    let mut run = CheckRun::new(context, decoder, events);
    for class in classes {
        run.observe(class.borrow())?;
    }
    let mut summary = run.finish();
    summary.elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(summary)
}

/// Drives a full run over artifacts through a class-model provider.
pub struct CheckRunner<P> {
    provider: P,
    decoder: AnnotationDecoder,
    events: EventDispatcher,
}

impl<P: ClassModelProvider> CheckRunner<P> {
    pub fn new(provider: P, decoder: AnnotationDecoder) -> Self {
        Self {
            provider,
            decoder,
            events: EventDispatcher::new(),
        }
    }

    /// Replace the event dispatcher.
    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Check every artifact in order. One visited set spans all of them.
    ///
    /// Unreadable input surfaces as `RunError::MalformedInput`, a violation
    /// as `RunError::Enforcement`; either ends the run.
    pub fn run(
        &self,
        artifacts: &[PathBuf],
        context: VariantContext,
    ) -> Result<CheckSummary, RunError> {
        if artifacts.is_empty() {
            return Err(RunError::Usage("no input artifact given".to_string()));
        }

        tracing::debug!(
            flavor = %context.flavor,
            build_type = %context.build_type,
            artifacts = artifacts.len(),
            "starting config check"
        );
        self.events.emit_check_started(&CheckStartedEvent {
            flavor: context.flavor.clone(),
            build_type: context.build_type.clone(),
            artifacts: artifacts.to_vec(),
        });

        let start = Instant::now();
        let mut run = CheckRun::new(context, self.decoder.clone(), &self.events);
        for artifact in artifacts {
            let span = tracing::info_span!("artifact", artifact = %artifact.display());
            let _enter = span.enter();

            let classes = self.provider.load(artifact)?;
            tracing::debug!(observations = classes.len(), "class model loaded");
            self.events.emit_artifact_loaded(&ArtifactLoadedEvent {
                artifact: artifact.clone(),
                observations: classes.len(),
            });

            for class in &classes {
                run.observe(class)?;
            }
        }

        let mut summary = run.finish();
        summary.artifacts = artifacts.to_vec();
        summary.elapsed_ms = start.elapsed().as_millis() as u64;

        self.events.emit_check_complete(&CheckCompleteEvent {
            classes_checked: summary.classes_checked,
            fields_checked: summary.fields_checked,
            fields_passed: summary.fields_passed,
            duration_ms: summary.elapsed_ms,
        });
        tracing::debug!(
            classes = summary.classes_checked,
            fields_checked = summary.fields_checked,
            elapsed_ms = summary.elapsed_ms,
            "config check passed"
        );
        Ok(summary)
    }
}
