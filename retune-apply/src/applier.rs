//! Document application - overwrites host fields from parameter groups.

use crate::{ApplyReport, Category, Collections, SkipEvent};
use retune_model::{ConfigurationDocument, DefaultsGroup, EntityPatch, FieldSet, Parameter};
use tracing::{debug, info};

/// Applies every parameter of `group` to the host's defaults object.
pub fn apply_defaults(group: &DefaultsGroup, target: &mut dyn FieldSet) -> ApplyReport {
    let mut report = ApplyReport::default();
    apply_params(&group.params, None, target, &mut report);
    report
}

/// Applies each patch to the first entity with a matching name in the
/// collection its category resolves to.
///
/// A patch whose category is unknown, or whose entity is not found, is
/// skipped as a whole.
pub fn apply_entity_patches(
    patches: &[EntityPatch],
    collections: &mut Collections<'_>,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for patch in patches {
        if !patch.is_well_formed() {
            report.skip(SkipEvent::MalformedPatch {
                patch: patch.to_string(),
            });
            continue;
        }

        let category = Category::from_tag(&patch.category);
        let Some(collection) = collections.resolve(category) else {
            report.skip(SkipEvent::UnknownCategory {
                entity: patch.name.clone(),
                category: patch.category.clone(),
            });
            continue;
        };

        let Some(entity) = collection.find_mut(&patch.name) else {
            report.skip(SkipEvent::EntityNotFound {
                entity: patch.name.clone(),
                category,
            });
            continue;
        };

        debug!("Patching {} in {}", patch.name, category);
        apply_params(&patch.params, Some(patch.name.as_str()), entity, &mut report);
    }

    report
}

/// Converts and writes each parameter in order. Failures skip only the one
/// parameter and are attributed to `entity`.
fn apply_params<F>(
    params: &[Parameter],
    entity: Option<&str>,
    target: &mut F,
    report: &mut ApplyReport,
) where
    F: FieldSet + ?Sized,
{
    let owner = || entity.map(str::to_owned);

    for param in params {
        if !param.is_well_formed() {
            report.skip(SkipEvent::MalformedParameter {
                entity: owner(),
                param: param.to_string(),
            });
            continue;
        }

        let value = match param.convert() {
            Ok(value) => value,
            Err(error) => {
                report.skip(SkipEvent::Conversion {
                    entity: owner(),
                    param: param.to_string(),
                    error,
                });
                continue;
            }
        };

        match target.set_field(&param.name, value) {
            Ok(()) => {
                debug!("Set {}", param);
                report.applied += 1;
            }
            Err(error) => report.skip(SkipEvent::Field {
                entity: owner(),
                error,
            }),
        }
    }
}

/// Applies one document's defaults and entity patches.
#[derive(Debug, Clone, Copy)]
pub struct Applier<'a> {
    doc: &'a ConfigurationDocument,
}

impl<'a> Applier<'a> {
    pub fn new(doc: &'a ConfigurationDocument) -> Self {
        Self { doc }
    }

    /// Applies the defaults section. Returns `None` when the document has none.
    pub fn apply_defaults(&self, target: &mut dyn FieldSet) -> Option<ApplyReport> {
        let group = self.doc.defaults.as_ref()?;
        let report = apply_defaults(group, target);
        info!(
            "Applied defaults: {} set, {} skipped",
            report.applied,
            report.skipped.len()
        );
        Some(report)
    }

    /// Applies every entity patch in the document.
    pub fn apply_entities(&self, collections: &mut Collections<'_>) -> ApplyReport {
        let report = apply_entity_patches(&self.doc.entity_patches, collections);
        info!(
            "Applied {} entity patches: {} set, {} skipped",
            self.doc.entity_patches.len(),
            report.applied,
            report.skipped.len()
        );
        report
    }
}
