//! Annotation-to-plan conversion
//!
//! ```text
//! annotated elements → validate → lift (TypeToMethodMap) → group by enclosing class
//!                                                               ↓
//!                                              parent resolution → ClassPlanMap
//! ```
//!
//! All user-facing problems are soft: they are reported through the
//! [`Messager`] and the converter keeps going so a single round surfaces as
//! many diagnostics as possible.

mod diagnostics;
mod dictionary;
mod enclosing;
mod fields;
mod plan;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticKind, Diagnostics, LoggingMessager, Messager, Subject};
pub use dictionary::{requires_type_cast, TypeToMethodMap};
pub use enclosing::{group_by_enclosing_class, EnclosingClassResolver};
pub use fields::{FieldLifter, LiftedRound};
pub use plan::{ClassGroup, ClassPlanMap, EnclosingClassPlan, PlanField};

use crate::common::{debug_log, Config, Result};
use crate::model::TypeOracle;

pub struct AnnotationsConverter<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    config: Config,
}

impl<'a, O: TypeOracle + ?Sized> AnnotationsConverter<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle, config: Config::default() }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one round of annotated elements into per-class plans.
    ///
    /// Every call starts from scratch: the dictionary is rebuilt and the
    /// ancestor memo sets are empty.
    pub fn convert<I, M>(&self, annotated_elements: I, messager: &mut M) -> Result<ClassPlanMap<O::Class>>
    where
        I: IntoIterator<Item = O::Element>,
        M: Messager<O::Element, O::Class> + ?Sized,
    {
        self.config.validate()?;

        let lifter = FieldLifter::new(self.oracle, self.config.drop_unmappable_fields)?;
        let round = lifter.lift_round(annotated_elements, messager)?;
        log::debug!(
            "convert: {} annotated fields lifted, {} dropped",
            round.fields.len(),
            round.dropped_from.len()
        );

        let plans = group_by_enclosing_class(
            self.oracle,
            &self.config.marker_annotation,
            round.fields,
            &round.dropped_from,
            messager,
        )?;

        debug_log(format!(
            "converted {} fields in {} enclosing classes",
            plans.field_count(),
            plans.len()
        ));
        Ok(plans)
    }
}

/// Convert with the default configuration
pub fn convert<O, I, M>(oracle: &O, annotated_elements: I, messager: &mut M) -> Result<ClassPlanMap<O::Class>>
where
    O: TypeOracle + ?Sized,
    I: IntoIterator<Item = O::Element>,
    M: Messager<O::Element, O::Class> + ?Sized,
{
    AnnotationsConverter::new(oracle).convert(annotated_elements, messager)
}
