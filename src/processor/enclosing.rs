//! Grouping by enclosing class and parent helper resolution
//!
//! A helper for class `C` delegates to the helper of its nearest ancestor
//! that has one. Ancestors are known to have a helper when they enclose a
//! field of the current round, or when their compiled form still carries the
//! marker annotation on one of its fields (an earlier source set).
//!
//! Two memo sets of erased types keep every ancestor to at most one field
//! scan per round:
//! - `annotated`: seeded with the round's enclosing classes, grows with every
//!   ancestor found annotated on the classpath
//! - `ignored`: ancestors already scanned without finding the marker, plus
//!   classes whose every marked field was dropped as unmappable

use crate::common::consts::MSG_PRIVATE_ENCLOSING_CLASS;
use crate::common::error::{Error, Result};
use crate::model::{Modifier, TypeOracle};

use super::diagnostics::{Diagnostic, DiagnosticCode, Messager, Subject};
use super::plan::{qualify, sanitize, ClassPlanMap, EnclosingClassPlan, PlanField};

/// Ancestor walk states
enum Walk<C> {
    Scanning(C),
    Terminated(Option<String>),
}

pub struct EnclosingClassResolver<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    marker_annotation: &'a str,
    annotated_classes: Vec<O::Type>,
    ignored_classes: Vec<O::Type>,
}

impl<'a, O: TypeOracle + ?Sized> EnclosingClassResolver<'a, O> {
    /// `erased_enclosing_classes` are the round's own annotated classes
    pub fn new(oracle: &'a O, marker_annotation: &'a str, erased_enclosing_classes: Vec<O::Type>) -> Self {
        Self {
            oracle,
            marker_annotation,
            annotated_classes: erased_enclosing_classes,
            ignored_classes: Vec::new(),
        }
    }

    /// Classes known to have no helper this round, skipped by the walk
    pub fn ignoring(mut self, erased_classes: Vec<O::Type>) -> Self {
        for erased in erased_classes {
            if !self.contains_erasure(&self.annotated_classes, &erased)
                && !self.contains_erasure(&self.ignored_classes, &erased)
            {
                self.ignored_classes.push(erased);
            }
        }
        self
    }

    pub fn plan_for(&mut self, class: &O::Class) -> Result<EnclosingClassPlan<O::Class>> {
        let package = self.oracle.package_of(class);
        let original_nested_name = self.class_name(class, &package);
        let sanitized_name = sanitize(&original_nested_name);
        let parent_fqcn = self.find_parent_fqcn(class)?;
        log::debug!(
            "enclosing: {} parent={}",
            qualify(&package, &sanitized_name),
            parent_fqcn.as_deref().unwrap_or("<none>")
        );
        Ok(EnclosingClassPlan {
            package,
            sanitized_name,
            original_nested_name,
            parent_fqcn,
            class_ref: class.clone(),
        })
    }

    pub fn find_parent_fqcn(&mut self, class: &O::Class) -> Result<Option<String>> {
        let mut state = Walk::Scanning(class.clone());
        loop {
            state = match state {
                Walk::Terminated(parent) => return Ok(parent),
                Walk::Scanning(current) => self.step(&current)?,
            };
        }
    }

    fn step(&mut self, class: &O::Class) -> Result<Walk<O::Class>> {
        let Some(superclass) = self.oracle.superclass(class) else {
            return Ok(Walk::Terminated(None));
        };
        let parent = self.oracle.as_class(&superclass).ok_or_else(|| Error::NotADeclaredType {
            class: self.oracle.qualified_name(class),
            mirror: self.oracle.type_to_string(&superclass),
        })?;

        if self.contains_erasure(&self.annotated_classes, &superclass) {
            return Ok(Walk::Terminated(Some(self.fqcn(&parent))));
        }

        // Scanned before, marker absent
        if self.contains_erasure(&self.ignored_classes, &superclass) {
            log::trace!("enclosing: {} already ignored", self.oracle.qualified_name(&parent));
            return Ok(Walk::Scanning(parent));
        }

        if self.is_annotated_from_another_source_set(&parent) {
            log::debug!("enclosing: {} is annotated in another source set", self.oracle.qualified_name(&parent));
            self.annotated_classes.push(self.oracle.erasure(&superclass));
            return Ok(Walk::Terminated(Some(self.fqcn(&parent))));
        }

        self.ignored_classes.push(self.oracle.erasure(&superclass));
        Ok(Walk::Scanning(parent))
    }

    fn contains_erasure(&self, group: &[O::Type], query: &O::Type) -> bool {
        let erasure = self.oracle.erasure(query);
        group.iter().any(|mirror| self.oracle.is_same_type(mirror, &erasure))
    }

    fn is_annotated_from_another_source_set(&self, class: &O::Class) -> bool {
        self.oracle.fields_of(class).iter().any(|field| {
            self.oracle
                .annotations_of(field)
                .iter()
                .any(|annotation| annotation == self.marker_annotation)
        })
    }

    fn fqcn(&self, class: &O::Class) -> String {
        let package = self.oracle.package_of(class);
        qualify(&package, &sanitize(&self.class_name(class, &package)))
    }

    /// Qualified name without its package prefix
    fn class_name(&self, class: &O::Class, package: &str) -> String {
        let qualified = self.oracle.qualified_name(class);
        if package.is_empty() {
            return qualified;
        }
        match qualified.strip_prefix(package).and_then(|rest| rest.strip_prefix('.')) {
            Some(nested) => nested.to_string(),
            None => qualified,
        }
    }

    pub fn annotated_count(&self) -> usize {
        self.annotated_classes.len()
    }

    pub fn ignored_count(&self) -> usize {
        self.ignored_classes.len()
    }
}

/// Group lifted fields by erased enclosing class and build one plan per class.
///
/// `dropped_from` lists classes that lost fields to unmappable-type
/// dropping; the ones left with no field get no helper, so the ancestor walk
/// must not stop at them.
pub fn group_by_enclosing_class<O, M>(
    oracle: &O,
    marker_annotation: &str,
    fields: Vec<PlanField<O::Class>>,
    dropped_from: &[O::Class],
    messager: &mut M,
) -> Result<ClassPlanMap<O::Class>>
where
    O: TypeOracle + ?Sized,
    M: Messager<O::Element, O::Class> + ?Sized,
{
    let mut erased_enclosing_classes: Vec<O::Type> = Vec::new();
    for field in &fields {
        let erased = oracle.erasure(&oracle.class_type(&field.enclosing));
        if erased_enclosing_classes.iter().any(|known| oracle.is_same_type(known, &erased)) {
            continue;
        }
        if oracle.class_modifiers(&field.enclosing).contains(&Modifier::Private) {
            messager.print_message(Diagnostic::error(
                DiagnosticCode::PrivateEnclosingClass,
                MSG_PRIVATE_ENCLOSING_CLASS,
                Subject::Class(field.enclosing.clone()),
            ));
        }
        erased_enclosing_classes.push(erased);
    }

    let helperless = dropped_from
        .iter()
        .map(|class| oracle.erasure(&oracle.class_type(class)))
        .collect();
    let mut resolver =
        EnclosingClassResolver::new(oracle, marker_annotation, erased_enclosing_classes).ignoring(helperless);
    let mut plans = ClassPlanMap::default();
    let mut keys: Vec<O::Type> = Vec::new();

    for field in fields {
        let erased = oracle.erasure(&oracle.class_type(&field.enclosing));
        let group = match keys.iter().position(|key| oracle.is_same_type(key, &erased)) {
            Some(group) => group,
            None => {
                let plan = resolver.plan_for(&field.enclosing)?;
                keys.push(erased);
                plans.push_group(plan)
            }
        };
        plans.push_field(group, field);
    }

    log::debug!(
        "enclosing: {} classes, memo annotated={} ignored={}",
        plans.len(),
        resolver.annotated_count(),
        resolver.ignored_count()
    );
    Ok(plans)
}
