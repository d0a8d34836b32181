use crate::common::consts::{msg_unmappable_type, MSG_INVALID_FIELD_MODIFIER};
use crate::common::error::{Error, Result};
use crate::model::{ElementKind, Modifier, TypeOracle};

use super::diagnostics::{Diagnostic, DiagnosticCode, Messager, Subject};
use super::dictionary::TypeToMethodMap;
use super::plan::PlanField;

/// Outcome of lifting one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedRound<C> {
    pub fields: Vec<PlanField<C>>,
    /// Enclosing classes of fields dropped as unmappable, with repeats
    pub dropped_from: Vec<C>,
}

/// Turns annotated elements into plan fields
pub struct FieldLifter<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    type_to_method_map: TypeToMethodMap<'a, O>,
    drop_unmappable: bool,
}

impl<'a, O: TypeOracle + ?Sized> FieldLifter<'a, O> {
    pub fn new(oracle: &'a O, drop_unmappable: bool) -> Result<Self> {
        Ok(Self {
            oracle,
            type_to_method_map: TypeToMethodMap::new(oracle)?,
            drop_unmappable,
        })
    }

    /// Private, static and final fields cannot be reached from a helper
    pub fn has_valid_modifiers<M>(&self, element: &O::Element, messager: &mut M) -> bool
    where
        M: Messager<O::Element, O::Class> + ?Sized,
    {
        let modifiers = self.oracle.element_modifiers(element);
        let is_invalid = Modifier::FORBIDDEN_ON_FIELD.iter().any(|m| modifiers.contains(m));
        if is_invalid {
            messager.print_message(Diagnostic::error(
                DiagnosticCode::InvalidFieldModifier,
                MSG_INVALID_FIELD_MODIFIER,
                Subject::Element(element.clone()),
            ));
        }
        !is_invalid
    }

    /// Lift one already validated element; `None` only when an unmappable
    /// field is dropped by configuration
    pub fn lift<M>(&self, element: &O::Element, messager: &mut M) -> Result<Option<PlanField<O::Class>>>
    where
        M: Messager<O::Element, O::Class> + ?Sized,
    {
        let name = self.oracle.simple_name(element);
        let kind = self.oracle.element_kind(element);
        if kind != ElementKind::Field {
            return Err(Error::NotAField { element: name, kind: format!("{:?}", kind).to_lowercase() });
        }
        let field_type = self.oracle.element_type(element);
        let enclosing = self
            .oracle
            .enclosing_class(element)
            .ok_or_else(|| Error::NotEnclosedByClass { element: name.clone() })?;

        let bundle_method = self.type_to_method_map.convert(&field_type);
        let type_name = self.oracle.type_to_string(&field_type);
        if bundle_method.is_none() {
            messager.print_message(Diagnostic::error(
                DiagnosticCode::UnmappableFieldType,
                msg_unmappable_type(&type_name),
                Subject::Element(element.clone()),
            ));
            if self.drop_unmappable {
                log::debug!("lift: dropping unmappable field '{}' of type {}", name, type_name);
                return Ok(None);
            }
        }

        let type_cast = match bundle_method {
            Some(method) if self.type_to_method_map.requires_type_cast(method) => format!("({})", type_name),
            _ => String::new(),
        };
        log::trace!("lift: {} : {} -> {:?} {}", name, type_name, bundle_method, type_cast);

        Ok(Some(PlanField { name, method_suffix: bundle_method, cast_expr: type_cast, enclosing }))
    }

    /// Validate then lift every element, keeping input order
    pub fn lift_all<I, M>(&self, elements: I, messager: &mut M) -> Result<Vec<PlanField<O::Class>>>
    where
        I: IntoIterator<Item = O::Element>,
        M: Messager<O::Element, O::Class> + ?Sized,
    {
        Ok(self.lift_round(elements, messager)?.fields)
    }

    /// Like [`FieldLifter::lift_all`], also recording the enclosing class of
    /// every dropped field
    pub fn lift_round<I, M>(&self, elements: I, messager: &mut M) -> Result<LiftedRound<O::Class>>
    where
        I: IntoIterator<Item = O::Element>,
        M: Messager<O::Element, O::Class> + ?Sized,
    {
        let mut round = LiftedRound { fields: Vec::new(), dropped_from: Vec::new() };
        for element in elements {
            if !self.has_valid_modifiers(&element, messager) {
                continue;
            }
            match self.lift(&element, messager)? {
                Some(field) => round.fields.push(field),
                None => round.dropped_from.extend(self.oracle.enclosing_class(&element)),
            }
        }
        Ok(round)
    }
}
