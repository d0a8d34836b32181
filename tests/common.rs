// Common test utilities
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use icicle_processor::model::{ElementKind, Modifier, PrimitiveKind, TypeOracle};
use icicle_processor::processor::{ClassPlanMap, Diagnostics};
use icicle_processor::symtab::{ClassId, ClassTable, ElementId, TypeMirror};

pub const ICICLE: &str = "icepick.Icicle";

pub type Sink = Diagnostics<ElementId, ClassId>;

/// Platform table, panicking on seed failure
pub fn platform() -> ClassTable {
    ClassTable::with_platform().expect("platform classes")
}

/// Convert every `@Icicle` element of the current source set
pub fn convert_round(table: &ClassTable) -> (ClassPlanMap<ClassId>, Sink) {
    let mut sink = Sink::new();
    let plans = icicle_processor::convert(table, table.elements_annotated_with(ICICLE), &mut sink)
        .expect("conversion should succeed");
    (plans, sink)
}

/// Field suffix/cast triples of one class, for compact assertions
pub fn field_triples(plans: &ClassPlanMap<ClassId>, fqcn: &str) -> Vec<(String, Option<&'static str>, String)> {
    plans
        .get(fqcn)
        .unwrap_or_else(|| panic!("no plan for {}", fqcn))
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.method_suffix, f.cast_expr.clone()))
        .collect()
}

/// Delegates to a class table and counts field scans per class
pub struct CountingOracle<'a> {
    pub inner: &'a ClassTable,
    scans: RefCell<HashMap<ClassId, usize>>,
}

impl<'a> CountingOracle<'a> {
    pub fn new(inner: &'a ClassTable) -> Self {
        Self { inner, scans: RefCell::new(HashMap::new()) }
    }

    pub fn scans_of(&self, class: ClassId) -> usize {
        self.scans.borrow().get(&class).copied().unwrap_or(0)
    }
}

impl TypeOracle for CountingOracle<'_> {
    type Type = TypeMirror;
    type Class = ClassId;
    type Element = ElementId;

    fn erasure(&self, ty: &TypeMirror) -> TypeMirror {
        self.inner.erasure(ty)
    }
    fn is_same_type(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        self.inner.is_same_type(a, b)
    }
    fn is_assignable(&self, ty: &TypeMirror, target: &TypeMirror) -> bool {
        self.inner.is_assignable(ty, target)
    }
    fn declared_type(&self, class: &ClassId, args: &[TypeMirror]) -> TypeMirror {
        self.inner.declared_type(class, args)
    }
    fn array_type(&self, component: &TypeMirror) -> TypeMirror {
        self.inner.array_type(component)
    }
    fn primitive(&self, kind: PrimitiveKind) -> TypeMirror {
        self.inner.primitive(kind)
    }
    fn wildcard_extends(&self, bound: &TypeMirror) -> TypeMirror {
        self.inner.wildcard_extends(bound)
    }
    fn type_to_string(&self, ty: &TypeMirror) -> String {
        self.inner.type_to_string(ty)
    }
    fn type_element(&self, qualified_name: &str) -> Option<ClassId> {
        self.inner.type_element(qualified_name)
    }
    fn package_of(&self, class: &ClassId) -> String {
        self.inner.package_of(class)
    }
    fn qualified_name(&self, class: &ClassId) -> String {
        self.inner.qualified_name(class)
    }
    fn class_modifiers(&self, class: &ClassId) -> Vec<Modifier> {
        self.inner.class_modifiers(class)
    }
    fn class_type(&self, class: &ClassId) -> TypeMirror {
        self.inner.class_type(class)
    }
    fn superclass(&self, class: &ClassId) -> Option<TypeMirror> {
        self.inner.superclass(class)
    }
    fn as_class(&self, ty: &TypeMirror) -> Option<ClassId> {
        self.inner.as_class(ty)
    }
    fn fields_of(&self, class: &ClassId) -> Vec<ElementId> {
        *self.scans.borrow_mut().entry(*class).or_insert(0) += 1;
        self.inner.fields_of(class)
    }
    fn element_kind(&self, element: &ElementId) -> ElementKind {
        self.inner.element_kind(element)
    }
    fn simple_name(&self, element: &ElementId) -> String {
        self.inner.simple_name(element)
    }
    fn element_modifiers(&self, element: &ElementId) -> Vec<Modifier> {
        self.inner.element_modifiers(element)
    }
    fn element_type(&self, element: &ElementId) -> TypeMirror {
        self.inner.element_type(element)
    }
    fn enclosing_class(&self, element: &ElementId) -> Option<ClassId> {
        self.inner.enclosing_class(element)
    }
    fn annotations_of(&self, element: &ElementId) -> Vec<String> {
        self.inner.annotations_of(element)
    }
}
