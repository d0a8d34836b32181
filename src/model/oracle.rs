use std::fmt::Debug;

use super::modifier::{ElementKind, Modifier, PrimitiveKind};

/// The slice of the host compiler's type system the converter relies on.
///
/// Handles are owned by the host. Mirrors must never be compared with `==`;
/// identity goes through [`TypeOracle::is_same_type`], usually on erasures.
pub trait TypeOracle {
    /// A type mirror
    type Type: Clone + Debug;
    /// A class or interface element
    type Class: Clone + Debug;
    /// A member element (normally a field)
    type Element: Clone + Debug;

    // Types utility

    fn erasure(&self, ty: &Self::Type) -> Self::Type;
    fn is_same_type(&self, a: &Self::Type, b: &Self::Type) -> bool;
    /// Whether a value of type `ty` may be assigned to a variable of type `target`
    fn is_assignable(&self, ty: &Self::Type, target: &Self::Type) -> bool;
    fn declared_type(&self, class: &Self::Class, args: &[Self::Type]) -> Self::Type;
    fn array_type(&self, component: &Self::Type) -> Self::Type;
    fn primitive(&self, kind: PrimitiveKind) -> Self::Type;
    /// `? extends bound`
    fn wildcard_extends(&self, bound: &Self::Type) -> Self::Type;
    /// Source spelling, e.g. `java.util.ArrayList<java.lang.String>`
    fn type_to_string(&self, ty: &Self::Type) -> String;

    // Elements utility

    fn type_element(&self, qualified_name: &str) -> Option<Self::Class>;
    fn package_of(&self, class: &Self::Class) -> String;
    fn qualified_name(&self, class: &Self::Class) -> String;
    fn class_modifiers(&self, class: &Self::Class) -> Vec<Modifier>;
    /// The class's own type, with its type variables as arguments
    fn class_type(&self, class: &Self::Class) -> Self::Type;
    /// Declared superclass, `None` for roots and interfaces
    fn superclass(&self, class: &Self::Class) -> Option<Self::Type>;
    /// The element behind a declared type; `None` for anything else
    fn as_class(&self, ty: &Self::Type) -> Option<Self::Class>;
    /// Fields directly enclosed by `class`, in declaration order
    fn fields_of(&self, class: &Self::Class) -> Vec<Self::Element>;

    fn element_kind(&self, element: &Self::Element) -> ElementKind;
    fn simple_name(&self, element: &Self::Element) -> String;
    fn element_modifiers(&self, element: &Self::Element) -> Vec<Modifier>;
    fn element_type(&self, element: &Self::Element) -> Self::Type;
    fn enclosing_class(&self, element: &Self::Element) -> Option<Self::Class>;
    /// Fully-qualified names of the annotation types present on `element`
    fn annotations_of(&self, element: &Self::Element) -> Vec<String>;
}
