//! Type relations over the class table
//!
//! Follows the javac rules the converter depends on (JLS §4.6, §4.10, §5.2):
//! - erasure drops type arguments and replaces type variables by the erasure
//!   of their bound
//! - subtyping walks superclasses and interfaces, substituting the
//!   subtype's arguments for the declared type parameters
//! - `? extends B` contains any type that is a subtype of `B`
//! - assignment additionally allows unchecked raw conversion, primitive
//!   widening, boxing and unboxing

use std::collections::HashSet;

use crate::common::consts::JAVA_LANG_OBJECT;
use crate::model::PrimitiveKind;

use super::table::ClassTable;
use super::types::{ClassId, TypeMirror};

// Every array type is a subtype of these
const ARRAY_SUPERTYPES: &[&str] = &[JAVA_LANG_OBJECT, "java.lang.Cloneable", "java.io.Serializable"];

impl ClassTable {
    pub(crate) fn object_class(&self) -> Option<ClassId> {
        self.lookup(JAVA_LANG_OBJECT)
    }

    fn upper_bound(&self, name: &str, owner: ClassId) -> Option<TypeMirror> {
        let declared = self
            .class(owner)
            .type_params
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.bound.clone());
        declared.or_else(|| self.object_class().map(TypeMirror::declared))
    }

    pub fn erase(&self, ty: &TypeMirror) -> TypeMirror {
        match ty {
            TypeMirror::Declared { class, .. } => TypeMirror::declared(*class),
            TypeMirror::Array(component) => TypeMirror::Array(Box::new(self.erase(component))),
            TypeMirror::Primitive(kind) => TypeMirror::Primitive(*kind),
            TypeMirror::TypeVar { name, owner } => match self.upper_bound(name, *owner) {
                Some(bound) => self.erase(&bound),
                None => ty.clone(),
            },
            TypeMirror::Wildcard { bound } => match bound {
                Some(bound) => self.erase(bound),
                None => self.object_class().map(TypeMirror::declared).unwrap_or_else(|| ty.clone()),
            },
        }
    }

    /// Replace `owner`'s type variables with `args`; raw use erases them
    fn substitute(&self, ty: &TypeMirror, owner: ClassId, args: &[TypeMirror]) -> TypeMirror {
        match ty {
            TypeMirror::TypeVar { name, owner: var_owner } if *var_owner == owner => {
                let params = &self.class(owner).type_params;
                match params.iter().position(|p| &p.name == name) {
                    Some(index) if index < args.len() => args[index].clone(),
                    _ => self.erase(ty),
                }
            }
            TypeMirror::Declared { class, args: inner } => TypeMirror::Declared {
                class: *class,
                args: inner.iter().map(|a| self.substitute(a, owner, args)).collect(),
            },
            TypeMirror::Array(component) => TypeMirror::Array(Box::new(self.substitute(component, owner, args))),
            TypeMirror::Wildcard { bound } => TypeMirror::Wildcard {
                bound: bound.as_ref().map(|b| Box::new(self.substitute(b, owner, args))),
            },
            other => other.clone(),
        }
    }

    /// Direct supertypes of a declared type, instantiated for its arguments
    pub fn direct_supertypes(&self, ty: &TypeMirror) -> Vec<TypeMirror> {
        let TypeMirror::Declared { class, args } = ty else {
            return Vec::new();
        };
        let symbol = self.class(*class);
        let raw = args.is_empty() && !symbol.type_params.is_empty();

        symbol
            .superclass
            .iter()
            .chain(symbol.interfaces.iter())
            .map(|sup| if raw { self.erase(sup) } else { self.substitute(sup, *class, args) })
            .collect()
    }

    /// The supertype of `ty` whose class is `target`, if any
    pub fn as_super(&self, ty: &TypeMirror, target: ClassId) -> Option<TypeMirror> {
        let mut pending = vec![ty.clone()];
        let mut seen = HashSet::new();
        while let Some(current) = pending.pop() {
            let TypeMirror::Declared { class, .. } = &current else {
                continue;
            };
            if *class == target {
                return Some(current);
            }
            if !seen.insert(*class) {
                continue;
            }
            pending.extend(self.direct_supertypes(&current));
        }
        None
    }

    fn is_object(&self, ty: &TypeMirror) -> bool {
        matches!(ty, TypeMirror::Declared { class, .. } if Some(*class) == self.object_class())
    }

    pub fn same_type(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        a == b
    }

    pub fn is_subtype(&self, ty: &TypeMirror, target: &TypeMirror) -> bool {
        match (ty, target) {
            (TypeMirror::Primitive(a), TypeMirror::Primitive(b)) => a.widens_to(*b),
            (TypeMirror::Primitive(_), _) | (_, TypeMirror::Primitive(_)) => false,
            (_, target) if self.is_object(target) => true,
            (TypeMirror::TypeVar { .. }, TypeMirror::TypeVar { .. }) if ty == target => true,
            (TypeMirror::TypeVar { name, owner }, _) => match self.upper_bound(name, *owner) {
                Some(bound) => self.is_subtype(&bound, target),
                None => false,
            },
            (TypeMirror::Wildcard { bound }, _) => match bound {
                Some(bound) => self.is_subtype(bound, target),
                None => false,
            },
            (TypeMirror::Array(a), TypeMirror::Array(b)) => {
                if a.is_primitive() || b.is_primitive() {
                    a == b
                } else {
                    self.is_subtype(a, b)
                }
            }
            (TypeMirror::Array(_), TypeMirror::Declared { class, args }) => {
                args.is_empty()
                    && ARRAY_SUPERTYPES
                        .iter()
                        .any(|name| self.lookup(name) == Some(*class))
            }
            (TypeMirror::Declared { .. }, TypeMirror::Declared { class, args: target_args }) => {
                match self.as_super(ty, *class) {
                    Some(TypeMirror::Declared { args, .. }) => {
                        if target_args.is_empty() {
                            true
                        } else if args.is_empty() {
                            false
                        } else {
                            args.len() == target_args.len()
                                && target_args.iter().zip(args.iter()).all(|(t, a)| self.contains(t, a))
                        }
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Type-argument containment: does `outer` admit `inner`
    fn contains(&self, outer: &TypeMirror, inner: &TypeMirror) -> bool {
        match outer {
            TypeMirror::Wildcard { bound: None } => true,
            TypeMirror::Wildcard { bound: Some(bound) } => match inner {
                TypeMirror::Wildcard { bound: Some(inner_bound) } => self.is_subtype(inner_bound, bound),
                TypeMirror::Wildcard { bound: None } => self.is_object(bound),
                _ => self.is_subtype(inner, bound),
            },
            _ => self.same_type(outer, inner),
        }
    }

    /// Subtyping plus unchecked conversion from raw to parameterized types
    fn is_subtype_unchecked(&self, ty: &TypeMirror, target: &TypeMirror) -> bool {
        if self.is_subtype(ty, target) {
            return true;
        }
        match (ty, target) {
            (TypeMirror::Array(a), TypeMirror::Array(b)) if a.is_reference() && b.is_reference() => {
                self.is_subtype_unchecked(a, b)
            }
            (TypeMirror::TypeVar { name, owner }, _) => match self.upper_bound(name, *owner) {
                Some(bound) => self.is_subtype_unchecked(&bound, target),
                None => false,
            },
            (TypeMirror::Declared { .. }, TypeMirror::Declared { class, args }) if !args.is_empty() => {
                matches!(self.as_super(ty, *class), Some(TypeMirror::Declared { args, .. }) if args.is_empty())
            }
            _ => false,
        }
    }

    fn boxed(&self, kind: PrimitiveKind) -> Option<TypeMirror> {
        self.lookup(kind.boxed_class()).map(TypeMirror::declared)
    }

    fn unboxed(&self, ty: &TypeMirror) -> Option<PrimitiveKind> {
        match ty {
            TypeMirror::Declared { class, .. } => PrimitiveKind::from_boxed_class(&self.class(*class).qualified_name),
            _ => None,
        }
    }

    pub fn assignable(&self, ty: &TypeMirror, target: &TypeMirror) -> bool {
        match (ty, target) {
            (TypeMirror::Primitive(_), TypeMirror::Primitive(_)) => self.is_subtype(ty, target),
            (TypeMirror::Primitive(kind), _) => match self.boxed(*kind) {
                Some(boxed) => self.is_subtype(&boxed, target),
                None => false,
            },
            (_, TypeMirror::Primitive(target_kind)) => match self.unboxed(ty) {
                Some(kind) => kind.widens_to(*target_kind),
                None => false,
            },
            _ => self.is_subtype_unchecked(ty, target),
        }
    }
}
