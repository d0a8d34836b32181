use crate::model::{ElementKind, Modifier, PrimitiveKind, TypeOracle};

use super::table::ClassTable;
use super::types::{ClassId, ClassKind, ElementId, TypeMirror};

impl ClassTable {
    /// javac-style spelling: qualified names, `,` between arguments
    pub fn display(&self, ty: &TypeMirror) -> String {
        match ty {
            TypeMirror::Declared { class, args } => {
                let name = &self.class(*class).qualified_name;
                if args.is_empty() {
                    name.clone()
                } else {
                    let args: Vec<String> = args.iter().map(|a| self.display(a)).collect();
                    format!("{}<{}>", name, args.join(","))
                }
            }
            TypeMirror::Array(component) => format!("{}[]", self.display(component)),
            TypeMirror::Primitive(kind) => kind.keyword().to_string(),
            TypeMirror::Wildcard { bound: None } => "?".to_string(),
            TypeMirror::Wildcard { bound: Some(bound) } => format!("? extends {}", self.display(bound)),
            TypeMirror::TypeVar { name, .. } => name.clone(),
        }
    }
}

impl TypeOracle for ClassTable {
    type Type = TypeMirror;
    type Class = ClassId;
    type Element = ElementId;

    fn erasure(&self, ty: &TypeMirror) -> TypeMirror {
        self.erase(ty)
    }

    fn is_same_type(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        self.same_type(a, b)
    }

    fn is_assignable(&self, ty: &TypeMirror, target: &TypeMirror) -> bool {
        self.assignable(ty, target)
    }

    fn declared_type(&self, class: &ClassId, args: &[TypeMirror]) -> TypeMirror {
        TypeMirror::Declared { class: *class, args: args.to_vec() }
    }

    fn array_type(&self, component: &TypeMirror) -> TypeMirror {
        TypeMirror::Array(Box::new(component.clone()))
    }

    fn primitive(&self, kind: PrimitiveKind) -> TypeMirror {
        TypeMirror::Primitive(kind)
    }

    fn wildcard_extends(&self, bound: &TypeMirror) -> TypeMirror {
        TypeMirror::Wildcard { bound: Some(Box::new(bound.clone())) }
    }

    fn type_to_string(&self, ty: &TypeMirror) -> String {
        self.display(ty)
    }

    fn type_element(&self, qualified_name: &str) -> Option<ClassId> {
        self.lookup(qualified_name)
    }

    fn package_of(&self, class: &ClassId) -> String {
        self.class(*class).package.clone()
    }

    fn qualified_name(&self, class: &ClassId) -> String {
        self.class(*class).qualified_name.clone()
    }

    fn class_modifiers(&self, class: &ClassId) -> Vec<Modifier> {
        let symbol = self.class(*class);
        let mut modifiers = symbol.modifiers.clone();
        if symbol.kind == ClassKind::Interface && !modifiers.contains(&Modifier::Abstract) {
            modifiers.push(Modifier::Abstract);
        }
        modifiers
    }

    fn class_type(&self, class: &ClassId) -> TypeMirror {
        let args = self
            .class(*class)
            .type_params
            .iter()
            .map(|p| TypeMirror::TypeVar { name: p.name.clone(), owner: *class })
            .collect();
        TypeMirror::Declared { class: *class, args }
    }

    fn superclass(&self, class: &ClassId) -> Option<TypeMirror> {
        self.class(*class).superclass.clone()
    }

    fn as_class(&self, ty: &TypeMirror) -> Option<ClassId> {
        match ty {
            TypeMirror::Declared { class, .. } => Some(*class),
            _ => None,
        }
    }

    fn fields_of(&self, class: &ClassId) -> Vec<ElementId> {
        self.class(*class)
            .members
            .iter()
            .copied()
            .filter(|member| self.element(*member).kind == ElementKind::Field)
            .collect()
    }

    fn element_kind(&self, element: &ElementId) -> ElementKind {
        self.element(*element).kind
    }

    fn simple_name(&self, element: &ElementId) -> String {
        self.element(*element).name.clone()
    }

    fn element_modifiers(&self, element: &ElementId) -> Vec<Modifier> {
        self.element(*element).modifiers.clone()
    }

    fn element_type(&self, element: &ElementId) -> TypeMirror {
        self.element(*element).ty.clone()
    }

    fn enclosing_class(&self, element: &ElementId) -> Option<ClassId> {
        self.element(*element).owner
    }

    fn annotations_of(&self, element: &ElementId) -> Vec<String> {
        self.element(*element).annotations.clone()
    }
}
