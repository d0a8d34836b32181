use crate::model::{ElementKind, Modifier, PrimitiveKind};

/// Index of a class or interface in a [`ClassTable`](super::ClassTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

/// Index of a member element in a [`ClassTable`](super::ClassTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// Resolved type, only meaningful together with the table that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeMirror {
    /// Class or interface type; empty `args` on a generic class is the raw type
    Declared { class: ClassId, args: Vec<TypeMirror> },
    Array(Box<TypeMirror>),
    Primitive(PrimitiveKind),
    /// `?` or `? extends bound`
    Wildcard { bound: Option<Box<TypeMirror>> },
    /// Type parameter `name` declared by `owner`
    TypeVar { name: String, owner: ClassId },
}

impl TypeMirror {
    pub fn declared(class: ClassId) -> Self {
        TypeMirror::Declared { class, args: Vec::new() }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeMirror::Primitive(_))
    }

    pub fn is_reference(&self) -> bool {
        !self.is_primitive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub name: String,
    pub bound: Option<TypeMirror>,
}

#[derive(Debug, Clone)]
pub struct ClassSymbol {
    pub qualified_name: String,
    pub package: String,
    pub kind: ClassKind,
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParam>,
    pub superclass: Option<TypeMirror>,
    pub interfaces: Vec<TypeMirror>,
    pub members: Vec<ElementId>,
    /// Compiled in an earlier source set; visible only through the classpath
    pub from_classpath: bool,
}

impl ClassSymbol {
    /// Name relative to the package, e.g. `Outer.Inner`
    pub fn nested_name(&self) -> &str {
        if self.package.is_empty() {
            &self.qualified_name
        } else {
            &self.qualified_name[self.package.len() + 1..]
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElementSymbol {
    pub name: String,
    pub kind: ElementKind,
    pub ty: TypeMirror,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<String>,
    pub owner: Option<ClassId>,
}
