//! Class table construction
//!
//! Classes are declared with [`ClassDecl`] and resolved eagerly: every type
//! spelling is looked up when the class is defined, so a class must be
//! defined after the classes it mentions (self references and the class's
//! own type parameters are fine).

use std::collections::HashMap;

use crate::common::consts::JAVA_LANG_OBJECT;
use crate::common::error::{Error, Result};
use crate::model::{ElementKind, Modifier, PrimitiveKind, TypeArgSpec, TypeSpec};

use super::types::{ClassId, ClassKind, ClassSymbol, ElementId, ElementSymbol, TypeMirror, TypeParam};

/// Declaration of a class or interface, resolved by [`ClassTable::define`]
#[derive(Debug, Clone)]
pub struct ClassDecl {
    package: String,
    name: String,
    kind: ClassKind,
    modifiers: Vec<Modifier>,
    type_params: Vec<(String, Option<String>)>,
    superclass: Option<String>,
    root: bool,
    interfaces: Vec<String>,
    members: Vec<MemberDecl>,
    from_classpath: bool,
}

impl ClassDecl {
    /// A class `name` (dotted for nested classes) inside `package`
    pub fn class(package: &str, name: &str) -> Self {
        Self::with_kind(package, name, ClassKind::Class)
    }

    pub fn interface(package: &str, name: &str) -> Self {
        Self::with_kind(package, name, ClassKind::Interface)
    }

    fn with_kind(package: &str, name: &str, kind: ClassKind) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            kind,
            modifiers: vec![Modifier::Public],
            type_params: Vec::new(),
            superclass: None,
            root: false,
            interfaces: Vec::new(),
            members: Vec::new(),
            from_classpath: false,
        }
    }

    pub fn modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn type_param(mut self, name: &str) -> Self {
        self.type_params.push((name.to_string(), None));
        self
    }

    pub fn bounded_type_param(mut self, name: &str, bound: &str) -> Self {
        self.type_params.push((name.to_string(), Some(bound.to_string())));
        self
    }

    /// Superclass spelling; classes default to `java.lang.Object`
    pub fn extends(mut self, superclass: &str) -> Self {
        self.superclass = Some(superclass.to_string());
        self
    }

    /// No superclass at all, like `java.lang.Object`
    pub fn root(mut self) -> Self {
        self.root = true;
        self
    }

    /// Implemented interfaces, or super-interfaces of an interface
    pub fn implements(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    pub fn member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    pub fn field(self, field: MemberDecl) -> Self {
        self.member(field)
    }

    /// Mark as compiled in an earlier source set
    pub fn from_classpath(mut self) -> Self {
        self.from_classpath = true;
        self
    }

    fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

/// Declaration of a field or other member
#[derive(Debug, Clone)]
pub struct MemberDecl {
    name: String,
    kind: ElementKind,
    type_spelling: String,
    modifiers: Vec<Modifier>,
    annotations: Vec<String>,
}

impl MemberDecl {
    pub fn field(name: &str, type_spelling: &str) -> Self {
        Self::with_kind(name, ElementKind::Field, type_spelling)
    }

    /// A method; `type_spelling` is its return type
    pub fn method(name: &str, type_spelling: &str) -> Self {
        Self::with_kind(name, ElementKind::Method, type_spelling)
    }

    fn with_kind(name: &str, kind: ElementKind, type_spelling: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            type_spelling: type_spelling.to_string(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Add an annotation by fully-qualified type name
    pub fn annotated(mut self, annotation: &str) -> Self {
        self.annotations.push(annotation.to_string());
        self
    }
}

/// In-memory class table acting as a host compiler's element graph
#[derive(Debug, Default)]
pub struct ClassTable {
    pub(crate) classes: Vec<ClassSymbol>,
    pub(crate) elements: Vec<ElementSymbol>,
    by_name: HashMap<String, ClassId>,
}

impl ClassTable {
    /// An empty table; most callers want [`ClassTable::with_platform`]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, decl: ClassDecl) -> Result<ClassId> {
        let qualified_name = decl.qualified_name();
        if self.by_name.contains_key(&qualified_name) {
            return Err(Error::DuplicateClass { name: qualified_name });
        }

        let id = ClassId(self.classes.len());
        let element_mark = self.elements.len();
        self.classes.push(ClassSymbol {
            qualified_name: qualified_name.clone(),
            package: decl.package.clone(),
            kind: decl.kind,
            modifiers: decl.modifiers.clone(),
            type_params: decl
                .type_params
                .iter()
                .map(|(name, _)| TypeParam { name: name.clone(), bound: None })
                .collect(),
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            from_classpath: decl.from_classpath,
        });
        self.by_name.insert(qualified_name.clone(), id);

        match self.resolve_decl(id, &decl) {
            Ok(()) => {
                log::trace!("symtab: defined {} as {:?}", qualified_name, id);
                Ok(id)
            }
            Err(err) => {
                self.classes.truncate(id.0);
                self.elements.truncate(element_mark);
                self.by_name.remove(&qualified_name);
                Err(err)
            }
        }
    }

    fn resolve_decl(&mut self, id: ClassId, decl: &ClassDecl) -> Result<()> {
        for (index, (_, bound)) in decl.type_params.iter().enumerate() {
            if let Some(bound) = bound {
                let bound = self.resolve_spelling(bound, Some(id))?;
                self.classes[id.0].type_params[index].bound = Some(bound);
            }
        }
        self.check_bound_cycles(id)?;

        let superclass = match (&decl.superclass, decl.kind) {
            (Some(spelling), _) => Some(self.resolve_spelling(spelling, Some(id))?),
            (None, ClassKind::Interface) => None,
            (None, ClassKind::Class) if decl.root || decl.qualified_name() == JAVA_LANG_OBJECT => None,
            (None, ClassKind::Class) => Some(self.resolve_spelling(JAVA_LANG_OBJECT, None)?),
        };
        self.classes[id.0].superclass = superclass;

        let interfaces = decl
            .interfaces
            .iter()
            .map(|spelling| self.resolve_spelling(spelling, Some(id)))
            .collect::<Result<Vec<_>>>()?;
        self.classes[id.0].interfaces = interfaces;

        for member in &decl.members {
            let element = self.push_element(member, Some(id))?;
            self.classes[id.0].members.push(element);
        }
        Ok(())
    }

    /// `T extends U, U extends T` has no erasure
    fn check_bound_cycles(&self, id: ClassId) -> Result<()> {
        let symbol = self.class(id);
        for start in &symbol.type_params {
            let mut seen = vec![start.name.as_str()];
            let mut bound = start.bound.as_ref();
            while let Some(current) = bound {
                let mut target = current;
                while let TypeMirror::Array(component) = target {
                    target = &**component;
                }
                let TypeMirror::TypeVar { name, owner } = target else {
                    break;
                };
                if *owner != id {
                    break;
                }
                if seen.contains(&name.as_str()) {
                    seen.push(name.as_str());
                    return Err(Error::type_spec(
                        symbol.qualified_name.clone(),
                        format!("cyclic type parameter bounds: {}", seen.join(" extends ")),
                    ));
                }
                seen.push(name.as_str());
                bound = symbol
                    .type_params
                    .iter()
                    .find(|p| p.name == *name)
                    .and_then(|p| p.bound.as_ref());
            }
        }
        Ok(())
    }

    /// A member with no enclosing class, which no well-formed host produces
    pub fn define_detached(&mut self, member: MemberDecl) -> Result<ElementId> {
        self.push_element(&member, None)
    }

    fn push_element(&mut self, member: &MemberDecl, owner: Option<ClassId>) -> Result<ElementId> {
        let ty = self.resolve_spelling(&member.type_spelling, owner)?;
        let id = ElementId(self.elements.len());
        self.elements.push(ElementSymbol {
            name: member.name.clone(),
            kind: member.kind,
            ty,
            modifiers: member.modifiers.clone(),
            annotations: member.annotations.clone(),
            owner,
        });
        Ok(id)
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_name.get(qualified_name).copied()
    }

    pub fn class(&self, id: ClassId) -> &ClassSymbol {
        &self.classes[id.0]
    }

    pub fn element(&self, id: ElementId) -> &ElementSymbol {
        &self.elements[id.0]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Member `name` of `class`, if declared there
    pub fn member_named(&self, class: ClassId, name: &str) -> Option<ElementId> {
        self.class(class)
            .members
            .iter()
            .copied()
            .find(|member| self.element(*member).name == name)
    }

    /// Elements of the current source set carrying `annotation`, in
    /// declaration order. Classpath classes are never part of a round.
    pub fn elements_annotated_with(&self, annotation: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| match element.owner {
                Some(owner) => !self.class(owner).from_classpath,
                None => true,
            })
            .filter(|(_, element)| element.annotations.iter().any(|a| a == annotation))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    /// Resolve a spelling outside of any class scope
    pub fn parse_type(&self, spelling: &str) -> Result<TypeMirror> {
        self.resolve_spelling(spelling, None)
    }

    fn resolve_spelling(&self, spelling: &str, scope: Option<ClassId>) -> Result<TypeMirror> {
        let spec = TypeSpec::parse(spelling)?;
        self.resolve_spec(&spec, scope)
    }

    pub(crate) fn resolve_spec(&self, spec: &TypeSpec, scope: Option<ClassId>) -> Result<TypeMirror> {
        match spec {
            TypeSpec::Parameterized { container, args } => {
                let class = self.lookup(container).ok_or_else(|| Error::unresolved(container))?;
                let expected = self.class(class).type_params.len();
                if expected != args.len() {
                    return Err(Error::type_spec(
                        spec.to_string(),
                        format!("'{}' expects {} type argument(s), found {}", container, expected, args.len()),
                    ));
                }
                let args = args
                    .iter()
                    .map(|arg| match arg {
                        TypeArgSpec::Type(t) => self.resolve_spec(t, scope),
                        TypeArgSpec::WildcardExtends(bound) => Ok(TypeMirror::Wildcard {
                            bound: Some(Box::new(self.resolve_spec(bound, scope)?)),
                        }),
                        TypeArgSpec::Unbounded => Ok(TypeMirror::Wildcard { bound: None }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypeMirror::Declared { class, args })
            }
            TypeSpec::Array(component) => Ok(TypeMirror::Array(Box::new(self.resolve_spec(component, scope)?))),
            TypeSpec::Simple(name) => {
                if let Some(kind) = PrimitiveKind::from_keyword(name) {
                    return Ok(TypeMirror::Primitive(kind));
                }
                if let Some(owner) = scope {
                    if self.class(owner).type_params.iter().any(|p| &p.name == name) {
                        return Ok(TypeMirror::TypeVar { name: name.clone(), owner });
                    }
                }
                self.lookup(name)
                    .map(TypeMirror::declared)
                    .ok_or_else(|| Error::unresolved(name))
            }
            TypeSpec::Named(name) => self
                .lookup(name)
                .map(TypeMirror::declared)
                .ok_or_else(|| Error::unresolved(name)),
        }
    }
}
