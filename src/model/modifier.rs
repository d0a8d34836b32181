use std::fmt;
use std::str::FromStr;

use crate::common::error::Error;

/// Declaration modifiers as reported by the host compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
}

impl Modifier {
    /// Modifiers that make a field unusable from a generated sibling helper
    pub const FORBIDDEN_ON_FIELD: [Modifier; 3] = [Modifier::Private, Modifier::Static, Modifier::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element kinds the host may hand over as "annotated"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Field,
    Method,
    Constructor,
    Parameter,
}

/// Primitive type kinds, named like `javax.lang.model.type.TypeKind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Char,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Source keyword, e.g. `int`
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Fully-qualified name of the boxing class
    pub fn boxed_class(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Char => "java.lang.Character",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
        }
    }

    pub fn from_boxed_class(name: &str) -> Option<PrimitiveKind> {
        Self::ALL.iter().copied().find(|k| k.boxed_class() == name)
    }

    pub fn from_keyword(keyword: &str) -> Option<PrimitiveKind> {
        Self::ALL.iter().copied().find(|k| k.keyword() == keyword)
    }

    /// Direct primitive supertypes (JLS 4.10.1)
    pub fn direct_supertypes(&self) -> &'static [PrimitiveKind] {
        match self {
            PrimitiveKind::Byte => &[PrimitiveKind::Short],
            PrimitiveKind::Short | PrimitiveKind::Char => &[PrimitiveKind::Int],
            PrimitiveKind::Int => &[PrimitiveKind::Long],
            PrimitiveKind::Long => &[PrimitiveKind::Float],
            PrimitiveKind::Float => &[PrimitiveKind::Double],
            PrimitiveKind::Double | PrimitiveKind::Boolean => &[],
        }
    }

    /// Widening primitive conversion, reflexive
    pub fn widens_to(&self, target: PrimitiveKind) -> bool {
        if *self == target {
            return true;
        }
        self.direct_supertypes().iter().any(|s| s.widens_to(target))
    }
}

/// Parses upper-case kind names (`INT`, `BOOLEAN`)
impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOLEAN" => Ok(PrimitiveKind::Boolean),
            "BYTE" => Ok(PrimitiveKind::Byte),
            "SHORT" => Ok(PrimitiveKind::Short),
            "INT" => Ok(PrimitiveKind::Int),
            "LONG" => Ok(PrimitiveKind::Long),
            "CHAR" => Ok(PrimitiveKind::Char),
            "FLOAT" => Ok(PrimitiveKind::Float),
            "DOUBLE" => Ok(PrimitiveKind::Double),
            other => Err(Error::UnknownPrimitive { name: other.to_string() }),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
