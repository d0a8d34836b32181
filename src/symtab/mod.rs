//! In-memory symbol table
//!
//! A self-contained stand-in for the host compiler's element graph. It
//! implements [`TypeOracle`](crate::model::TypeOracle) with javac-like
//! erasure, subtyping and assignability, and ships the platform classes the
//! Bundle dictionary refers to. Classes compiled in an earlier source set are
//! declared with [`ClassDecl::from_classpath`].
//!
//! ```text
//! ClassDecl / MemberDecl → ClassTable::define → ClassSymbol / ElementSymbol
//!                                                   ↓
//!                                   TypeOracle (erasure, assignability, ...)
//! ```

mod oracle;
pub mod platform;
mod relations;
mod table;
mod types;

pub use table::{ClassDecl, ClassTable, MemberDecl};
pub use types::{ClassId, ClassKind, ClassSymbol, ElementId, ElementSymbol, TypeMirror, TypeParam};
