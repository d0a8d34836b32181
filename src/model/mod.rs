//! Host-facing model: modifiers, primitive kinds, the type-oracle seam and
//! the textual type spelling grammar.

pub mod modifier;
pub mod oracle;
pub mod spec;

pub use modifier::{ElementKind, Modifier, PrimitiveKind};
pub use oracle::TypeOracle;
pub use spec::{TypeArgSpec, TypeSpec};
