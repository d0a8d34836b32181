//! Icicle processor
//!
//! Compile-time planning for Bundle state helpers. Fields annotated with
//! `@icepick.Icicle` are saved to and restored from an Android `Bundle`; this
//! crate turns one round of annotated elements into a plan per enclosing
//! class that a source emitter can render.
//!
//! ## Architecture
//!
//! - **model**: the [`TypeOracle`] seam to the host compiler, modifiers and
//!   the textual type spelling grammar
//! - **processor**: validation, Bundle accessor lookup, grouping and parent
//!   helper resolution
//! - **symtab**: an in-memory [`TypeOracle`] with javac-like type relations
//! - **common**: errors, configuration and constants
//!
//! ## Conversion Flow
//!
//! ```text
//! annotated elements → validate → lift → group → ClassPlanMap
//!                                   ↓        ↓
//!                       TypeToMethodMap   ancestor walk (annotated / ignored)
//! ```

pub mod common;
pub mod model;
pub mod processor;
pub mod symtab;

pub use common::{Config, Error, Result};
pub use model::TypeOracle;
pub use processor::{convert, AnnotationsConverter, ClassPlanMap, Diagnostics, EnclosingClassPlan, Messager, PlanField};
