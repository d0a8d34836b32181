//! Field type → Bundle accessor suffix
//!
//! The table is materialised against the host oracle on every round, since
//! type mirrors are owned by the host and may change between rounds.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::common::consts::{BUNDLE_DICTIONARY, REQUIRE_TYPE_CAST_METHODS};
use crate::common::error::{Error, Result};
use crate::model::{PrimitiveKind, TypeArgSpec, TypeOracle, TypeSpec};

static TYPE_CAST_METHODS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| REQUIRE_TYPE_CAST_METHODS.iter().copied().collect());

pub struct TypeToMethodMap<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    // Scanned in order; the first assignable pattern wins
    conversions: Vec<(O::Type, &'static str)>,
}

impl<'a, O: TypeOracle + ?Sized> TypeToMethodMap<'a, O> {
    pub fn new(oracle: &'a O) -> Result<Self> {
        Self::from_table(oracle, BUNDLE_DICTIONARY)
    }

    /// Build from an arbitrary ordered `(type spelling, suffix)` table
    pub fn from_table(oracle: &'a O, table: &[(&str, &'static str)]) -> Result<Self> {
        let mut conversions = Vec::with_capacity(table.len());
        for (spelling, method) in table {
            let spec = TypeSpec::parse(spelling)?;
            conversions.push((mirror(oracle, &spec)?, *method));
        }
        log::trace!("dictionary: materialised {} entries", conversions.len());
        Ok(Self { oracle, conversions })
    }

    /// Suffix of the first entry `field_type` is assignable to
    pub fn convert(&self, field_type: &O::Type) -> Option<&'static str> {
        self.conversions
            .iter()
            .find(|(candidate, _)| self.oracle.is_assignable(field_type, candidate))
            .map(|(_, method)| *method)
    }

    pub fn requires_type_cast(&self, bundle_method: &str) -> bool {
        requires_type_cast(bundle_method)
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.conversions.iter().map(|(_, method)| *method)
    }
}

/// Whether the Bundle getter for `bundle_method` needs a cast at restore sites
pub fn requires_type_cast(bundle_method: &str) -> bool {
    TYPE_CAST_METHODS.contains(bundle_method)
}

fn mirror<O: TypeOracle + ?Sized>(oracle: &O, spec: &TypeSpec) -> Result<O::Type> {
    match spec {
        TypeSpec::Parameterized { container, args } => {
            let class = oracle.type_element(container).ok_or_else(|| Error::unresolved(container))?;
            let args = args
                .iter()
                .map(|arg| match arg {
                    TypeArgSpec::Type(t) => mirror(oracle, t),
                    TypeArgSpec::WildcardExtends(bound) => Ok(oracle.wildcard_extends(&mirror(oracle, bound)?)),
                    TypeArgSpec::Unbounded => Err(Error::type_spec(
                        spec.to_string(),
                        "unbounded wildcards have no Bundle accessor",
                    )),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(oracle.declared_type(&class, &args))
        }
        TypeSpec::Array(component) => Ok(oracle.array_type(&mirror(oracle, component)?)),
        TypeSpec::Simple(name) => {
            let kind: PrimitiveKind = name.to_uppercase().parse()?;
            Ok(oracle.primitive(kind))
        }
        TypeSpec::Named(name) => {
            let class = oracle.type_element(name).ok_or_else(|| Error::unresolved(name))?;
            Ok(oracle.declared_type(&class, &[]))
        }
    }
}
