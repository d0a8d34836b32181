//! JDK and Android classes referenced by the Bundle dictionary
//!
//! Only the shape the type relations need is modelled: names, type
//! parameters, supertypes and modifiers. Hierarchies are trimmed where the
//! intermediate classes do not change any assignability answer.

use crate::common::error::Result;
use crate::model::Modifier;

use super::table::{ClassDecl, ClassTable};

const BOXES: &[(&str, bool)] = &[
    ("Byte", true),
    ("Short", true),
    ("Integer", true),
    ("Long", true),
    ("Float", true),
    ("Double", true),
    ("Boolean", false),
    ("Character", false),
];

pub fn platform_decls() -> Vec<ClassDecl> {
    let public = [Modifier::Public];
    let public_final = [Modifier::Public, Modifier::Final];
    let public_abstract = [Modifier::Public, Modifier::Abstract];

    let mut decls = vec![
        ClassDecl::class("java.lang", "Object").root(),
        ClassDecl::interface("java.lang", "Cloneable"),
        ClassDecl::interface("java.io", "Serializable"),
        ClassDecl::interface("java.lang", "Comparable").type_param("T"),
        ClassDecl::interface("java.lang", "CharSequence"),
        ClassDecl::interface("java.lang", "Iterable").type_param("T"),
        ClassDecl::class("java.lang", "String")
            .modifiers(&public_final)
            .implements("java.io.Serializable")
            .implements("java.lang.Comparable<java.lang.String>")
            .implements("java.lang.CharSequence"),
        ClassDecl::class("java.lang", "Number")
            .modifiers(&public_abstract)
            .implements("java.io.Serializable"),
    ];

    for (name, numeric) in BOXES {
        let qualified = format!("java.lang.{}", name);
        let mut decl = ClassDecl::class("java.lang", name)
            .modifiers(&public_final)
            .implements(&format!("java.lang.Comparable<{}>", qualified));
        decl = if *numeric {
            decl.extends("java.lang.Number")
        } else {
            decl.implements("java.io.Serializable")
        };
        decls.push(decl);
    }

    decls.extend([
        ClassDecl::interface("java.util", "Collection")
            .type_param("E")
            .implements("java.lang.Iterable<E>"),
        ClassDecl::interface("java.util", "List")
            .type_param("E")
            .implements("java.util.Collection<E>"),
        ClassDecl::class("java.util", "AbstractCollection")
            .modifiers(&public_abstract)
            .type_param("E")
            .implements("java.util.Collection<E>"),
        ClassDecl::class("java.util", "AbstractList")
            .modifiers(&public_abstract)
            .type_param("E")
            .extends("java.util.AbstractCollection<E>")
            .implements("java.util.List<E>"),
        ClassDecl::class("java.util", "ArrayList")
            .modifiers(&public)
            .type_param("E")
            .extends("java.util.AbstractList<E>")
            .implements("java.util.List<E>")
            .implements("java.lang.Cloneable")
            .implements("java.io.Serializable"),
        ClassDecl::class("java.util", "LinkedList")
            .modifiers(&public)
            .type_param("E")
            .extends("java.util.AbstractList<E>")
            .implements("java.util.List<E>")
            .implements("java.lang.Cloneable")
            .implements("java.io.Serializable"),
        ClassDecl::interface("android.os", "Parcelable"),
        ClassDecl::class("android.os", "Bundle")
            .modifiers(&public_final)
            .implements("java.lang.Cloneable")
            .implements("android.os.Parcelable"),
        ClassDecl::class("android.util", "SparseArray")
            .modifiers(&public)
            .type_param("E")
            .implements("java.lang.Cloneable"),
    ]);

    decls
}

impl ClassTable {
    /// A table pre-populated with the platform classes
    pub fn with_platform() -> Result<Self> {
        let mut table = ClassTable::new();
        for decl in platform_decls() {
            table.define(decl)?;
        }
        log::debug!("symtab: platform seeded with {} classes", table.len());
        Ok(table)
    }
}
