// End-to-end conversion scenarios against the in-memory class table
mod common;

use common::{convert_round, field_triples, platform, CountingOracle, Sink, ICICLE};
use icicle_processor::model::Modifier;
use icicle_processor::processor::{AnnotationsConverter, DiagnosticCode, LoggingMessager, Messager, Subject};
use icicle_processor::symtab::{ClassDecl, ClassId, ElementId, MemberDecl};
use icicle_processor::{Config, Error, TypeOracle};

fn icicle(name: &str, ty: &str) -> MemberDecl {
    MemberDecl::field(name, ty).annotated(ICICLE)
}

#[test]
fn primitive_and_string_fields() {
    let mut table = platform();
    table
        .define(ClassDecl::class("a.b", "C").field(icicle("x", "int")).field(icicle("s", "java.lang.String")))
        .unwrap();

    let (plans, sink) = convert_round(&table);
    assert!(sink.is_empty());
    assert_eq!(plans.len(), 1);

    let group = plans.get("a.b.C").unwrap();
    assert_eq!(group.plan.package, "a.b");
    assert_eq!(group.plan.sanitized_name, "C");
    assert_eq!(group.plan.original_nested_name, "C");
    assert_eq!(group.plan.parent_fqcn, None);
    assert_eq!(
        field_triples(&plans, "a.b.C"),
        vec![
            ("x".to_string(), Some("Int"), String::new()),
            ("s".to_string(), Some("String"), String::new()),
        ]
    );
}

#[test]
fn char_sequence_needs_cast() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "C").field(icicle("cs", "java.lang.CharSequence"))).unwrap();

    let (plans, _) = convert_round(&table);
    assert_eq!(
        field_triples(&plans, "a.C"),
        vec![("cs".to_string(), Some("CharSequence"), "(java.lang.CharSequence)".to_string())]
    );
}

#[test]
fn generic_string_list() {
    let mut table = platform();
    table
        .define(ClassDecl::class("a", "C").field(icicle("list", "java.util.ArrayList<java.lang.String>")))
        .unwrap();

    let (plans, _) = convert_round(&table);
    assert_eq!(
        field_triples(&plans, "a.C"),
        vec![(
            "list".to_string(),
            Some("StringArrayList"),
            "(java.util.ArrayList<java.lang.String>)".to_string()
        )]
    );
}

#[test]
fn private_field_is_rejected() {
    let mut table = platform();
    let c = table
        .define(ClassDecl::class("a", "C").field(icicle("x", "int").modifiers(&[Modifier::Private])))
        .unwrap();
    let x = table.member_named(c, "x").unwrap();

    let (plans, sink) = convert_round(&table);
    assert!(plans.is_empty());
    let diagnostics = sink.into_vec();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidFieldModifier);
    assert_eq!(diagnostics[0].message, "Field must not be private, static or final");
    assert_eq!(diagnostics[0].subject, Subject::Element(x));
}

#[test]
fn nested_class_names_are_sanitized() {
    let mut table = platform();
    table.define(ClassDecl::class("a.b", "Outer")).unwrap();
    table.define(ClassDecl::class("a.b", "Outer.Inner").field(icicle("x", "long"))).unwrap();

    let (plans, _) = convert_round(&table);
    let group = plans.get("a.b.Outer$Inner").unwrap();
    assert_eq!(group.plan.original_nested_name, "Outer.Inner");
    assert_eq!(group.plan.sanitized_name, "Outer$Inner");
    assert_eq!(group.plan.package, "a.b");
}

#[test]
fn parent_from_another_source_set_is_scanned_once() {
    let mut table = platform();
    let base = table
        .define(ClassDecl::class("a", "Base").from_classpath().field(icicle("saved", "int")))
        .unwrap();
    table.define(ClassDecl::class("a", "Sub").extends("a.Base").field(icicle("x", "int"))).unwrap();
    table.define(ClassDecl::class("a", "Sub2").extends("a.Base").field(icicle("y", "int"))).unwrap();

    let oracle = CountingOracle::new(&table);
    let mut sink = Sink::new();
    let plans = icicle_processor::convert(&oracle, table.elements_annotated_with(ICICLE), &mut sink).unwrap();

    assert!(sink.is_empty());
    assert_eq!(plans.len(), 2);
    assert!(plans.get("a.Base").is_none());
    assert_eq!(plans.get("a.Sub").unwrap().plan.parent_fqcn.as_deref(), Some("a.Base"));
    assert_eq!(plans.get("a.Sub2").unwrap().plan.parent_fqcn.as_deref(), Some("a.Base"));
    assert_eq!(oracle.scans_of(base), 1);
}

#[test]
fn plain_ancestors_are_scanned_once_per_round() {
    let mut table = platform();
    let plain = table.define(ClassDecl::class("a", "Plain").field(MemberDecl::field("n", "int"))).unwrap();
    table.define(ClassDecl::class("a", "Left").extends("a.Plain").field(icicle("l", "int"))).unwrap();
    table.define(ClassDecl::class("a", "Right").extends("a.Plain").field(icicle("r", "int"))).unwrap();

    let oracle = CountingOracle::new(&table);
    let mut sink = Sink::new();
    let plans = icicle_processor::convert(&oracle, table.elements_annotated_with(ICICLE), &mut sink).unwrap();

    assert!(plans.plans().all(|p| p.parent_fqcn.is_none()));
    assert_eq!(oracle.scans_of(plain), 1);
    assert_eq!(oracle.scans_of(table.lookup("java.lang.Object").unwrap()), 1);

    // A new round starts with empty memo sets
    icicle_processor::convert(&oracle, table.elements_annotated_with(ICICLE), &mut sink).unwrap();
    assert_eq!(oracle.scans_of(plain), 2);
}

#[test]
fn superclass_in_same_round_is_parent() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Base").field(icicle("b", "int"))).unwrap();
    table.define(ClassDecl::class("a", "Mid").extends("a.Base")).unwrap();
    table.define(ClassDecl::class("a", "Sub").extends("a.Mid").field(icicle("s", "int"))).unwrap();

    // Subclass first: the parent is still found through the seeded set
    let mut elements = table.elements_annotated_with(ICICLE);
    elements.reverse();
    let mut sink = Sink::new();
    let plans = icicle_processor::convert(&table, elements, &mut sink).unwrap();

    let order: Vec<String> = plans.plans().map(|p| p.fqcn()).collect();
    assert_eq!(order, vec!["a.Sub", "a.Base"]);
    let base_fqcn = plans.get("a.Base").unwrap().plan.fqcn();
    assert_eq!(plans.get("a.Sub").unwrap().plan.parent_fqcn, Some(base_fqcn));
    assert_eq!(plans.get("a.Base").unwrap().plan.parent_fqcn, None);
}

#[test]
fn empty_round() {
    let table = platform();
    let (plans, sink) = convert_round(&table);
    assert!(plans.is_empty());
    assert!(sink.is_empty());
}

#[test]
fn private_enclosing_class_reported_once_and_kept() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Outer")).unwrap();
    let hidden = table
        .define(
            ClassDecl::class("a", "Outer.Hidden")
                .modifiers(&[Modifier::Private, Modifier::Static])
                .field(icicle("x", "int"))
                .field(icicle("y", "float")),
        )
        .unwrap();

    let (plans, sink) = convert_round(&table);
    let reported: Vec<_> = sink.with_code(DiagnosticCode::PrivateEnclosingClass).collect();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].message, "Enclosing class must not be private");
    assert_eq!(reported[0].subject, Subject::Class(hidden));
    assert_eq!(plans.get("a.Outer$Hidden").unwrap().fields.len(), 2);
}

#[test]
fn diagnostics_accumulate_in_input_order() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Opaque")).unwrap();
    table
        .define(
            ClassDecl::class("a", "C")
                .field(icicle("a", "int").modifiers(&[Modifier::Static]))
                .field(icicle("b", "a.Opaque"))
                .field(icicle("c", "int").modifiers(&[Modifier::Final]))
                .field(icicle("d", "double")),
        )
        .unwrap();

    let (plans, sink) = convert_round(&table);
    assert_eq!(
        sink.messages(),
        vec![
            "Field must not be private, static or final",
            "Don't know how to put a a.Opaque inside a Bundle",
            "Field must not be private, static or final",
        ]
    );
    // The unmappable field stays in the plan with no suffix
    assert_eq!(
        field_triples(&plans, "a.C"),
        vec![
            ("b".to_string(), None, String::new()),
            ("d".to_string(), Some("Double"), String::new()),
        ]
    );
}

#[test]
fn drop_unmappable_fields_by_config() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Opaque")).unwrap();
    table
        .define(ClassDecl::class("a", "C").field(icicle("b", "a.Opaque")).field(icicle("d", "double")))
        .unwrap();

    let converter = AnnotationsConverter::new(&table).with_config(Config::new().with_drop_unmappable_fields(true));
    let mut sink = Sink::new();
    let plans = converter.convert(table.elements_annotated_with(ICICLE), &mut sink).unwrap();
    assert_eq!(sink.with_code(DiagnosticCode::UnmappableFieldType).count(), 1);
    assert_eq!(field_triples(&plans, "a.C"), vec![("d".to_string(), Some("Double"), String::new())]);
}

#[test]
fn custom_marker_annotation_finds_ancestors() {
    let marker = "com.example.State";
    let mut table = platform();
    table
        .define(
            ClassDecl::class("lib", "Base")
                .from_classpath()
                .field(MemberDecl::field("kept", "int").annotated(marker)),
        )
        .unwrap();
    table
        .define(ClassDecl::class("app", "Screen").extends("lib.Base").field(MemberDecl::field("x", "int").annotated(marker)))
        .unwrap();

    let converter = AnnotationsConverter::new(&table).with_config(Config::new().with_marker_annotation(marker));
    let mut sink = Sink::new();
    let plans = converter.convert(table.elements_annotated_with(marker), &mut sink).unwrap();
    assert_eq!(plans.get("app.Screen").unwrap().plan.parent_fqcn.as_deref(), Some("lib.Base"));

    // With the default marker the classpath ancestor is not recognised
    let plans = icicle_processor::convert(&table, table.elements_annotated_with(marker), &mut sink).unwrap();
    assert_eq!(plans.get("app.Screen").unwrap().plan.parent_fqcn, None);
}

#[test]
fn invalid_config_is_a_hard_error() {
    let table = platform();
    let converter = AnnotationsConverter::new(&table).with_config(Config::new().with_marker_annotation("icepick..Icicle"));
    let mut sink = Sink::new();
    let err = converter.convert(Vec::new(), &mut sink).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn default_package_and_type_variable_fields() {
    let mut table = platform();
    table
        .define(
            ClassDecl::class("", "Holder")
                .bounded_type_param("T", "android.os.Parcelable")
                .field(icicle("item", "T"))
                .field(icicle("items", "java.util.ArrayList<T>")),
        )
        .unwrap();

    let (plans, sink) = convert_round(&table);
    assert!(sink.is_empty());
    let group = plans.get("Holder").unwrap();
    assert_eq!(group.plan.package, "");
    assert_eq!(group.plan.original_nested_name, "Holder");
    assert_eq!(
        field_triples(&plans, "Holder"),
        vec![
            ("item".to_string(), Some("Parcelable"), "(T)".to_string()),
            ("items".to_string(), Some("ParcelableArrayList"), String::new()),
        ]
    );
}

#[test]
fn works_through_dyn_and_logging_messagers() {
    let mut table = platform();
    table
        .define(ClassDecl::class("a", "C").field(icicle("x", "int").modifiers(&[Modifier::Private])).field(icicle("y", "int")))
        .unwrap();

    let mut logger = LoggingMessager::new();
    let messager: &mut dyn Messager<ElementId, ClassId> = &mut logger;
    let plans = icicle_processor::convert(&table, table.elements_annotated_with(ICICLE), messager).unwrap();
    assert_eq!(plans.field_count(), 1);
    assert_eq!(logger.reported(), 1);
}

#[test]
fn malformed_elements_are_contract_violations() {
    let mut table = platform();
    let orphan = table.define_detached(MemberDecl::field("loose", "int").annotated(ICICLE)).unwrap();
    let mut sink = Sink::new();
    let err = icicle_processor::convert(&table, vec![orphan], &mut sink).unwrap_err();
    assert_eq!(err, Error::NotEnclosedByClass { element: "loose".to_string() });
}

#[test]
fn converting_twice_is_stable() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Base").from_classpath().field(icicle("b", "int"))).unwrap();
    table
        .define(
            ClassDecl::class("a", "Sub")
                .extends("a.Base")
                .field(icicle("names", "java.util.ArrayList<java.lang.CharSequence>"))
                .field(icicle("bad", "java.util.List<java.lang.String>")),
        )
        .unwrap();
    table.define(ClassDecl::class("a", "Sub.Nested").field(icicle("flags", "boolean[]"))).unwrap();

    let (first, first_sink) = convert_round(&table);
    let (second, second_sink) = convert_round(&table);
    assert_eq!(first, second);
    assert_eq!(first_sink.into_vec(), second_sink.into_vec());
    // the class table itself is never touched
    assert_eq!(table.qualified_name(&table.lookup("a.Sub").unwrap()), "a.Sub");
}

#[test]
fn dropped_class_is_not_a_parent() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Opaque")).unwrap();
    table.define(ClassDecl::class("a", "Root").field(icicle("r", "int"))).unwrap();
    table
        .define(ClassDecl::class("a", "Base").extends("a.Root").field(icicle("o", "a.Opaque")))
        .unwrap();
    table.define(ClassDecl::class("a", "Sub").extends("a.Base").field(icicle("x", "int"))).unwrap();

    let converter = AnnotationsConverter::new(&table).with_config(Config::new().with_drop_unmappable_fields(true));
    let mut sink = Sink::new();
    let plans = converter.convert(table.elements_annotated_with(ICICLE), &mut sink).unwrap();

    assert!(plans.get("a.Base").is_none());
    assert_eq!(plans.get("a.Sub").unwrap().plan.parent_fqcn.as_deref(), Some("a.Root"));

    // Kept with an empty suffix, the class still has a helper to delegate to
    let (plans, _) = convert_round(&table);
    assert!(plans.get("a.Base").is_some());
    assert_eq!(plans.get("a.Sub").unwrap().plan.parent_fqcn.as_deref(), Some("a.Base"));
}

#[test]
fn partly_dropped_class_keeps_its_helper() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "Opaque")).unwrap();
    table
        .define(ClassDecl::class("a", "Base").field(icicle("o", "a.Opaque")).field(icicle("n", "long")))
        .unwrap();
    table.define(ClassDecl::class("a", "Sub").extends("a.Base").field(icicle("x", "int"))).unwrap();

    let converter = AnnotationsConverter::new(&table).with_config(Config::new().with_drop_unmappable_fields(true));
    let mut sink = Sink::new();
    let plans = converter.convert(table.elements_annotated_with(ICICLE), &mut sink).unwrap();
    assert_eq!(field_triples(&plans, "a.Base"), vec![("n".to_string(), Some("Long"), String::new())]);
    assert_eq!(plans.get("a.Sub").unwrap().plan.parent_fqcn.as_deref(), Some("a.Base"));
}

#[test]
fn primitive_superclass_is_a_contract_violation() {
    let mut table = platform();
    table.define(ClassDecl::class("a", "X").extends("int").field(icicle("n", "int"))).unwrap();

    let mut sink = Sink::new();
    let err = icicle_processor::convert(&table, table.elements_annotated_with(ICICLE), &mut sink).unwrap_err();
    assert_eq!(
        err,
        Error::NotADeclaredType { class: "a.X".to_string(), mirror: "int".to_string() }
    );
}

#[test]
fn cyclic_bounds_never_reach_the_converter() {
    let mut table = platform();
    let err = table
        .define(
            ClassDecl::class("a", "C")
                .bounded_type_param("T", "U")
                .bounded_type_param("U", "T")
                .field(icicle("x", "T")),
        )
        .unwrap_err();
    assert!(matches!(err, Error::TypeSpec { .. }));

    let (plans, sink) = convert_round(&table);
    assert!(plans.is_empty());
    assert!(sink.is_empty());
}
