// Marker annotation that opts a field into Bundle save/restore
pub const ICICLE_ANNOTATION: &str = "icepick.Icicle";

// Environment overrides read by Config::from_env
pub const ENV_MARKER_ANNOTATION: &str = "ICICLE_MARKER_ANNOTATION";
pub const ENV_DROP_UNMAPPABLE: &str = "ICICLE_DROP_UNMAPPABLE";
pub const ENV_DEBUG: &str = "ICICLE_DEBUG";

// Diagnostics, reported verbatim to the host messager
pub const MSG_INVALID_FIELD_MODIFIER: &str = "Field must not be private, static or final";
pub const MSG_PRIVATE_ENCLOSING_CLASS: &str = "Enclosing class must not be private";

pub fn msg_unmappable_type(type_name: &str) -> String {
    format!("Don't know how to put a {} inside a Bundle", type_name)
}

// Only this wildcard form is understood by the type spelling grammar
pub const WILDCARD_EXTENDS_PREFIX: &str = "? extends ";

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";

// Container types first, then primitives, arrays, platform classes and
// the Serializable catch-all. Lookup is first-match, so order matters:
// ArrayList<Integer> must be tried before ArrayList<? extends Parcelable>.
pub const BUNDLE_DICTIONARY: &[(&str, &str)] = &[
    ("java.util.ArrayList<java.lang.Integer>", "IntegerArrayList"),
    ("java.util.ArrayList<java.lang.String>", "StringArrayList"),
    ("java.util.ArrayList<java.lang.CharSequence>", "CharSequenceArrayList"),
    ("java.util.ArrayList<? extends android.os.Parcelable>", "ParcelableArrayList"),
    ("android.util.SparseArray<? extends android.os.Parcelable>", "SparseParcelableArray"),
    ("short", "Short"),
    ("short[]", "ShortArray"),
    ("int", "Int"),
    ("int[]", "IntArray"),
    ("long", "Long"),
    ("long[]", "LongArray"),
    ("float", "Float"),
    ("float[]", "FloatArray"),
    ("double", "Double"),
    ("double[]", "DoubleArray"),
    ("byte", "Byte"),
    ("byte[]", "ByteArray"),
    ("boolean", "Boolean"),
    ("boolean[]", "BooleanArray"),
    ("char", "Char"),
    ("char[]", "CharArray"),
    ("java.lang.String", "String"),
    ("java.lang.String[]", "StringArray"),
    ("android.os.Bundle", "Bundle"),
    ("java.lang.CharSequence", "CharSequence"),
    ("java.lang.CharSequence[]", "CharSequenceArray"),
    ("android.os.Parcelable", "Parcelable"),
    ("android.os.Parcelable[]", "ParcelableArray"),
    ("java.io.Serializable", "Serializable"),
];

// Bundle getters returning a supertype of the stored value.
// ParcelableArrayList is generic on the getter side and needs no cast.
pub const REQUIRE_TYPE_CAST_METHODS: &[&str] = &[
    "IntegerArrayList",
    "StringArrayList",
    "CharSequenceArrayList",
    "SparseParcelableArray",
    "CharSequence",
    "CharSequenceArray",
    "Parcelable",
    "ParcelableArray",
    "Serializable",
];
