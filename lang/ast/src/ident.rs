/// Reserved words and literals of the Java language.
///
/// See <https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9>.
const JAVA_RESERVED_WORDS: [&str; 53] = [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
];

/// Whether `s` is a single Java identifier: non-empty, does not start with a digit,
/// consists of letters, digits, `_` and `$`, and is not a reserved word.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !JAVA_RESERVED_WORDS.contains(&s)
}

/// Whether `s` is a dot-separated sequence of Java identifiers, e.g. `org.chromium.base`.
///
/// The empty string is the unnamed package and is accepted.
pub fn is_package_name(s: &str) -> bool {
    s.is_empty() || s.split('.').all(is_java_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_java_identifier("foo"));
        assert!(is_java_identifier("_foo_1"));
        assert!(is_java_identifier("$bar"));
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("1foo"));
        assert!(!is_java_identifier("foo-bar"));
        assert!(!is_java_identifier("class"));
    }

    #[test]
    fn test_package_names() {
        assert!(is_package_name(""));
        assert!(is_package_name("org.chromium.base"));
        assert!(!is_package_name("org..base"));
        assert!(!is_package_name("org.1chromium"));
    }
}
