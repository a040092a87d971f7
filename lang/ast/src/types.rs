use std::fmt;
use std::str::FromStr;

use jnigen_lang_printer::theme::ThemeExt;
use jnigen_lang_printer::tokens::BRACKETS;
use jnigen_lang_printer::{Alloc, Builder, Print, PrintCfg};

use crate::ident::is_java_identifier;
use crate::result::TypeParseError;

/// `java.lang.Object`
pub const OBJECT: &str = "java.lang.Object";

/// `java.lang.String`
pub const STRING: &str = "java.lang.String";

/// `java.lang.Throwable`
pub const THROWABLE: &str = "java.lang.Throwable";

/// `java.lang.Class`
pub const CLASS: &str = "java.lang.Class";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Primitive::ALL.into_iter().find(|p| p.keyword() == s)
    }
}

/// A Java type as it appears in a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Void,
    Primitive(Primitive),
    /// A reference type by its fully-qualified name. Generic arguments are kept verbatim,
    /// e.g. `java.util.List<java.lang.String>`.
    Declared(String),
    Array(Box<JavaType>),
}

impl JavaType {
    pub fn object() -> Self {
        JavaType::Declared(OBJECT.to_owned())
    }

    pub fn declared(name: impl Into<String>) -> Self {
        JavaType::Declared(name.into())
    }

    pub fn array_of(element: JavaType) -> Self {
        JavaType::Array(Box::new(element))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, JavaType::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Void => write!(f, "void"),
            JavaType::Primitive(p) => write!(f, "{}", p.keyword()),
            JavaType::Declared(name) => write!(f, "{name}"),
            JavaType::Array(element) => write!(f, "{element}{BRACKETS}"),
        }
    }
}

impl FromStr for JavaType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(element) = s.strip_suffix(BRACKETS) {
            let element: JavaType = element.parse()?;
            if element.is_void() {
                return Err(TypeParseError::VoidArray);
            }
            return Ok(JavaType::array_of(element));
        }
        if s.is_empty() {
            return Err(TypeParseError::Empty);
        }
        if s == "void" {
            return Ok(JavaType::Void);
        }
        if let Some(p) = Primitive::from_keyword(s) {
            return Ok(JavaType::Primitive(p));
        }
        parse_declared(s).map(JavaType::Declared)
    }
}

fn parse_declared(s: &str) -> Result<String, TypeParseError> {
    let (head, generics) = match s.find('<') {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    };
    if !head.split('.').all(is_java_identifier) {
        return Err(TypeParseError::InvalidName(s.to_owned()));
    }
    if !generics.is_empty() {
        let mut depth: usize = 0;
        for (idx, c) in generics.char_indices() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| TypeParseError::UnbalancedGenerics(s.to_owned()))?;
                    // Nothing may follow the closing bracket of the outermost argument list.
                    if depth == 0 && idx + 1 != generics.len() {
                        return Err(TypeParseError::UnbalancedGenerics(s.to_owned()));
                    }
                }
                c if c.is_alphanumeric() || "_$.,?[] ".contains(c) => {}
                _ => return Err(TypeParseError::InvalidName(s.to_owned())),
            }
        }
        if depth != 0 {
            return Err(TypeParseError::UnbalancedGenerics(s.to_owned()));
        }
    }
    Ok(s.to_owned())
}

impl Print for JavaType {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        match self {
            JavaType::Void => alloc.typ("void"),
            JavaType::Primitive(p) => alloc.typ(p.keyword()),
            JavaType::Declared(name) => alloc.typ(name.as_str()),
            JavaType::Array(element) => element.print(cfg, alloc).append(BRACKETS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        assert_eq!("int".parse(), Ok(JavaType::Primitive(Primitive::Int)));
        assert_eq!(" boolean ".parse(), Ok(JavaType::Primitive(Primitive::Boolean)));
        assert_eq!("void".parse(), Ok(JavaType::Void));
    }

    #[test]
    fn test_parse_arrays() {
        let expected =
            JavaType::array_of(JavaType::array_of(JavaType::Primitive(Primitive::Byte)));
        assert_eq!("byte[][]".parse(), Ok(expected));
        assert_eq!("void[]".parse::<JavaType>(), Err(TypeParseError::VoidArray));
    }

    #[test]
    fn test_parse_declared() {
        assert_eq!("java.lang.String".parse(), Ok(JavaType::declared(STRING)));
        assert_eq!(
            "java.util.Map<java.lang.String, int[]>".parse(),
            Ok(JavaType::declared("java.util.Map<java.lang.String, int[]>"))
        );
        assert!(matches!(
            "java.util.List<java.lang.String".parse::<JavaType>(),
            Err(TypeParseError::UnbalancedGenerics(_))
        ));
        assert!(matches!("java..Foo".parse::<JavaType>(), Err(TypeParseError::InvalidName(_))));
        assert_eq!("".parse::<JavaType>(), Err(TypeParseError::Empty));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let typ = JavaType::array_of(JavaType::declared(STRING));
        assert_eq!(typ.to_string(), "java.lang.String[]");
        assert_eq!(typ.to_string().parse(), Ok(typ));
    }
}
