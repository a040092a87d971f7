use jnigen_lang_ast::{CLASS, JavaType, STRING, THROWABLE};

/// Reference types that the native calling convention passes with their precise type.
/// Every other reference type is widened to `java.lang.Object` in the binding table.
pub const EXEMPT_TYPES: [&str; 4] = [STRING, THROWABLE, CLASS, "void"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeContext {
    /// Signatures of the flat binding table.
    BindingTable,
    /// Signatures of the forwarding methods of a wrapper class.
    Wrapper,
}

pub fn is_exempt(typ: &JavaType) -> bool {
    match typ {
        JavaType::Void => true,
        JavaType::Declared(name) => EXEMPT_TYPES.contains(&name.as_str()),
        JavaType::Primitive(_) | JavaType::Array(_) => false,
    }
}

/// Erase `typ` for the given context. Arrays are normalized element-wise.
pub fn normalize_type(typ: &JavaType, ctx: NormalizeContext) -> JavaType {
    match typ {
        JavaType::Array(element) => JavaType::array_of(normalize_type(element, ctx)),
        JavaType::Declared(_) if ctx == NormalizeContext::BindingTable && !is_exempt(typ) => {
            JavaType::object()
        }
        other => other.clone(),
    }
}
