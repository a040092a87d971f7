//! Names of the generated native methods.
//!
//! Every declared method `package.Type.method` is bound to one entry of the flat binding table.
//! The entry's name is the escaped descriptor of the method, or in hashed mode a short prefix of
//! its digest.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};

use jnigen_lang_ast::qualify;

/// Hashed names start with this letter so that they are valid identifiers.
pub const HASHED_NAME_PREFIX: char = 'M';

/// Upper bound on the length of a hashed name, prefix included.
pub const MAX_HASHED_NAME_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// The escaped descriptor, e.g. `org_chromium_Foo_bar`.
    #[default]
    Descriptor,
    /// A digest of the escaped descriptor, e.g. `MZp3a$1x`.
    Hashed,
}

/// The dotted descriptor `package.Type.method`.
pub fn method_descriptor(package: &str, type_name: &str, method_name: &str) -> String {
    format!("{}.{method_name}", qualify(package, type_name))
}

/// Escape literal underscores as `_1`, then turn the structural dots into underscores.
pub fn escape_descriptor(descriptor: &str) -> String {
    descriptor.replace('_', "_1").replace('.', "_")
}

/// Invert [`escape_descriptor`].
///
/// This is exact for descriptors made of Java identifiers, since no identifier starts with a
/// digit and so `_1` can never stem from a dot.
pub fn unescape_flat_name(flat_name: &str) -> String {
    let mut out = String::with_capacity(flat_name.len());
    let mut chars = flat_name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
        } else if chars.next_if_eq(&'1').is_some() {
            out.push('_');
        } else {
            out.push('.');
        }
    }
    out
}

pub fn compute_flat_name(
    package: &str,
    type_name: &str,
    method_name: &str,
    mode: NamingMode,
) -> String {
    let escaped = escape_descriptor(&method_descriptor(package, type_name, method_name));
    match mode {
        NamingMode::Descriptor => escaped,
        NamingMode::Hashed => hashed_name(&escaped),
    }
}

/// Truncated hashes are accepted as they are. Collisions are detected once the whole table is
/// known, see [`crate::table::BindingTable::collisions`].
fn hashed_name(escaped: &str) -> String {
    let digest = Md5::digest(escaped.as_bytes());
    let encoded = STANDARD.encode(digest);

    let mut name = String::with_capacity(MAX_HASHED_NAME_LEN);
    name.push(HASHED_NAME_PREFIX);
    name.extend(encoded.chars().filter(|c| *c != '=').map(|c| match c {
        '/' => '_',
        '+' => '$',
        c => c,
    }));
    name.truncate(MAX_HASHED_NAME_LEN);
    name
}

/// The name of the wrapper class generated for natives nested in `enclosing`.
pub fn wrapper_class_name(enclosing: &str, suffix: &str) -> String {
    format!("{enclosing}{suffix}")
}
