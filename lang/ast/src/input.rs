//! Declaration files.
//!
//! A declaration file describes the natives interfaces discovered in one round:
//!
//! ```toml
//! [[interface]]
//! package   = "org.chromium.foo"
//! enclosing = "Foo"
//! name      = "Natives"
//! public    = true
//!
//! [[interface.method]]
//! name    = "bar"
//! params  = [{ name = "x", type = "int" }]
//! returns = "int"
//! ```

use serde_derive::Deserialize;

use crate::decls::*;
use crate::result::{ParseError, TypeParseError};
use crate::types::JavaType;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRound {
    #[serde(default, rename = "interface")]
    interfaces: Vec<RawInterface>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInterface {
    #[serde(default)]
    package: String,
    #[serde(default)]
    enclosing: Option<String>,
    name: String,
    #[serde(default)]
    kind: ElementKind,
    #[serde(default)]
    public: bool,
    #[serde(default, rename = "method")]
    methods: Vec<RawMethod>,
    #[serde(default, rename = "field")]
    fields: Vec<RawField>,
    #[serde(default, rename = "type")]
    types: Vec<RawNestedType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMethod {
    name: String,
    #[serde(default)]
    params: Vec<RawParam>,
    #[serde(default = "default_return")]
    returns: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParam {
    name: String,
    #[serde(rename = "type")]
    typ: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    typ: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNestedType {
    name: String,
}

fn default_return() -> String {
    "void".to_owned()
}

/// Parse the declaration file `text`. `source_name` is only used in error messages.
pub fn parse_round(source_name: &str, text: &str) -> Result<Round, ParseError> {
    let raw: RawRound = toml::from_str(text).map_err(|err| ParseError::Syntax {
        source_name: source_name.to_owned(),
        message: err.to_string(),
    })?;

    let interfaces = raw
        .interfaces
        .into_iter()
        .map(|iface| iface.into_decl(source_name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Round { source_name: Some(source_name.to_owned()), interfaces })
}

impl RawInterface {
    fn into_decl(self, source_name: &str) -> Result<InterfaceDecl, ParseError> {
        let RawInterface { package, enclosing, name, kind, public, methods, fields, types } = self;
        let id = InterfaceId { package, enclosing, name };

        let mut members = Vec::with_capacity(methods.len() + fields.len() + types.len());
        for method in methods {
            members.push(Member::Method(method.into_decl(source_name, &id)?));
        }
        for RawField { name, typ } in fields {
            let typ = parse_type(source_name, &format!("{id}.{name}"), &typ)?;
            members.push(Member::Field { name, typ });
        }
        for RawNestedType { name } in types {
            members.push(Member::Type { name });
        }

        let InterfaceId { package, enclosing, name } = id;
        Ok(InterfaceDecl { package, enclosing, name, kind, is_public: public, members })
    }
}

impl RawMethod {
    fn into_decl(self, source_name: &str, owner: &InterfaceId) -> Result<MethodDecl, ParseError> {
        let RawMethod { name, params, returns } = self;
        let decl = format!("{owner}.{name}");

        let params = params
            .into_iter()
            .map(|RawParam { name, typ: raw }| {
                let typ = parse_type(source_name, &decl, &raw)?;
                if typ.is_void() {
                    return Err(ParseError::InvalidType {
                        source_name: source_name.to_owned(),
                        decl: decl.clone(),
                        typ: raw,
                        reason: TypeParseError::VoidParam,
                    });
                }
                Ok(Param { name, typ })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        let ret = parse_type(source_name, &decl, &returns)?;

        Ok(MethodDecl { name, params, ret })
    }
}

fn parse_type(source_name: &str, decl: &str, typ: &str) -> Result<JavaType, ParseError> {
    typ.parse().map_err(|reason| ParseError::InvalidType {
        source_name: source_name.to_owned(),
        decl: decl.to_owned(),
        typ: typ.to_owned(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use crate::types::{Primitive, STRING};

    use super::*;

    const FOO: &str = r#"
[[interface]]
package = "org.chromium.foo"
enclosing = "Foo"
name = "Natives"
public = true

[[interface.method]]
name = "bar"
params = [{ name = "x", type = "int" }, { name = "s", type = "java.lang.String" }]
returns = "int"

[[interface.method]]
name = "reset"

[[interface.field]]
name = "COUNT"
type = "int"
"#;

    #[test]
    fn test_parse_interface() {
        let round = parse_round("foo.toml", FOO).unwrap();
        assert_eq!(round.source_name.as_deref(), Some("foo.toml"));
        assert_eq!(round.interfaces.len(), 1);

        let iface = &round.interfaces[0];
        assert_eq!(iface.id().to_string(), "org.chromium.foo.Foo.Natives");
        assert_eq!(iface.kind, ElementKind::Interface);
        assert!(iface.is_public);

        let expected = MethodDecl::new("bar", JavaType::Primitive(Primitive::Int))
            .param("x", JavaType::Primitive(Primitive::Int))
            .param("s", JavaType::declared(STRING));
        assert_eq!(iface.members[0], Member::Method(expected));
        assert_eq!(iface.members[1], Member::Method(MethodDecl::new("reset", JavaType::Void)));
        assert_eq!(
            iface.members[2],
            Member::Field { name: "COUNT".to_owned(), typ: JavaType::Primitive(Primitive::Int) }
        );
    }

    #[test]
    fn test_parse_kind_and_missing_enclosing() {
        let text = "[[interface]]\nname = \"Loose\"\nkind = \"class\"\n";
        let round = parse_round("loose.toml", text).unwrap();
        let iface = &round.interfaces[0];
        assert_eq!(iface.kind, ElementKind::Class);
        assert_eq!(iface.enclosing, None);
        assert_eq!(iface.package, "");
    }

    #[test]
    fn test_empty_file_is_an_empty_round() {
        assert!(parse_round("empty.toml", "").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_type() {
        let text = r#"
[[interface]]
enclosing = "Foo"
name = "Natives"

[[interface.method]]
name = "bar"
returns = "void[]"
"#;
        let err = parse_round("bad.toml", text).unwrap_err();
        assert!(matches!(err, ParseError::InvalidType { ref typ, .. } if typ == "void[]"));
    }

    #[test]
    fn test_void_parameter() {
        let text = r#"
[[interface]]
package = "p"
enclosing = "Foo"
name = "Natives"

[[interface.method]]
name = "bar"
params = [{ name = "x", type = "void" }]
"#;
        let err = parse_round("bad.toml", text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidType { ref decl, reason: TypeParseError::VoidParam, .. }
                if decl == "p.Foo.Natives.bar"
        ));
    }

    #[test]
    fn test_unknown_key() {
        let text = "[[interface]]\nname = \"Natives\"\nsuper = \"Base\"\n";
        assert!(matches!(parse_round("bad.toml", text), Err(ParseError::Syntax { .. })));
    }
}
