use std::fmt;

use jnigen_lang_printer::theme::ThemeExt;
use jnigen_lang_printer::{Alloc, Builder, Print, PrintCfg};
use pretty::DocAllocator;
use serde_derive::Deserialize;

use crate::types::JavaType;

/// The kind of the element that carries the natives annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Interface,
    Class,
    Enum,
    Annotation,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Interface => write!(f, "interface"),
            ElementKind::Class => write!(f, "class"),
            ElementKind::Enum => write!(f, "enum"),
            ElementKind::Annotation => write!(f, "annotation"),
        }
    }
}

/// Identity of a natives interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceId {
    pub package: String,
    pub enclosing: Option<String>,
    pub name: String,
}

impl InterfaceId {
    /// The fully-qualified name of the enclosing type, if there is one.
    pub fn enclosing_qualified(&self) -> Option<String> {
        self.enclosing.as_ref().map(|enclosing| qualify(&self.package, enclosing))
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.enclosing_qualified() {
            Some(outer) => write!(f, "{outer}.{}", self.name),
            None => write!(f, "{}", qualify(&self.package, &self.name)),
        }
    }
}

/// Prefix `name` with `package` unless the package is the unnamed package.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() { name.to_owned() } else { format!("{package}.{name}") }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub typ: JavaType,
}

impl Print for Param {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let Param { name, typ } = self;
        typ.print(cfg, alloc).append(alloc.space()).append(alloc.ident(name.as_str()))
    }
}

/// A method declared in a natives interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub ret: JavaType,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, ret: JavaType) -> Self {
        MethodDecl { name: name.into(), params: Vec::new(), ret }
    }

    pub fn param(mut self, name: impl Into<String>, typ: JavaType) -> Self {
        self.params.push(Param { name: name.into(), typ });
        self
    }
}

/// A member of a natives interface. Only methods are allowed, the other variants
/// exist so that they can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Method(MethodDecl),
    Field { name: String, typ: JavaType },
    Type { name: String },
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Method(method) => &method.name,
            Member::Field { name, .. } => name,
            Member::Type { name } => name,
        }
    }
}

/// An element annotated for native binding, together with everything it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub package: String,
    /// The simple name of the type the interface is nested in.
    pub enclosing: Option<String>,
    pub name: String,
    pub kind: ElementKind,
    pub is_public: bool,
    pub members: Vec<Member>,
}

impl InterfaceDecl {
    pub fn new(
        package: impl Into<String>,
        enclosing: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        InterfaceDecl {
            package: package.into(),
            enclosing: Some(enclosing.into()),
            name: name.into(),
            kind: ElementKind::Interface,
            is_public: false,
            members: Vec::new(),
        }
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.members.push(Member::Method(method));
        self
    }

    pub fn id(&self) -> InterfaceId {
        InterfaceId {
            package: self.package.clone(),
            enclosing: self.enclosing.clone(),
            name: self.name.clone(),
        }
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }
}

/// All declarations discovered in one processing round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    /// Where the declarations were read from, used in log output only.
    pub source_name: Option<String>,
    pub interfaces: Vec<InterfaceDecl>,
}

impl Round {
    pub fn new(interfaces: Vec<InterfaceDecl>) -> Self {
        Round { source_name: None, interfaces }
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
