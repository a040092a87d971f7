use miette::Diagnostic;
use thiserror::Error;

use jnigen_lang_ast::ElementKind;

/// Errors in the declarations of a natives interface.
///
/// These are reported to the user and never abort a processing unit: the remaining interfaces are
/// still processed.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Error processing natives interface {decl}: must be an interface, but it is a {kind}")]
    #[diagnostic(code("G-001"))]
    NotAnInterface { decl: String, kind: ElementKind },
    #[error("Error processing natives interface {decl}: must be nested within a class")]
    #[diagnostic(code("G-002"))]
    NotNested { decl: String },
    #[error(
        "Error processing natives interface {decl}: overloading not supported ({})",
        .names.join(", ")
    )]
    #[diagnostic(code("G-003"), help("Only the first declaration of each method is bound."))]
    Overloaded { decl: String, names: Vec<String> },
    #[error("Error processing natives interface {decl}: non-method member `{member}` not allowed")]
    #[diagnostic(code("G-004"))]
    NonMethodMember { decl: String, member: String },
    #[error("Error processing natives interface {decl}: `{name}` is not a valid identifier")]
    #[diagnostic(code("G-005"))]
    InvalidIdentifier { decl: String, name: String },
    #[error("Error processing natives interface {decl}: declared more than once")]
    #[diagnostic(code("G-006"))]
    Redeclared { decl: String },
    #[error("Flat name collision: {first} and {second} are both bound to `{flat_name}`")]
    #[diagnostic(
        code("G-007"),
        help("Disable hashed naming or rename one of the methods.")
    )]
    FlatNameCollision { flat_name: String, first: String, second: String },
    #[error(
        "Error processing natives interface {decl}: wrapper class {class} is already generated \
         for {owner}"
    )]
    #[diagnostic(
        code("G-008"),
        help("Nest natives interfaces in different classes or change the wrapper suffix.")
    )]
    WrapperClash { decl: String, class: String, owner: String },
}

impl GenerateError {
    /// Whether the interface that caused this error is left out of the generated code entirely.
    pub fn skips_interface(&self) -> bool {
        !matches!(self, GenerateError::Overloaded { .. } | GenerateError::FlatNameCollision { .. })
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` is not a valid package name for the binding table")]
    #[diagnostic(code("C-001"))]
    InvalidTablePackage(String),
    #[error("`{0}` is not a valid class name for the binding table")]
    #[diagnostic(code("C-002"))]
    InvalidTableClass(String),
    #[error("`{0}` cannot be used as wrapper class suffix")]
    #[diagnostic(code("C-003"))]
    InvalidWrapperSuffix(String),
}

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum BackendError {
    #[error("Wrapper method {interface}.{method} has no entry in the binding table")]
    UnresolvedEntry { interface: String, method: String },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

pub type BackendResult<T = ()> = Result<T, BackendError>;
