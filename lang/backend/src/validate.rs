use std::collections::{HashMap, HashSet};

use jnigen_lang_ast::{
    ElementKind, InterfaceDecl, Member, MethodDecl, is_java_identifier, is_package_name, qualify,
};

use crate::config::GeneratorConfig;
use crate::naming::wrapper_class_name;
use crate::result::GenerateError;
use crate::table::BindingTable;

/// An interface that passed validation.
pub(crate) struct Validated<'a> {
    pub decl: &'a InterfaceDecl,
    pub enclosing: &'a str,
    /// Qualified name of the wrapper class to generate.
    pub wrapper_class: String,
    /// The methods to bind, i.e. the first declaration of every method name.
    pub methods: Vec<&'a MethodDecl>,
}

/// The classes of a processing unit, by qualified name, with what each is generated for.
#[derive(Debug)]
pub(crate) struct ClassNames {
    wrapper_suffix: String,
    owners: HashMap<String, String>,
}

impl ClassNames {
    pub fn new(config: &GeneratorConfig) -> Self {
        let table = config.table_class_qualified();
        let owners = HashMap::from([(table, "the binding table".to_owned())]);
        ClassNames { wrapper_suffix: config.wrapper_suffix.clone(), owners }
    }

    pub fn wrapper_of(&self, iface: &InterfaceDecl, enclosing: &str) -> String {
        qualify(&iface.package, &wrapper_class_name(enclosing, &self.wrapper_suffix))
    }

    pub fn owner(&self, class: &str) -> Option<&str> {
        self.owners.get(class).map(String::as_str)
    }

    pub fn claim(&mut self, class: String, owner: String) {
        self.owners.entry(class).or_insert(owner);
    }
}

/// Check `iface` and report every problem into `errors`.
///
/// Returns `None` if the interface has to be left out of the generated code. Overloaded methods
/// do not disqualify an interface: they are reported once and only the first declaration is kept.
pub(crate) fn validate_interface<'a>(
    iface: &'a InterfaceDecl,
    table: &BindingTable,
    classes: &ClassNames,
    errors: &mut Vec<GenerateError>,
) -> Option<Validated<'a>> {
    let decl = iface.id().to_string();
    let reported = errors.len();

    if iface.kind != ElementKind::Interface {
        errors.push(GenerateError::NotAnInterface { decl: decl.clone(), kind: iface.kind });
    }
    if iface.enclosing.is_none() {
        errors.push(GenerateError::NotNested { decl: decl.clone() });
    }

    check_identifiers(iface, &decl, errors);

    for member in &iface.members {
        if !matches!(member, Member::Method(_)) {
            errors.push(GenerateError::NonMethodMember {
                decl: decl.clone(),
                member: member.name().to_owned(),
            });
        }
    }

    let wrapper_class =
        iface.enclosing.as_deref().map(|enclosing| classes.wrapper_of(iface, enclosing));
    if table.contains_group(&iface.id()) {
        errors.push(GenerateError::Redeclared { decl: decl.clone() });
    } else if let Some(class) = &wrapper_class {
        if let Some(owner) = classes.owner(class) {
            errors.push(GenerateError::WrapperClash {
                decl: decl.clone(),
                class: class.clone(),
                owner: owner.to_owned(),
            });
        }
    }

    let structurally_valid = errors[reported..].iter().all(|err| !err.skips_interface());

    let mut seen = HashSet::new();
    let mut methods = Vec::new();
    let mut overloaded: Vec<String> = Vec::new();
    for method in iface.methods() {
        if seen.insert(method.name.as_str()) {
            methods.push(method);
        } else if !overloaded.contains(&method.name) {
            overloaded.push(method.name.clone());
        }
    }
    if !overloaded.is_empty() {
        errors.push(GenerateError::Overloaded { decl, names: overloaded });
    }

    match (&iface.enclosing, wrapper_class, structurally_valid) {
        (Some(enclosing), Some(wrapper_class), true) => Some(Validated {
            decl: iface,
            enclosing: enclosing.as_str(),
            wrapper_class,
            methods,
        }),
        _ => None,
    }
}

fn check_identifiers(iface: &InterfaceDecl, decl: &str, errors: &mut Vec<GenerateError>) {
    let mut invalid = |name: &str| {
        let (decl, name) = (decl.to_owned(), name.to_owned());
        errors.push(GenerateError::InvalidIdentifier { decl, name })
    };

    if !is_package_name(&iface.package) {
        invalid(&iface.package);
    }
    if let Some(enclosing) = &iface.enclosing {
        if !is_java_identifier(enclosing) {
            invalid(enclosing);
        }
    }
    if !is_java_identifier(&iface.name) {
        invalid(&iface.name);
    }
    for method in iface.methods() {
        if !is_java_identifier(&method.name) {
            invalid(&method.name);
        }
        for param in &method.params {
            if !is_java_identifier(&param.name) {
                invalid(&param.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jnigen_lang_ast::{JavaType, Primitive};

    use super::*;

    fn read(ret: JavaType) -> MethodDecl {
        MethodDecl::new("read", ret)
    }

    fn classes() -> ClassNames {
        ClassNames::new(&GeneratorConfig::default())
    }

    #[test]
    fn test_valid_interface() {
        let iface = InterfaceDecl::new("p", "Foo", "Natives").method(read(JavaType::Void));
        let mut errors = vec![];
        let validated =
            validate_interface(&iface, &BindingTable::new(), &classes(), &mut errors).unwrap();
        assert!(errors.is_empty());
        assert_eq!(validated.enclosing, "Foo");
        assert_eq!(validated.wrapper_class, "p.FooJni");
        assert_eq!(validated.methods.len(), 1);
    }

    #[test]
    fn test_overloading_is_reported_once() {
        let iface = InterfaceDecl::new("p", "Foo", "Natives")
            .method(read(JavaType::Primitive(Primitive::Int)))
            .method(read(JavaType::Void))
            .method(read(JavaType::Primitive(Primitive::Long)));
        let mut errors = vec![];
        let validated =
            validate_interface(&iface, &BindingTable::new(), &classes(), &mut errors).unwrap();

        assert_eq!(
            errors,
            vec![GenerateError::Overloaded {
                decl: "p.Foo.Natives".to_owned(),
                names: vec!["read".to_owned()]
            }]
        );
        assert_eq!(validated.methods, vec![&read(JavaType::Primitive(Primitive::Int))]);
    }

    #[test]
    fn test_structural_errors_skip_interface() {
        let mut iface = InterfaceDecl::new("p", "Foo", "Natives");
        iface.kind = ElementKind::Class;
        iface.enclosing = None;
        iface.members.push(Member::Field { name: "X".to_owned(), typ: JavaType::Void });

        let mut errors = vec![];
        let validated = validate_interface(&iface, &BindingTable::new(), &classes(), &mut errors);
        assert!(validated.is_none());
        assert_eq!(
            errors,
            vec![
                GenerateError::NotAnInterface {
                    decl: "p.Natives".to_owned(),
                    kind: ElementKind::Class
                },
                GenerateError::NotNested { decl: "p.Natives".to_owned() },
                GenerateError::NonMethodMember {
                    decl: "p.Natives".to_owned(),
                    member: "X".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_identifiers() {
        let bad = MethodDecl::new("new", JavaType::Void)
            .param("x-y", JavaType::Primitive(Primitive::Int));
        let iface = InterfaceDecl::new("org.1chromium", "Foo", "Natives").method(bad);
        let mut errors = vec![];
        let validated = validate_interface(&iface, &BindingTable::new(), &classes(), &mut errors);
        assert!(validated.is_none());
        let names: Vec<_> = errors
            .iter()
            .map(|err| match err {
                GenerateError::InvalidIdentifier { name, .. } => name.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(names, vec!["org.1chromium", "new", "x-y"]);
    }

    #[test]
    fn test_redeclared_interface() {
        let iface = InterfaceDecl::new("p", "Foo", "Natives");
        let mut table = BindingTable::new();
        table.insert_group(iface.id(), false);

        let mut errors = vec![];
        assert!(validate_interface(&iface, &table, &classes(), &mut errors).is_none());
        assert_eq!(errors, vec![GenerateError::Redeclared { decl: "p.Foo.Natives".to_owned() }]);
    }

    #[test]
    fn test_wrapper_class_already_generated() {
        let first =
            InterfaceDecl::new("p", "Foo", "A").method(MethodDecl::new("a", JavaType::Void));
        let second =
            InterfaceDecl::new("p", "Foo", "B").method(MethodDecl::new("b", JavaType::Void));
        let mut classes = classes();
        let mut errors = vec![];

        let validated = validate_interface(&first, &BindingTable::new(), &classes, &mut errors);
        let wrapper_class = validated.unwrap().wrapper_class;
        assert_eq!(wrapper_class, "p.FooJni");
        classes.claim(wrapper_class, first.id().to_string());

        assert!(validate_interface(&second, &BindingTable::new(), &classes, &mut errors).is_none());
        assert_eq!(
            errors,
            vec![GenerateError::WrapperClash {
                decl: "p.Foo.B".to_owned(),
                class: "p.FooJni".to_owned(),
                owner: "p.Foo.A".to_owned(),
            }]
        );

        let other_package = InterfaceDecl::new("q", "Foo", "B");
        let mut errors = vec![];
        let validated =
            validate_interface(&other_package, &BindingTable::new(), &classes, &mut errors);
        assert!(validated.is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_wrapper_class_shadows_table_class() {
        let iface = InterfaceDecl::new("org.chromium.base.natives", "GEN_", "Natives");
        let config = GeneratorConfig { wrapper_suffix: "JNI".to_owned(), ..Default::default() };
        let classes = ClassNames::new(&config);
        let mut errors = vec![];
        assert!(validate_interface(&iface, &BindingTable::new(), &classes, &mut errors).is_none());
        assert!(matches!(
            &errors[..],
            [GenerateError::WrapperClash { owner, .. }] if owner == "the binding table"
        ));
    }
}
