use jnigen_lang_ast::{JavaType, Param};
use jnigen_lang_printer::theme::ThemeExt;
use jnigen_lang_printer::tokens::*;
use jnigen_lang_printer::util::{BracesExt, StatementExt, print_comma_separated};
use jnigen_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

use super::file::{ClassDecl, print_generated, print_members, print_modifiers};
use super::table::TESTING_FIELD;

pub const NATIVES_FIELD: &str = "mNatives";
pub const TEST_INSTANCE_FIELD: &str = "testInst";
pub const GETTER: &str = "get";
pub const TEST_SETTER: &str = "setForTesting";
pub const TEST_SETTER_PARAM: &str = "testNatives";

/// The class implementing a natives interface by forwarding to the binding table.
///
/// It holds the production instance of the interface and an optional test instance, which
/// [`GETTER`] hands out instead whenever the testing flag of the table is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperClass {
    pub name: String,
    pub is_public: bool,
    /// The implemented interface, as seen from the wrapper's package, e.g. `Foo.Natives`.
    pub interface: String,
    /// The binding table class, as seen from the wrapper's package.
    pub table_class: String,
    pub methods: Vec<ForwardingMethod>,
}

impl ClassDecl for WrapperClass {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Print for WrapperClass {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let WrapperClass { name, is_public, interface, table_class, methods } = self;
        let iface = || alloc.typ(interface.as_str());

        // private static final Foo.Natives mNatives = new FooJni();
        let natives = print_modifiers(&[PRIVATE, STATIC, FINAL], alloc)
            .append(iface())
            .append(alloc.space())
            .append(alloc.ident(NATIVES_FIELD))
            .append(alloc.space())
            .append(EQ)
            .append(alloc.space())
            .append(alloc.keyword(NEW))
            .append(alloc.space())
            .append(alloc.typ(name.as_str()))
            .append("()")
            .stmt();

        // static Foo.Natives testInst;
        let test_inst = print_modifiers(&[STATIC], alloc)
            .append(iface())
            .append(alloc.space())
            .append(alloc.ident(TEST_INSTANCE_FIELD))
            .stmt();

        let flag = alloc
            .typ(table_class.as_str())
            .append(DOT)
            .append(alloc.ident(TESTING_FIELD))
            .parens();
        let getter_body = alloc
            .keyword(IF)
            .append(alloc.space())
            .append(flag)
            .append(alloc.space())
            .append(print_return(alloc.ident(TEST_INSTANCE_FIELD), alloc).block(cfg, alloc))
            .append(alloc.hardline())
            .append(print_return(alloc.ident(NATIVES_FIELD), alloc));
        let getter = print_modifiers(&[PUBLIC, STATIC], alloc)
            .append(iface())
            .append(alloc.space())
            .append(alloc.ident(GETTER))
            .append("()")
            .append(alloc.space())
            .append(getter_body.block(cfg, alloc));

        let setter_param = iface().append(alloc.space()).append(alloc.ident(TEST_SETTER_PARAM));
        let setter_body = alloc
            .ident(TEST_INSTANCE_FIELD)
            .append(alloc.space())
            .append(EQ)
            .append(alloc.space())
            .append(alloc.ident(TEST_SETTER_PARAM))
            .stmt();
        let setter = print_modifiers(&[PUBLIC, STATIC, FINAL], alloc)
            .append(alloc.typ(VOID))
            .append(alloc.space())
            .append(alloc.ident(TEST_SETTER))
            .append(setter_param.parens())
            .append(alloc.space())
            .append(setter_body.block(cfg, alloc));

        let forwarding =
            methods.iter().map(|method| method.print_forwarding(table_class, cfg, alloc));
        let members = [natives, test_inst, getter, setter].into_iter().chain(forwarding);

        let modifiers: &[&'static str] =
            if *is_public { &[PUBLIC, FINAL, CLASS] } else { &[FINAL, CLASS] };

        print_generated(alloc)
            .append(alloc.hardline())
            .append(print_modifiers(modifiers, alloc))
            .append(alloc.typ(name.as_str()))
            .append(alloc.space())
            .append(alloc.keyword(IMPLEMENTS))
            .append(alloc.space())
            .append(iface())
            .append(alloc.space())
            .append(print_members(members, cfg, alloc).block(cfg, alloc))
    }
}

/// An override of an interface method that calls its binding table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingMethod {
    pub name: String,
    /// The declared parameters.
    pub params: Vec<Param>,
    /// The declared return type.
    pub ret: JavaType,
    /// Cast the result of the table entry back to `ret`.
    pub cast: bool,
    /// The flat name of the table entry.
    pub target: String,
}

impl ForwardingMethod {
    fn print_forwarding<'a>(
        &'a self,
        table_class: &'a str,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
    ) -> Builder<'a> {
        let ForwardingMethod { name, params, ret, cast, target } = self;

        let args = params.iter().map(|param| alloc.ident(param.name.as_str()));
        let call = alloc
            .typ(table_class)
            .append(DOT)
            .append(alloc.ident(target.as_str()))
            .append(print_comma_separated(args, cfg, alloc));

        let body = if ret.is_void() {
            call.stmt()
        } else if *cast {
            print_return(ret.print(cfg, alloc).parens().append(call), alloc)
        } else {
            print_return(call, alloc)
        };

        let params = params.iter().map(|param| param.print(cfg, alloc));

        alloc
            .annotation(OVERRIDE)
            .append(alloc.hardline())
            .append(print_modifiers(&[PUBLIC], alloc))
            .append(ret.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.ident(name.as_str()))
            .append(print_comma_separated(params, cfg, alloc))
            .append(alloc.space())
            .append(body.block(cfg, alloc))
    }
}

fn print_return<'a>(value: Builder<'a>, alloc: &'a Alloc<'a>) -> Builder<'a> {
    alloc.keyword(RETURN).append(alloc.space()).append(value).stmt()
}

#[cfg(test)]
mod tests {
    use jnigen_lang_ast::Primitive;
    use jnigen_lang_printer::PrintToString;

    use super::*;

    fn wrapper(methods: Vec<ForwardingMethod>) -> WrapperClass {
        WrapperClass {
            name: "FooJni".to_owned(),
            is_public: false,
            interface: "Foo.Natives".to_owned(),
            table_class: "GEN_JNI".to_owned(),
            methods,
        }
    }

    #[test]
    fn test_print_wrapper() {
        let bar = ForwardingMethod {
            name: "bar".to_owned(),
            params: vec![Param { name: "x".to_owned(), typ: JavaType::Primitive(Primitive::Int) }],
            ret: JavaType::Primitive(Primitive::Int),
            cast: false,
            target: "p_Foo_bar".to_owned(),
        };
        let expected = "\
@javax.annotation.Generated(\"jnigen\")
final class FooJni implements Foo.Natives {
    private static final Foo.Natives mNatives = new FooJni();

    static Foo.Natives testInst;

    public static Foo.Natives get() {
        if (GEN_JNI.TESTING_ENABLED) {
            return testInst;
        }
        return mNatives;
    }

    public static final void setForTesting(Foo.Natives testNatives) {
        testInst = testNatives;
    }

    @Override
    public int bar(int x) {
        return GEN_JNI.p_Foo_bar(x);
    }
}";
        assert_eq!(wrapper(vec![bar]).print_to_string(None), expected);
    }

    #[test]
    fn test_print_cast_and_void() {
        let find = ForwardingMethod {
            name: "find".to_owned(),
            params: vec![
                Param { name: "a".to_owned(), typ: JavaType::declared("java.util.List") },
                Param { name: "b".to_owned(), typ: JavaType::Primitive(Primitive::Long) },
            ],
            ret: JavaType::declared("org.chromium.Foo"),
            cast: true,
            target: "p_Foo_find".to_owned(),
        };
        let reset = ForwardingMethod {
            name: "reset".to_owned(),
            params: vec![],
            ret: JavaType::Void,
            cast: false,
            target: "p_Foo_reset".to_owned(),
        };
        let cfg = PrintCfg { omit_member_sep: true, ..Default::default() };
        let printed = wrapper(vec![find, reset]).print_to_string(Some(&cfg));

        assert!(printed.contains(
            "    @Override
    public org.chromium.Foo find(java.util.List a, long b) {
        return (org.chromium.Foo)GEN_JNI.p_Foo_find(a, b);
    }
    @Override
    public void reset() {
        GEN_JNI.p_Foo_reset();
    }
}"
        ));
    }

    #[test]
    fn test_public_wrapper() {
        let wrapper = WrapperClass { is_public: true, ..wrapper(vec![]) };
        assert!(wrapper.print_to_string(None).contains("public final class FooJni implements"));
    }
}
