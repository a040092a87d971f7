use jnigen_lang_ast::{JavaType, Param};
use jnigen_lang_printer::theme::ThemeExt;
use jnigen_lang_printer::tokens::*;
use jnigen_lang_printer::util::{BracesExt, StatementExt, print_comma_separated};
use jnigen_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

use super::file::{ClassDecl, print_generated, print_members, print_modifiers};

/// The static flag that makes every wrapper hand out its test instance.
pub const TESTING_FIELD: &str = "TESTING_ENABLED";

/// The flat binding table class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableClass {
    pub name: String,
    /// Initialize the testing flag to `true`.
    pub testing_enabled: bool,
    pub methods: Vec<NativeMethod>,
}

impl TableClass {
    pub fn new(name: impl Into<String>, testing_enabled: bool) -> Self {
        TableClass { name: name.into(), testing_enabled, methods: Vec::new() }
    }
}

impl ClassDecl for TableClass {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Print for TableClass {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let TableClass { name, testing_enabled, methods } = self;

        let mut flag = print_modifiers(&[PUBLIC, STATIC], alloc)
            .append(alloc.typ(BOOLEAN))
            .append(alloc.space())
            .append(alloc.ident(TESTING_FIELD));
        if *testing_enabled {
            flag = flag
                .append(alloc.space())
                .append(EQ)
                .append(alloc.space())
                .append(alloc.keyword(TRUE));
        }

        let members =
            std::iter::once(flag.stmt()).chain(methods.iter().map(|m| m.print(cfg, alloc)));

        print_generated(alloc)
            .append(alloc.hardline())
            .append(print_modifiers(&[PUBLIC, FINAL, CLASS], alloc))
            .append(alloc.typ(name.as_str()))
            .append(alloc.space())
            .append(print_members(members, cfg, alloc).block(cfg, alloc))
    }
}

/// A `public static final native` method of the binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMethod {
    pub name: String,
    /// Normalized parameters.
    pub params: Vec<Param>,
    /// Normalized return type.
    pub ret: JavaType,
    /// Javadoc lines, keeping the precise types of the declaration.
    pub doc: Vec<String>,
}

impl Print for NativeMethod {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let NativeMethod { name, params, ret, doc } = self;

        let javadoc = if cfg.javadoc && !doc.is_empty() {
            let lines = doc.iter().map(|line| {
                let line = alloc.comment(DOC_LINE).append(alloc.comment(line.as_str()));
                line.append(alloc.hardline())
            });
            alloc
                .comment(DOC_OPEN)
                .append(alloc.hardline())
                .append(alloc.concat(lines))
                .append(alloc.comment(DOC_CLOSE))
                .append(alloc.hardline())
        } else {
            alloc.nil()
        };

        let params = params.iter().map(|param| param.print(cfg, alloc));

        javadoc
            .append(print_modifiers(&[PUBLIC, STATIC, FINAL, NATIVE], alloc))
            .append(ret.print(cfg, alloc))
            .append(alloc.space())
            .append(alloc.ident(name.as_str()))
            .append(print_comma_separated(params, cfg, alloc))
            .stmt()
    }
}

#[cfg(test)]
mod tests {
    use jnigen_lang_ast::Primitive;
    use jnigen_lang_printer::PrintToString;

    use super::*;

    fn bar() -> NativeMethod {
        NativeMethod {
            name: "p_Foo_bar".to_owned(),
            params: vec![Param { name: "x".to_owned(), typ: JavaType::object() }],
            ret: JavaType::Primitive(Primitive::Int),
            doc: vec![
                "p.Foo.bar".to_owned(),
                "@param x (java.util.List)".to_owned(),
                "@return (int)".to_owned(),
            ],
        }
    }

    #[test]
    fn test_print_table() {
        let table = TableClass { methods: vec![bar()], ..TableClass::new("GEN_JNI", false) };
        let expected = "\
@javax.annotation.Generated(\"jnigen\")
public final class GEN_JNI {
    public static boolean TESTING_ENABLED;

    /**
     * p.Foo.bar
     * @param x (java.util.List)
     * @return (int)
     */
    public static final native int p_Foo_bar(java.lang.Object x);
}";
        assert_eq!(table.print_to_string(None), expected);
    }

    #[test]
    fn test_print_testing_enabled_without_javadoc() {
        let table = TableClass { methods: vec![bar()], ..TableClass::new("GEN_JNI", true) };
        let cfg = PrintCfg { javadoc: false, omit_member_sep: true, ..Default::default() };
        let expected = "\
@javax.annotation.Generated(\"jnigen\")
public final class GEN_JNI {
    public static boolean TESTING_ENABLED = true;
    public static final native int p_Foo_bar(java.lang.Object x);
}";
        assert_eq!(table.print_to_string(Some(&cfg)), expected);
    }
}
