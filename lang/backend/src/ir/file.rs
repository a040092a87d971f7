use std::path::PathBuf;

use jnigen_lang_ast::qualify;
use jnigen_lang_printer::theme::ThemeExt;
use jnigen_lang_printer::tokens::*;
use jnigen_lang_printer::util::StatementExt;
use jnigen_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

/// The value of the `@Generated` annotation on every generated class.
pub const GENERATOR_NAME: &str = "jnigen";

/// A top-level class that can be written to its own source file.
pub trait ClassDecl: Print {
    fn name(&self) -> &str;
}

/// One generated compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile<C> {
    pub package: String,
    /// Fully-qualified names of imported classes.
    pub imports: Vec<String>,
    pub class: C,
}

impl<C: ClassDecl> JavaFile<C> {
    pub fn new(package: impl Into<String>, class: C) -> Self {
        JavaFile { package: package.into(), imports: Vec::new(), class }
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.package, self.class.name())
    }

    /// Path of the source file relative to the source root, e.g. `org/chromium/foo/FooJni.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|s| !s.is_empty()).collect();
        path.push(format!("{}.java", self.class.name()));
        path
    }
}

impl<C: ClassDecl> Print for JavaFile<C> {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        let JavaFile { package, imports, class } = self;

        let mut doc = alloc.nil();
        if !package.is_empty() {
            doc = doc
                .append(alloc.keyword(PACKAGE))
                .append(alloc.space())
                .append(alloc.typ(package.as_str()))
                .stmt()
                .append(alloc.hardline())
                .append(alloc.hardline());
        }

        if !imports.is_empty() {
            let imports = imports.iter().map(|import| {
                alloc
                    .keyword(IMPORT)
                    .append(alloc.space())
                    .append(alloc.typ(import.as_str()))
                    .stmt()
            });
            doc = doc
                .append(alloc.intersperse(imports, alloc.hardline()))
                .append(alloc.hardline())
                .append(alloc.hardline());
        }

        doc.append(class.print(cfg, alloc)).append(alloc.hardline())
    }
}

/// `@javax.annotation.Generated("jnigen")`
pub(crate) fn print_generated<'a>(alloc: &'a Alloc<'a>) -> Builder<'a> {
    let value = format!("\"{GENERATOR_NAME}\"");
    alloc.annotation(GENERATED).append(alloc.literal(value).parens())
}

/// Print modifiers followed by a space, e.g. `public static `.
pub(crate) fn print_modifiers<'a>(modifiers: &[&'static str], alloc: &'a Alloc<'a>) -> Builder<'a> {
    alloc.concat(modifiers.iter().map(|modifier| alloc.keyword(*modifier).append(alloc.space())))
}

/// Class members are separated by an empty line unless `omit_member_sep` is set.
pub(crate) fn print_members<'a, I>(members: I, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>
where
    I: IntoIterator<Item = Builder<'a>>,
{
    let sep = if cfg.omit_member_sep {
        alloc.hardline()
    } else {
        alloc.hardline().append(alloc.hardline())
    };
    alloc.intersperse(members, sep)
}
