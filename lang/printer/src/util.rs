use pretty::DocAllocator;

use crate::tokens::{COMMA, SEMI};

use super::types::*;

pub trait BracesExt<'a> {
    /// Wrap a class or method body in braces, putting the body on its own indented lines.
    fn block(self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>;
}

impl<'a> BracesExt<'a> for Builder<'a> {
    fn block(self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc
            .text("{")
            .annotate(Anno::BraceOpen)
            .append(alloc.hardline().append(self).nest(cfg.indent))
            .append(alloc.hardline())
            .append(alloc.text("}").annotate(Anno::BraceClose))
    }
}

pub trait StatementExt<'a> {
    /// Terminate a statement with `;`
    fn stmt(self) -> Builder<'a>;
}

impl<'a> StatementExt<'a> for Builder<'a> {
    fn stmt(self) -> Builder<'a> {
        self.append(SEMI)
    }
}

/// Print a parenthesized, comma-separated list that breaks onto indented lines when too wide.
pub fn print_comma_separated<'a, I>(docs: I, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>
where
    I: IntoIterator<Item = Builder<'a>>,
{
    let sep = alloc.text(COMMA).append(alloc.line());
    alloc
        .line_()
        .append(alloc.intersperse(docs, sep))
        .nest(cfg.indent)
        .append(alloc.line_())
        .parens()
        .group()
}
