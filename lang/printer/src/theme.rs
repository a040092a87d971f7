use std::borrow::Cow;

use pretty::DocAllocator;

use super::types::*;

pub trait ThemeExt<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a>;
    fn typ<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a>;
    fn ident<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a>;
    fn annotation(&'a self, text: &'a str) -> Builder<'a>;
    fn comment<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a>;
    fn literal<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Keyword)
    }

    fn typ<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a> {
        self.text(text).annotate(Anno::Type)
    }

    fn ident<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a> {
        self.text(text).annotate(Anno::Ident)
    }

    fn annotation(&'a self, text: &'a str) -> Builder<'a> {
        self.text(crate::tokens::AT).append(self.text(text)).annotate(Anno::Annotation)
    }

    fn comment<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a> {
        self.text(text).annotate(Anno::Comment)
    }

    fn literal<S: Into<Cow<'a, str>>>(&'a self, text: S) -> Builder<'a> {
        self.text(text).annotate(Anno::Literal)
    }
}
