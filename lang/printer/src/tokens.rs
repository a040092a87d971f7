//! This module contains the symbols and keywords of the Java sources we generate.
//! These constants are used when we prettyprint generated code.

// Symbols
//
//

/// The symbol `,`
pub const COMMA: &str = ",";

/// The symbol `.`
pub const DOT: &str = ".";

/// The symbol `;`
pub const SEMI: &str = ";";

/// The symbol `=`
pub const EQ: &str = "=";

/// The symbol `@`
pub const AT: &str = "@";

/// The symbol `[]`
pub const BRACKETS: &str = "[]";

// Keywords
//
//

/// The keyword `package`
pub const PACKAGE: &str = "package";

/// The keyword `import`
pub const IMPORT: &str = "import";

/// The keyword `public`
pub const PUBLIC: &str = "public";

/// The keyword `private`
pub const PRIVATE: &str = "private";

/// The keyword `static`
pub const STATIC: &str = "static";

/// The keyword `final`
pub const FINAL: &str = "final";

/// The keyword `native`
pub const NATIVE: &str = "native";

/// The keyword `class`
pub const CLASS: &str = "class";

/// The keyword `implements`
pub const IMPLEMENTS: &str = "implements";

/// The keyword `return`
pub const RETURN: &str = "return";

/// The keyword `new`
pub const NEW: &str = "new";

/// The keyword `if`
pub const IF: &str = "if";

/// The keyword `true`
pub const TRUE: &str = "true";

/// The keyword `void`
pub const VOID: &str = "void";

/// The keyword `boolean`
pub const BOOLEAN: &str = "boolean";

// Annotations
//
//

/// The annotation `Override`
pub const OVERRIDE: &str = "Override";

/// The annotation `javax.annotation.Generated`
pub const GENERATED: &str = "javax.annotation.Generated";

// Javadoc
//
//

/// Opens a Javadoc block
pub const DOC_OPEN: &str = "/**";

/// Prefixes each line of a Javadoc block
pub const DOC_LINE: &str = " * ";

/// Closes a Javadoc block
pub const DOC_CLOSE: &str = " */";
