use std::path::{Path, PathBuf};

use miette::Report;

use jnigen_lang_ast::parse_round;
use jnigen_lang_backend::{Finalized, GeneratedUnit, Generator, GeneratorConfig, RenderedFile};
use jnigen_lang_printer::PrintCfg;

use crate::fs::FileSource;
use crate::result::{DriverError, Error};

/// Read a [`GeneratorConfig`] from a TOML file.
pub fn load_config(
    source: &mut dyn FileSource,
    path: &Path,
) -> Result<GeneratorConfig, DriverError> {
    let text = source.read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&text).map_err(|err| {
        DriverError::ConfigSyntax { path: path.to_path_buf(), message: err.to_string() }
    })?;
    config.validate()?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// One processing unit: every declaration file is a round, and code is generated once all of them
/// have been read.
///
/// Problems with the declarations are collected and reported at the end. Only I/O failures abort
/// the session.
pub struct Session<'a> {
    source: &'a mut dyn FileSource,
    generator: Generator,
    errors: Vec<Error>,
    print_cfg: PrintCfg,
}

impl<'a> Session<'a> {
    pub fn new(
        source: &'a mut dyn FileSource,
        config: GeneratorConfig,
    ) -> Result<Self, DriverError> {
        Ok(Session {
            source,
            generator: Generator::new(config)?,
            errors: Vec::new(),
            print_cfg: PrintCfg::default(),
        })
    }

    pub fn with_print_cfg(mut self, print_cfg: PrintCfg) -> Self {
        self.print_cfg = print_cfg;
        self
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn process_file(&mut self, path: &Path) -> Result<(), DriverError> {
        let text = self.source.read_to_string(path)?;
        self.process_str(&path.display().to_string(), &text);
        Ok(())
    }

    /// Process the contents of a declaration file as the next round.
    pub fn process_str(&mut self, source_name: &str, text: &str) {
        match parse_round(source_name, text) {
            Ok(round) => {
                let diagnostics = self.generator.process_round(&round);
                self.errors.extend(diagnostics.iter().cloned().map(Error::from));
            }
            Err(err) => {
                log::debug!("Skipping round {source_name}: {err}");
                self.errors.push(err.into());
            }
        }
    }

    /// Generate all classes. If `out_dir` is given, the files are written there, binding table
    /// first.
    pub fn finish(self, out_dir: Option<&Path>) -> Result<Output, DriverError> {
        let Session { source, generator, mut errors, print_cfg } = self;

        let reported = generator.diagnostics().len();
        let Finalized { unit, diagnostics } = generator.finalize()?;
        errors.extend(diagnostics.into_iter().skip(reported).map(Error::from));

        if unit.is_empty() {
            log::info!("No natives interfaces found, nothing to generate");
            return Ok(Output { unit: None, files: Vec::new(), written: Vec::new(), errors });
        }

        let files = unit.render(&print_cfg);
        let mut written = Vec::new();
        if let Some(out_dir) = out_dir {
            for file in &files {
                let path = out_dir.join(&file.path);
                source.write_string(&path, &file.contents)?;
                log::info!("Wrote {} to {}", file.class_name, path.display());
                written.push(path);
            }
        }

        Ok(Output { unit: Some(unit), files, written, errors })
    }
}

/// The result of a finished session.
#[derive(Debug)]
pub struct Output {
    /// The generated classes, unless there was nothing to generate.
    pub unit: Option<GeneratedUnit>,
    /// The generated files, binding table first. Empty if there was nothing to generate.
    pub files: Vec<RenderedFile>,
    /// Paths of the files that were written, in the order they were written.
    pub written: Vec<PathBuf>,
    pub errors: Vec<Error>,
}

impl Output {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.errors.iter().cloned().map(Report::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use jnigen_lang_backend::GenerateError;

    use crate::fs::{FileSystemSource, InMemorySource};

    use super::*;

    const FOO: &str = r#"
[[interface]]
package   = "org.chromium.foo"
enclosing = "Foo"
name      = "Natives"
public    = true

[[interface.method]]
name    = "bar"
params  = [{ name = "x", type = "int" }]
returns = "int"
"#;

    const BROKEN: &str = r#"
[[interface]]
package = "org.chromium.bar"
name    = "Natives"

[[interface.method]]
name    = "read"
returns = "java.util.List<"
"#;

    #[test]
    fn test_session_writes_table_first() {
        let mut source = InMemorySource::new();
        source.insert("foo.toml", FOO);

        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        session.process_file(Path::new("foo.toml")).unwrap();
        let output = session.finish(Some(Path::new("out"))).unwrap();

        assert!(!output.has_errors());
        assert_eq!(
            output.written,
            vec![
                PathBuf::from("out/org/chromium/base/natives/GEN_JNI.java"),
                PathBuf::from("out/org/chromium/foo/FooJni.java"),
            ]
        );
        let wrapper = source.get(Path::new("out/org/chromium/foo/FooJni.java")).unwrap();
        assert!(wrapper.contains("public final class FooJni implements Foo.Natives {"));
        assert!(wrapper.contains("return GEN_JNI.org_chromium_foo_Foo_bar(x);"));
    }

    #[test]
    fn test_errors_are_collected() {
        let mut source = InMemorySource::new();
        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        session.process_str("broken.toml", BROKEN);
        session.process_str("foo.toml", FOO);
        session.process_str("again.toml", FOO);
        let output = session.finish(None).unwrap();

        assert_eq!(output.errors.len(), 2);
        assert!(matches!(output.errors[0], Error::Parser(_)));
        assert!(matches!(output.errors[1], Error::Generate(GenerateError::Redeclared { .. })));
        assert_eq!(output.files.len(), 2);
        assert!(output.written.is_empty());
        assert_eq!(output.reports().len(), 2);
    }

    #[test]
    fn test_each_wrapper_is_written_once() {
        let text = r#"
[[interface]]
package   = "p"
enclosing = "Foo"
name      = "A"

[[interface.method]]
name = "a"

[[interface]]
package   = "p"
enclosing = "Foo"
name      = "B"

[[interface.method]]
name = "b"
"#;
        let mut source = InMemorySource::new();
        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        session.process_str("foo.toml", text);
        let output = session.finish(Some(Path::new("out"))).unwrap();

        assert_eq!(output.errors.len(), 1);
        assert!(matches!(output.errors[0], Error::Generate(GenerateError::WrapperClash { .. })));
        assert_eq!(
            output.written,
            vec![
                PathBuf::from("out/org/chromium/base/natives/GEN_JNI.java"),
                PathBuf::from("out/p/FooJni.java"),
            ]
        );
        let wrapper = source.get(Path::new("out/p/FooJni.java")).unwrap();
        assert!(wrapper.contains("implements Foo.A {"));
        let table = source.get(Path::new("out/org/chromium/base/natives/GEN_JNI.java")).unwrap();
        assert!(!table.contains("p_Foo_b("));
    }

    #[test]
    fn test_nothing_to_generate() {
        let mut source = InMemorySource::new();
        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        session.process_str("empty.toml", "");
        let output = session.finish(Some(Path::new("out"))).unwrap();

        assert!(output.unit.is_none());
        assert!(output.files.is_empty());
        assert!(output.written.is_empty());
        assert!(!source.exists(Path::new("out/org/chromium/base/natives/GEN_JNI.java")));
    }

    #[test]
    fn test_missing_file() {
        let mut source = InMemorySource::new();
        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        let err = session.process_file(Path::new("missing.toml")).unwrap_err();
        assert!(matches!(err, DriverError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config() {
        let mut source = InMemorySource::new();
        source.insert("jnigen.toml", "hashed_naming = true\ntable_class = \"J\"\n");
        source.insert("typo.toml", "hashed_nameing = true\n");
        source.insert("invalid.toml", "table_class = \"1J\"\n");

        let config = load_config(&mut source, Path::new("jnigen.toml")).unwrap();
        assert!(config.hashed_naming);
        assert_eq!(config.table_class, "J");
        assert_eq!(config.table_package, "org.chromium.base.natives");

        let err = load_config(&mut source, Path::new("typo.toml")).unwrap_err();
        assert!(matches!(err, DriverError::ConfigSyntax { .. }));
        let err = load_config(&mut source, Path::new("invalid.toml")).unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }

    #[test]
    fn test_file_system_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("foo.toml"), FOO).unwrap();

        let mut source = FileSystemSource::new(dir.path());
        let mut session = Session::new(&mut source, GeneratorConfig::default()).unwrap();
        session.process_file(Path::new("foo.toml")).unwrap();
        let output = session.finish(Some(Path::new("target_jni"))).unwrap();

        assert_eq!(output.written.len(), 2);
        let table = dir.path().join("target_jni/org/chromium/base/natives/GEN_JNI.java");
        let contents = std::fs::read_to_string(table).unwrap();
        assert!(contents.starts_with("package org.chromium.base.natives;\n"));
        assert!(contents.contains("static final native int org_chromium_foo_Foo_bar(int x);"));
    }
}
