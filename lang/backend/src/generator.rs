use std::path::PathBuf;

use jnigen_lang_ast::Round;
use jnigen_lang_printer::{PrintCfg, PrintToString};

use crate::config::GeneratorConfig;
use crate::ir;
use crate::result::{BackendResult, GenerateError};
use crate::table::{BindingEntry, BindingTable};
use crate::table2ir::{IrCtx, ToIR, WrapperSource};
use crate::validate::{ClassNames, validate_interface};

/// The state of one processing unit.
///
/// A generator is fed the declarations of every round and grows monotonically. It is consumed by
/// [`Generator::finalize`], which is the only way to get at generated code: a partially populated
/// binding table is never emitted.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    table: BindingTable,
    wrappers: Vec<WrapperSource>,
    classes: ClassNames,
    diagnostics: Vec<GenerateError>,
    rounds: usize,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> BackendResult<Self> {
        config.validate()?;
        Ok(Generator {
            classes: ClassNames::new(&config),
            config,
            table: BindingTable::new(),
            wrappers: Vec::new(),
            diagnostics: Vec::new(),
            rounds: 0,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    /// All diagnostics reported so far.
    pub fn diagnostics(&self) -> &[GenerateError] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of non-empty rounds processed so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Add the declarations of one round to the binding table.
    ///
    /// Returns the diagnostics reported for this round. Interfaces with errors are skipped, all
    /// others are processed regardless.
    pub fn process_round(&mut self, round: &Round) -> &[GenerateError] {
        let reported = self.diagnostics.len();
        if round.is_empty() {
            return &[];
        }
        log::debug!(
            "Processing round {} from {} with {} interface(s)",
            self.rounds,
            round.source_name.as_deref().unwrap_or("<unknown>"),
            round.interfaces.len()
        );

        let mode = self.config.naming_mode();
        for iface in &round.interfaces {
            let validated =
                validate_interface(iface, &self.table, &self.classes, &mut self.diagnostics);
            let Some(validated) = validated else {
                log::debug!("Skipping {}", iface.id());
                continue;
            };

            let id = validated.decl.id();
            self.classes.claim(validated.wrapper_class, id.to_string());
            self.table.insert_group(id.clone(), validated.decl.is_public);
            for method in &validated.methods {
                let decl = (*method).clone();
                let entry = BindingEntry::new(id.clone(), validated.enclosing, decl, mode);
                self.table.insert_entry(entry);
            }
            self.wrappers.push(WrapperSource {
                id,
                enclosing: validated.enclosing.to_owned(),
                is_public: validated.decl.is_public,
                methods: validated.methods.into_iter().cloned().collect(),
            });
        }

        self.rounds += 1;
        &self.diagnostics[reported..]
    }

    /// Emit the binding table, then one wrapper per interface.
    pub fn finalize(self) -> BackendResult<Finalized> {
        let Generator { config, table, wrappers, mut diagnostics, rounds, .. } = self;
        log::debug!(
            "Finalizing {} table entries from {} interface(s) over {} round(s)",
            table.len(),
            wrappers.len(),
            rounds
        );

        diagnostics.extend(table.collisions());

        let ctx = IrCtx { config: &config, table: &table };
        let table = table.to_ir(&ctx)?;
        let wrappers = wrappers.to_ir(&ctx)?;

        Ok(Finalized { unit: GeneratedUnit { table, wrappers }, diagnostics })
    }
}

/// The outcome of a processing unit.
#[derive(Debug)]
pub struct Finalized {
    pub unit: GeneratedUnit,
    /// Every diagnostic of the unit, including those only detectable on the complete table.
    pub diagnostics: Vec<GenerateError>,
}

/// The generated classes of a processing unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub table: ir::JavaFile<ir::TableClass>,
    pub wrappers: Vec<ir::JavaFile<ir::WrapperClass>>,
}

impl GeneratedUnit {
    /// Whether there is nothing worth writing, i.e. no interface made it through validation.
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Render all classes to Java source text, binding table first.
    pub fn render(&self, cfg: &PrintCfg) -> Vec<RenderedFile> {
        let table = RenderedFile {
            path: self.table.relative_path(),
            class_name: self.table.qualified_name(),
            contents: self.table.print_to_string(Some(cfg)),
        };
        let wrappers = self.wrappers.iter().map(|file| RenderedFile {
            path: file.relative_path(),
            class_name: file.qualified_name(),
            contents: file.print_to_string(Some(cfg)),
        });
        std::iter::once(table).chain(wrappers).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub class_name: String,
    pub contents: String,
}
