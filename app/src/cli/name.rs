use miette::Diagnostic;
use thiserror::Error;

use jnigen_lang_ast::{is_java_identifier, is_package_name};
use jnigen_lang_backend::{NamingMode, compute_flat_name};

use super::report;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_name = "PACKAGE")]
    package: String,
    /// Simple name of the type the natives interface is nested in
    #[clap(value_name = "TYPE")]
    type_name: String,
    #[clap(value_name = "METHOD")]
    method: String,
    /// Print the hashed name instead of the escaped descriptor
    #[clap(long)]
    hashed: bool,
}

pub fn exec(cmd: Args) -> Result<(), Vec<miette::Report>> {
    let Args { package, type_name, method, hashed } = cmd;

    if !is_package_name(&package) {
        return Err(report(InvalidName { kind: "package", name: package }));
    }
    for (kind, name) in [("type", &type_name), ("method", &method)] {
        if !is_java_identifier(name) {
            return Err(report(InvalidName { kind, name: name.clone() }));
        }
    }

    let mode = if hashed { NamingMode::Hashed } else { NamingMode::Descriptor };
    println!("{}", compute_flat_name(&package, &type_name, &method, mode));
    Ok(())
}

#[derive(Error, Diagnostic, Debug)]
#[error("`{name}` is not a valid {kind} name")]
#[diagnostic(help("Flat names are only computed for valid Java identifiers."))]
pub struct InvalidName {
    kind: &'static str,
    name: String,
}
