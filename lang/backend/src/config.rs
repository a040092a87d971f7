use serde_derive::Deserialize;

use jnigen_lang_ast::{is_java_identifier, is_package_name, qualify};

use crate::naming::NamingMode;
use crate::result::ConfigError;

pub const DEFAULT_TABLE_PACKAGE: &str = "org.chromium.base.natives";
pub const DEFAULT_TABLE_CLASS: &str = "GEN_JNI";
pub const DEFAULT_WRAPPER_SUFFIX: &str = "Jni";

/// Settings of one processing unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name the entries of the binding table by a digest of their descriptor.
    pub hashed_naming: bool,
    /// Initialize `TESTING_ENABLED` so that wrappers hand out their test instance.
    pub testing_enabled: bool,
    pub table_package: String,
    pub table_class: String,
    pub wrapper_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            hashed_naming: false,
            testing_enabled: false,
            table_package: DEFAULT_TABLE_PACKAGE.to_owned(),
            table_class: DEFAULT_TABLE_CLASS.to_owned(),
            wrapper_suffix: DEFAULT_WRAPPER_SUFFIX.to_owned(),
        }
    }
}

impl GeneratorConfig {
    pub fn naming_mode(&self) -> NamingMode {
        if self.hashed_naming { NamingMode::Hashed } else { NamingMode::Descriptor }
    }

    /// The fully-qualified name of the binding table class.
    pub fn table_class_qualified(&self) -> String {
        qualify(&self.table_package, &self.table_class)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Classes in the unnamed package cannot be imported by the wrappers.
        if self.table_package.is_empty() || !is_package_name(&self.table_package) {
            return Err(ConfigError::InvalidTablePackage(self.table_package.clone()));
        }
        if !is_java_identifier(&self.table_class) {
            return Err(ConfigError::InvalidTableClass(self.table_class.clone()));
        }
        // Without a suffix the wrapper would take the name of its enclosing class.
        let suffix_chars_valid =
            self.wrapper_suffix.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if self.wrapper_suffix.is_empty() || !suffix_chars_valid {
            return Err(ConfigError::InvalidWrapperSuffix(self.wrapper_suffix.clone()));
        }
        Ok(())
    }
}
