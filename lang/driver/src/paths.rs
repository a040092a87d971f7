/// Default output directory of generated sources.
pub const TARGET_PATH: &str = "target_jni/";

/// Configuration file picked up from the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "jnigen.toml";
