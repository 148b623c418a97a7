//! Configuration file management and option resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_SOURCE_LANGUAGE, DefaultsConfig, ResolveOptions,
    ResolvedConfig, ServiceConfig, resolve_config,
};
