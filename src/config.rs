//! Option configuration: definitions, sources and registration

pub mod option_spec;
pub mod registry;
pub mod source;

pub use option_spec::{ConfigValidationError, OptionKind, OptionSpec};
pub use registry::{ConfigRegistrar, Registration, Registry};
pub use source::{ConfigInput, ConfigMap, ConfigSourceError, load_config_file};
