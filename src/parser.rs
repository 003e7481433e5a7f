#![forbid(unsafe_code)]

//! The command-line analyser
//!
//! [`CmdConf`] owns everything needed to analyse one argument vector: the
//! option registry built by [`CmdConf::configure`] and the parameter set
//! filled by the first call to [`CmdConf::get_parameters`].
//!
//! ```
//! use cmdconf::CmdConf;
//! use serde_json::json;
//!
//! let mut cmd = CmdConf::new(["node", "script", "--count", "5", "extra"]);
//! cmd.configure(json!({
//!     "count": {"action": "get", "key": "count", "number": 1}
//! }));
//!
//! let params = cmd.get_parameters();
//! assert_eq!(params.get_i64("count"), Some(5));
//! assert_eq!(params.arguments(), &["extra"]);
//! ```

use crate::config::option_spec::ConfigValidationError;
use crate::config::registry::{ConfigRegistrar, Registry};
use crate::config::source::{ConfigInput, ConfigSourceError};
use crate::engine::scanner::ArgumentScanner;
use crate::params::ParameterSet;

/// Leading argv entries that are never arguments: program and script
const SKIPPED_ITEMS: usize = 2;

/// The argument vector being analysed
#[derive(Debug, Clone)]
struct Command {
    /// Everything after the program and script entries
    args: Vec<String>,
    /// All entries joined by a space
    command: String,
}

impl Command {
    fn new(items: Vec<String>) -> Self {
        let command = items.join(" ");
        let args = items.into_iter().skip(SKIPPED_ITEMS).collect();
        Command { args, command }
    }
}

/// Configuration-driven command-line analyser
#[derive(Debug, Clone)]
pub struct CmdConf {
    command: Command,
    registry: Registry,
    parameters: ParameterSet,
    processed: bool,
    configured: bool,
    rejected: Vec<ConfigValidationError>,
    source_error: Option<String>,
}

impl CmdConf {
    /// Creates an analyser for a full argument vector
    ///
    /// The first two entries (program and script) are dropped; the rest are
    /// the arguments to analyse.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = Command::new(items.into_iter().map(Into::into).collect());
        let parameters = ParameterSet::new(command.args.clone(), command.command.clone());

        CmdConf {
            command,
            registry: Registry::new(),
            parameters,
            processed: false,
            configured: false,
            rejected: Vec::new(),
            source_error: None,
        }
    }

    /// Creates an analyser for the current process's arguments
    ///
    /// Arguments that are not valid Unicode are converted lossily.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Configures the recognised options
    ///
    /// `input` is either a configuration map (`serde_json::Map` or an object
    /// `serde_json::Value`) or a path to a JSON or TOML document. Any
    /// previous configuration and any previous results are discarded.
    ///
    /// Nothing is returned as an error: invalid entries are reported and
    /// skipped (see [`CmdConf::rejected_entries`]), and a configuration
    /// source that cannot be loaded is reported and leaves the analyser
    /// unconfigured (see [`CmdConf::is_configured`]).
    pub fn configure(&mut self, input: impl Into<ConfigInput>) -> &mut Self {
        if let Err(e) = self.try_configure(input) {
            match e.path() {
                Some(path) => tracing::error!(path = %path.display(), "{}", e),
                None => tracing::error!("{}", e),
            }
        }
        self
    }

    /// Like [`CmdConf::configure`], but hands a source failure back to the caller
    ///
    /// The analyser is reset before the source is loaded, so on failure it
    /// is left unconfigured with no registered options.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be found, read or
    /// parsed, or if the configuration is not an object.
    pub fn try_configure(
        &mut self,
        input: impl Into<ConfigInput>,
    ) -> Result<&mut Self, ConfigSourceError> {
        self.reset();

        let config = match input.into().resolve() {
            Ok(config) => config,
            Err(e) => {
                self.source_error = Some(e.to_string());
                return Err(e);
            }
        };

        let registration = ConfigRegistrar::new(&mut self.parameters).register(&config);
        self.registry = registration.registry;
        self.rejected = registration.rejected;
        self.configured = true;

        tracing::debug!(
            registered = self.registry.len(),
            rejected = self.rejected.len(),
            "Configured command-line options"
        );

        Ok(self)
    }

    /// Returns the analysed parameters
    ///
    /// The arguments are scanned on the first call after a configuration;
    /// later calls return the cached result.
    pub fn get_parameters(&mut self) -> &ParameterSet {
        if !self.processed {
            self.process();
        }
        &self.parameters
    }

    /// True once a configuration has been loaded successfully
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// True once the arguments have been scanned for the current configuration
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Entries dropped by the last configuration
    pub fn rejected_entries(&self) -> &[ConfigValidationError] {
        &self.rejected
    }

    /// Message of the source failure from the last configuration, if any
    pub fn source_error(&self) -> Option<&str> {
        self.source_error.as_deref()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Arguments being analysed, program and script excluded
    pub fn arguments(&self) -> &[String] {
        &self.command.args
    }

    fn process(&mut self) {
        ArgumentScanner::new(&self.registry, &self.command.args).scan(&mut self.parameters);
        self.processed = true;
    }

    fn reset(&mut self) {
        self.processed = false;
        self.configured = false;
        self.registry = Registry::new();
        self.rejected.clear();
        self.source_error = None;
        self.parameters =
            ParameterSet::new(self.command.args.clone(), self.command.command.clone());
    }
}
