//! Configuration for schema generation.

/// Configuration for Rust schema emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Column at which doc comment text wraps
    pub(crate) wrap_width: usize,
    /// Only directives from this system are emitted
    pub(crate) system: String,
    /// Whether to emit the `@generated` header
    pub(crate) header: bool,
    /// Path of the unit crate in generated code
    pub(crate) unit_crate: String,
    /// Module that defines `UnitBlock` and `InstallBlock`
    pub(crate) common_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            system: "core".to_string(),
            header: true,
            unit_crate: "unitd_unit".to_string(),
            common_module: "super::common".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the doc comment wrap width.
    pub fn wrap_width(mut self, value: usize) -> Self {
        self.wrap_width = value;
        self
    }

    /// Set the system tag directives are filtered by.
    pub fn system(mut self, value: impl Into<String>) -> Self {
        self.system = value.into();
        self
    }

    /// Set whether to emit the generated-file header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Set the path generated code uses for the unit crate.
    pub fn unit_crate(mut self, value: impl Into<String>) -> Self {
        self.unit_crate = value.into();
        self
    }

    /// Set the module generated unit kinds import the common blocks from.
    pub fn common_module(mut self, value: impl Into<String>) -> Self {
        self.common_module = value.into();
        self
    }
}
