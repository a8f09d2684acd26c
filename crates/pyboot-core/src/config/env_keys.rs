//! Environment variable key constants.
//!
//! The `interpreter` keys are the ones this crate publishes for the embedded
//! CPython runtime; `PYBOOT_*` keys configure pyboot itself.

/// Keys published for the embedded interpreter. Names are fixed by CPython.
pub mod interpreter {
    /// Directory holding the interpreter's native libraries / standard library.
    pub const PYTHONHOME: &str = "PYTHONHOME";
    /// Writable module search path (the `python-runtime` working directory).
    pub const PYTHONPATH: &str = "PYTHONPATH";
}

/// Path overrides.
pub mod paths {
    /// Overrides the resolved working directory location (absolute path).
    pub const PYBOOT_RUNTIME_DIR: &str = "PYBOOT_RUNTIME_DIR";
}

/// Observability and logging.
pub mod observability {
    pub const PYBOOT_QUIET: &str = "PYBOOT_QUIET";
    pub const PYBOOT_LOG_LEVEL: &str = "PYBOOT_LOG_LEVEL";
    pub const PYBOOT_LOG_JSON: &str = "PYBOOT_LOG_JSON";
}
