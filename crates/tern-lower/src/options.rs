// SPDX-License-Identifier: (MIT OR Apache-2.0)

/// Default module the operator runtime is imported from.
pub const DEFAULT_RUNTIME_MODULE: &str = "@tern/runtime";

#[derive(Debug, Clone)]
pub struct LowerOptions {
    /// Module specifier for the operator runtime.
    pub runtime_module: String,
    /// Prepend `import { ... } from runtime_module` naming every runtime
    /// function the unit calls.
    pub runtime_import: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            runtime_import: true,
        }
    }
}
