// SPDX-License-Identifier: (MIT OR Apache-2.0)

#[derive(Debug, Clone)]
pub struct PrintConfig {
    pub indent_width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
