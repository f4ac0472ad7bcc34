// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Name hygiene.
//!
//! Tern identifiers never contain `$`, so every generated name starts with
//! one. User names that JavaScript reserves get a trailing `$`.

use tern_js::is_reserved;

/// Fresh temporaries for one compilation unit.
#[derive(Debug, Default)]
pub struct NameGen {
    next: u32,
}

impl NameGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// `$<hint><n>`, never repeated by this generator.
    pub fn fresh(&mut self, hint: &str) -> String {
        self.next += 1;
        format!("${hint}{}", self.next)
    }
}

/// JavaScript spelling of a Tern binding name.
pub fn binding_name(name: &str) -> String {
    if is_reserved(name) {
        format!("{name}$")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_names_never_repeat() {
        let mut gen = NameGen::new();
        let a = gen.fresh("subject");
        let b = gen.fresh("subject");
        let c = gen.fresh("elem");
        assert_eq!(a, "$subject1");
        assert_eq!(b, "$subject2");
        assert_eq!(c, "$elem3");
    }

    #[test]
    fn generators_are_independent() {
        let mut one = NameGen::new();
        let mut two = NameGen::new();
        assert_eq!(one.fresh("t"), two.fresh("t"));
    }

    #[test]
    fn reserved_words_are_suffixed() {
        assert_eq!(binding_name("point"), "point");
        assert_eq!(binding_name("class"), "class$");
        assert_eq!(binding_name("new"), "new$");
    }
}
