//! Terminal primitives: leaves that emit a fixed reporter.

use crate::{EvalContext, EvalResult, Primitive, PrimitiveExecutor, ProgramText};

/// A zero-arity primitive that appends `fragment` to the carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminal {
    name: &'static str,
    fragment: &'static str,
}

impl Terminal {
    pub const fn new(name: &'static str, fragment: &'static str) -> Self {
        Terminal { name, fragment }
    }

    /// The NetLogo text this terminal emits.
    pub fn fragment(&self) -> &'static str {
        self.fragment
    }
}

/// Every patch in the world.
pub const PATCHES: Terminal = Terminal::new("patches", "patches");

/// Patches that have water on them.
pub const PATCHES_WITH_WATER: Terminal =
    Terminal::new("patches-with-water", "patches with [ has-water? ]");

/// Every farm agent.
pub const FARMS: Terminal = Terminal::new("farms", "farms");

/// The agent running the rule.
pub const MYSELF: Terminal = Terminal::new("myself", "myself");

impl Primitive for Terminal {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        0
    }

    fn evaluate(
        &self,
        _ctx: &EvalContext<'_>,
        data: &mut ProgramText,
        _exec: &mut dyn PrimitiveExecutor,
    ) -> EvalResult {
        data.append(self.fragment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingExecutor;
    use pretty_assertions::assert_eq;

    #[test]
    fn terminal_appends_fragment() {
        let mut exec = RecordingExecutor::new(vec![]);
        let mut data = ProgramText::from("ask ");

        PATCHES_WITH_WATER
            .evaluate(&EvalContext::default(), &mut data, &mut exec)
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(data.contents(), "ask patches with [ has-water? ]");
        assert!(exec.calls().is_empty());
    }

    #[test]
    fn builtin_terminals_have_no_children() {
        for terminal in [PATCHES, PATCHES_WITH_WATER, FARMS, MYSELF] {
            assert_eq!(terminal.arity(), 0);
            assert!(!terminal.fragment().is_empty());
        }
        assert_eq!(FARMS.name(), "farms");
        assert_eq!(MYSELF.fragment(), "myself");
    }
}
