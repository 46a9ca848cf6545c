//! `closest-water-patch(patch-set, candidates)`.
//!
//! Picks the unclaimed patch from `patch-set` nearest to `candidates`:
//!
//! ```text
//!  min-one-of <patch-set> with [ num-occupying-farms = 0 ] [ distance <candidates>]
//! ```

use crate::{EvalContext, EvalResult, Primitive, PrimitiveExecutor, ProgramText};

const SELECT: &str = " min-one-of ";
const UNCLAIMED_BY_DISTANCE: &str = " with [ num-occupying-farms = 0 ] [ distance ";
const CLOSE: &str = "]";

/// Child 0: the patch set to choose from.
const PATCH_SET: usize = 0;
/// Child 1: the agents distance is measured to.
const CANDIDATES: usize = 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestWaterPatch;

impl Primitive for ClosestWaterPatch {
    fn name(&self) -> &str {
        "closest-water-patch"
    }

    fn arity(&self) -> usize {
        2
    }

    fn evaluate(
        &self,
        _ctx: &EvalContext<'_>,
        data: &mut ProgramText,
        exec: &mut dyn PrimitiveExecutor,
    ) -> EvalResult {
        // Taken before the patch set runs, so candidates never see its output.
        let mut candidates = data.duplicate();

        exec.eval_child(PATCH_SET, data)?;
        data.prepend(SELECT);

        exec.eval_child(CANDIDATES, &mut candidates)?;
        data.append(UNCLAIMED_BY_DISTANCE);
        data.append(candidates.contents());
        data.append(CLOSE);
        Ok(())
    }
}
