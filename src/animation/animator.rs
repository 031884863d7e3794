use crate::{
    animation::{
        basic::BasicAnimator,
        config::{AnimationConfig, AnimationMode},
        structural::StructuralAnimator,
        timing::KeyframeTable,
    },
    document::tree::Element,
    foundation::error::{SvganimError, SvganimResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported by an animator run.
pub struct AnimatorStats {
    /// Merged elements created below the result root (tracks excluded).
    pub merged_nodes: usize,
    /// Placeholders synthesized during alignment.
    pub placeholders: usize,
    /// `<animate>` tracks emitted.
    pub tracks: usize,
    /// Merged nodes whose character data differs between frames. Only the first frame's
    /// text is kept for them.
    pub frozen_text: usize,
}

/// Builds the merged children of a result root from N input frames.
pub trait Animator {
    /// Append merged content to `result`. `frames` are the input roots in display order.
    fn build(
        &self,
        result: &mut Element,
        frames: &[Element],
        table: &KeyframeTable,
    ) -> SvganimResult<AnimatorStats>;
}

/// Create the animator selected by `config.mode`.
pub fn create_animator(config: &AnimationConfig) -> Box<dyn Animator> {
    match config.mode {
        AnimationMode::Basic => Box::new(BasicAnimator::new(config)),
        AnimationMode::Structural => Box::new(StructuralAnimator::new(config)),
    }
}

pub(crate) fn check_frames(frames: &[Element], table: &KeyframeTable) -> SvganimResult<()> {
    if frames.len() < 2 {
        return Err(SvganimError::validation(format!(
            "animation needs at least 2 frames, got {}",
            frames.len()
        )));
    }
    if table.frame_count() != frames.len() {
        return Err(SvganimError::validation(format!(
            "keyframe table was built for {} frames, got {}",
            table.frame_count(),
            frames.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
