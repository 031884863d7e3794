use crate::{
    animation::{
        animator::{Animator, AnimatorStats, check_frames},
        config::AnimationConfig,
        timing::KeyframeTable,
        track::AnimateTrack,
    },
    document::tree::Element,
    foundation::error::SvganimResult,
};

const FIRST_VALUES: [&str; 5] = ["1", "1", "0", "0", "1"];
const LAST_VALUES: [&str; 5] = ["0", "0", "1", "1", "0"];
const MIDDLE_VALUES: [&str; 6] = ["0", "0", "1", "1", "0", "0"];

/// Whole-frame cross-fade: every frame becomes a `<g>` with its own opacity track.
#[derive(Clone, Debug)]
pub struct BasicAnimator {
    repeat_count: String,
}

impl BasicAnimator {
    /// Animator using the loop settings of `config`.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            repeat_count: config.repeat_count(),
        }
    }
}

impl Animator for BasicAnimator {
    #[tracing::instrument(skip_all, fields(frames = frames.len()))]
    fn build(
        &self,
        result: &mut Element,
        frames: &[Element],
        table: &KeyframeTable,
    ) -> SvganimResult<AnimatorStats> {
        check_frames(frames, table)?;

        let last = frames.len() - 1;
        let mut stats = AnimatorStats::default();
        for (i, frame) in frames.iter().enumerate() {
            let mut group = Element::new(result.name.sibling("g"));
            group.set_style_property("opacity", if i == 0 { "1" } else { "0" });
            group.children.extend(frame.children.iter().cloned());

            let (values, indices): (&[&str], Vec<isize>) = if i == 0 {
                (&FIRST_VALUES[..], vec![0, 1, 2, -2, -1])
            } else if i == last {
                (&LAST_VALUES[..], vec![0, -4, -3, -2, -1])
            } else {
                let i = i as isize;
                (
                    &MIDDLE_VALUES[..],
                    vec![0, 2 * i - 1, 2 * i, 2 * i + 1, 2 * i + 2, -1],
                )
            };
            let track = AnimateTrack::opacity(
                values.iter().map(|v| v.to_string()).collect(),
                table.key_times_at(&indices),
            );
            group.push_element(track.to_element(&group.name, table, &self.repeat_count));

            result.push_element(group);
            stats.merged_nodes += 1;
            stats.tracks += 1;
        }

        tracing::debug!(?stats, "basic animation built");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/basic.rs"]
mod tests;
