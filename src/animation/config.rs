use crate::foundation::error::{SvganimError, SvganimResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which animator builds the merged document.
pub enum AnimationMode {
    /// Whole-frame opacity cross-fades. Larger output, no structural assumptions.
    Basic,
    /// Per-node alignment with placeholders and per-node tracks.
    #[default]
    Structural,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Options for one `animate` run.
///
/// Every field has a default, so a partial JSON object is a valid config.
pub struct AnimationConfig {
    /// Seconds each frame is displayed at rest.
    pub static_duration: f64,
    /// Seconds spent crossing from one frame to the next.
    pub transition_duration: f64,
    /// Number of repetitions; `0` or negative loops forever.
    pub loop_count: i64,
    /// Significant digits for every formatted timing number.
    pub precision: u32,
    /// Animator selection.
    pub mode: AnimationMode,
    /// Maximum element nesting accepted from inputs.
    pub max_depth: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            static_duration: 1.0,
            transition_duration: 0.0,
            loop_count: 0,
            precision: 6,
            mode: AnimationMode::Structural,
            max_depth: 256,
        }
    }
}

impl AnimationConfig {
    /// Check value ranges. Both durations being zero is a domain problem caught
    /// later by the timing generator, not a validation failure.
    pub fn validate(&self) -> SvganimResult<()> {
        if !self.static_duration.is_finite() || self.static_duration < 0.0 {
            return Err(SvganimError::validation(
                "static_duration must be finite and >= 0",
            ));
        }
        if !self.transition_duration.is_finite() || self.transition_duration < 0.0 {
            return Err(SvganimError::validation(
                "transition_duration must be finite and >= 0",
            ));
        }
        if self.max_depth == 0 {
            return Err(SvganimError::validation("max_depth must be > 0"));
        }
        Ok(())
    }

    /// `repeatCount` value for SMIL tracks.
    pub fn repeat_count(&self) -> String {
        if self.loop_count <= 0 {
            "indefinite".to_string()
        } else {
            self.loop_count.to_string()
        }
    }

    /// Parse a (possibly partial) JSON config.
    pub fn from_json(s: &str) -> SvganimResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|err| SvganimError::validation(format!("config JSON: {err}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
