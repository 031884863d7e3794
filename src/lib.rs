//! svganim merges a sequence of static SVG frames into one self-contained animated SVG.
//!
//! The output loops through the frames using SMIL `<animate>` tracks, with optional
//! cross-fade transitions. Two strategies are available:
//!
//! - [`AnimationMode::Structural`] aligns the frames node by node and animates only what
//!   changes (opacity and attribute values).
//! - [`AnimationMode::Basic`] wraps every frame in its own group and cross-fades whole
//!   groups.
//!
//! Most callers only need [`animate`] (or [`animate_sources`], which also handles the
//! single-input passthrough) and an [`AnimationConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod document;
/// Reading inputs, assembling the merged document, and writing it out.
pub mod pipeline;

pub use crate::foundation::error::{SvganimError, SvganimResult};

pub use crate::animation::animator::{Animator, AnimatorStats, create_animator};
pub use crate::animation::basic::BasicAnimator;
pub use crate::animation::config::{AnimationConfig, AnimationMode};
pub use crate::animation::structural::{
    AlignedPosition, Slot, StructuralAnimator, align_level, position_tracks,
};
pub use crate::animation::timing::{KeyframeTable, generate_timings};
pub use crate::animation::track::{AnimateTrack, loop_values};
pub use crate::document::namespace::{NamespaceBindings, bind_namespaces};
pub use crate::document::parse::parse_document;
pub use crate::document::style::{StyleProperties, get_style_property, set_style_property};
pub use crate::document::tree::{Attribute, Attributes, Element, Node, QualName, SVG_NAMESPACE};
pub use crate::document::write::{declare_namespace, to_string, write_document};
pub use crate::pipeline::{
    InputSource, Outcome, animate, animate_sources, assemble, load_frames, passthrough,
    provenance_comment,
};
