use std::io::{Read, Write};

use anyhow::Context as _;

use crate::{
    animation::{
        animator::{AnimatorStats, create_animator},
        config::AnimationConfig,
        timing::generate_timings,
    },
    document::{
        namespace::{NamespaceBindings, bind_namespaces},
        parse::parse_document,
        tree::Element,
        write::{declare_namespace, write_document},
    },
    foundation::error::{SvganimError, SvganimResult},
};

/// Local name every input root must have.
pub const ROOT_TAG: &str = "svg";

/// Comment placed first inside every merged document.
///
/// Names the tool and version, followed by the package repository when one is set.
pub fn provenance_comment() -> String {
    let tool = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    match env!("CARGO_PKG_REPOSITORY") {
        "" => format!(" Generated by {tool} "),
        origin => format!(" Generated by {tool} {origin} "),
    }
}

/// A named readable input. The name only appears in diagnostics.
#[derive(Debug)]
pub struct InputSource<R> {
    /// Display name (usually the file path).
    pub name: String,
    /// Document bytes.
    pub reader: R,
}

impl<R: Read> InputSource<R> {
    /// Wrap `reader` under `name`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What [`animate_sources`] did.
pub enum Outcome {
    /// A single input was copied through unchanged.
    Copied {
        /// Number of bytes copied.
        bytes: u64,
    },
    /// Two or more inputs were merged.
    Animated(AnimatorStats),
}

/// Read and parse every input in order, checking that each root is an `<svg>`.
///
/// Each source is consumed and dropped as soon as it has been parsed.
pub fn load_frames<R, I>(inputs: I, max_depth: usize) -> SvganimResult<Vec<Element>>
where
    R: Read,
    I: IntoIterator<Item = InputSource<R>>,
{
    let mut frames = Vec::new();
    for InputSource { name, mut reader } in inputs {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .with_context(|| format!("read input '{name}'"))?;
        drop(reader);

        let root = parse_document(&bytes, &name, max_depth)?;
        if root.name.local != ROOT_TAG {
            return Err(SvganimError::format(name, ROOT_TAG, root.name.local));
        }
        tracing::debug!(input = %name, children = root.element_count(), "parsed frame");
        frames.push(root);
    }
    Ok(frames)
}

/// Build the merged document for already-parsed frames.
///
/// The result root copies frame 0's name and attributes, starts with the provenance
/// comment, and declares frame 0's namespace. Prefixes that merged content borrows from
/// later frames are declared once the animator has run.
pub fn assemble(
    frames: &[Element],
    config: &AnimationConfig,
) -> SvganimResult<(Element, AnimatorStats)> {
    config.validate()?;
    let Some(first) = frames.first() else {
        return Err(SvganimError::validation("no frames to animate"));
    };

    let table = generate_timings(
        frames.len(),
        config.static_duration,
        config.transition_duration,
        config.precision,
    )?;

    let mut result = Element::with_attributes(first.name.clone(), first.attributes.clone());
    result.push_comment(provenance_comment());
    declare_namespace(&mut result);

    let stats = create_animator(config).build(&mut result, frames, &table)?;

    let known = NamespaceBindings::collect(frames);
    let declared = bind_namespaces(&mut result, &known)?;
    if declared > 0 {
        tracing::debug!(declared, "declared namespaces used by later frames");
    }
    Ok((result, stats))
}

/// Merge N >= 2 SVG inputs into one animated SVG written to `output`.
#[tracing::instrument(skip_all, fields(mode = ?config.mode))]
pub fn animate<W, R, I>(output: W, inputs: I, config: &AnimationConfig) -> SvganimResult<AnimatorStats>
where
    W: Write,
    R: Read,
    I: IntoIterator<Item = InputSource<R>>,
{
    config.validate()?;
    let frames = load_frames(inputs, config.max_depth)?;
    let (result, stats) = assemble(&frames, config)?;
    write_document(&result, output)?;
    tracing::info!(
        frames = frames.len(),
        merged_nodes = stats.merged_nodes,
        placeholders = stats.placeholders,
        tracks = stats.tracks,
        frozen_text = stats.frozen_text,
        "wrote animation"
    );
    Ok(stats)
}

/// Copy a single input to `output` byte for byte.
pub fn passthrough<W: Write, R: Read>(mut output: W, mut input: R) -> SvganimResult<u64> {
    let bytes = std::io::copy(&mut input, &mut output).context("copy single input")?;
    output.flush().context("flush output")?;
    Ok(bytes)
}

/// Entry point used by the CLI: one input is copied, two or more are animated.
pub fn animate_sources<W, R>(
    output: W,
    mut inputs: Vec<InputSource<R>>,
    config: &AnimationConfig,
) -> SvganimResult<Outcome>
where
    W: Write,
    R: Read,
{
    match inputs.len() {
        0 => Err(SvganimError::validation("at least one input is required")),
        1 => {
            let single = inputs.remove(0);
            tracing::debug!(input = %single.name, "single input, copying through");
            passthrough(output, single.reader).map(|bytes| Outcome::Copied { bytes })
        }
        _ => animate(output, inputs, config).map(Outcome::Animated),
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
