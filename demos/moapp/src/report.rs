//! Human-readable report of layer locations, contents and the merged result.

use std::io::{self, Write};

use moose_config::{Configurator, LayerState, Mapping, file::to_yaml};

use crate::error::{MoappError, Result};

/// Prints the report for `cfg` to standard output.
///
/// # Errors
///
/// Returns [`MoappError::Io`] when writing fails and
/// [`MoappError::Render`] when a mapping cannot be rendered.
pub fn print_report(cfg: &Configurator) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_report_to(&mut stdout, cfg)
}

/// Writes the report for `cfg` to `out`.
///
/// # Errors
///
/// See [`print_report`].
pub fn write_report_to<W: Write>(out: &mut W, cfg: &Configurator) -> Result<()> {
    for layer in cfg.layers() {
        writeln!(
            out,
            "{} configuration file: {} ({})",
            layer.level(),
            layer.path(),
            state_label(layer.state())
        )?;
    }
    for layer in cfg.layers() {
        match layer.state() {
            LayerState::Loaded(mapping) => {
                writeln!(out, "{} configuration:", layer.level())?;
                write_mapping(out, mapping)?;
            }
            state => writeln!(out, "{} configuration: <{}>", layer.level(), state_label(state))?,
        }
    }
    writeln!(out, "configuration object:")?;
    write_mapping(out, cfg.obj())?;
    writeln!(out, "origins:")?;
    for (key, origin) in cfg.merged().origins() {
        writeln!(out, "  {key}: {origin}")?;
    }
    Ok(())
}

fn write_mapping<W: Write>(out: &mut W, mapping: &Mapping) -> Result<()> {
    if mapping.is_empty() {
        writeln!(out, "  {{}}")?;
        return Ok(());
    }
    let yaml = to_yaml(mapping).map_err(MoappError::Render)?;
    for line in yaml.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

const fn state_label(state: &LayerState) -> &'static str {
    match state {
        LayerState::Loaded(_) => "loaded",
        LayerState::Missing => "missing",
        LayerState::Skipped => "skipped",
    }
}
