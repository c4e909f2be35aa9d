use std::fmt::Display;
use termcolor::{Color, ColorSpec, WriteColor};

pub struct OutputConfig {
    pub separator: String,
    pub value_color: ColorSpec,
}

impl OutputConfig {
    pub fn new(separator: impl Into<String>) -> OutputConfig {
        let mut value_color = ColorSpec::new();
        value_color.set_fg(Some(Color::Cyan)).set_bold(true);

        OutputConfig {
            separator: separator.into(),
            value_color,
        }
    }
}

/// Writes every value pulled from `values` followed by the configured separator and returns how
/// many values were written. Values are pulled one at a time, so nothing is computed ahead of the
/// write that uses it.
pub fn write_sequence<W, I>(
    output: &mut W,
    values: I,
    config: &OutputConfig,
) -> anyhow::Result<u64>
where
    W: WriteColor + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written = 0u64;

    for value in values {
        output.set_color(&config.value_color)?;
        write!(output, "{}", value)?;
        output.reset()?;
        output.write_all(config.separator.as_bytes())?;

        tracing::trace!(index = written, %value, "wrote value");
        written += 1;
    }

    Ok(written)
}
