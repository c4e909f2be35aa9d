use crate::errors::PowersError;
use clap::{App, AppSettings, Arg, ArgMatches};
use std::str::FromStr;

/// The base together with the integer width the sequence is computed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    I32(i32),
    I64(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseMode {
    /// Pause only when attached to an interactive terminal.
    Auto,
    Always,
    Never,
}

#[derive(Debug)]
pub struct AppArgs {
    pub base: Base,
    pub exponent: i64,
    pub separator: String,
    pub color: ColorMode,
    pub pause: PauseMode,
}

/// Parses arguments from the command line and returns them as an `AppArgs` struct.
pub fn parse_cli_args() -> Result<AppArgs, PowersError> {
    args_from_matches(&app().get_matches())
}

pub fn app() -> App<'static, 'static> {
    App::new("Yield Powers")
        .version("0.1.0")
        .author("Adolph C. <adolphc@outloook.com>")
        .about("Lazily prints the successive powers of a number.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("base")
                .short("b")
                .long("base")
                .takes_value(true)
                .value_name("BASE")
                .default_value("2")
                .allow_hyphen_values(true)
                .help("The number to raise to each successive power."),
        )
        .arg(
            Arg::with_name("exponent")
                .short("e")
                .long("exponent")
                .takes_value(true)
                .value_name("EXP")
                .default_value("8")
                .allow_hyphen_values(true)
                .help("How many powers to print. Zero or negative prints nothing."),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("BITS")
                .default_value("32")
                .help("Bit width of the signed accumulator (32 or 64). Overflow wraps."),
        )
        .arg(
            Arg::with_name("separator")
                .short("s")
                .long("separator")
                .takes_value(true)
                .value_name("SEP")
                .default_value(" ")
                .help("Text written after every value."),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .takes_value(true)
                .value_name("WHEN")
                .default_value("never")
                .help("Colorize values: never, always or auto (terminal only)."),
        )
        .arg(
            Arg::with_name("pause")
                .long("pause")
                .help("Always wait for a keypress before exiting."),
        )
        .arg(
            Arg::with_name("no-pause")
                .long("no-pause")
                .conflicts_with("pause")
                .help("Never wait for a keypress before exiting."),
        )
}

pub fn args_from_matches(matches: &ArgMatches) -> Result<AppArgs, PowersError> {
    let base_str = matches.value_of("base").unwrap_or("2");
    let base = match matches.value_of("width").unwrap_or("32") {
        "32" => Base::I32(parse_integer("base", base_str)?),
        "64" => Base::I64(parse_integer("base", base_str)?),
        other => return Err(PowersError::UnsupportedWidth(other.to_string())),
    };

    let exponent = parse_integer("exponent", matches.value_of("exponent").unwrap_or("8"))?;
    let separator = matches.value_of("separator").unwrap_or(" ").to_string();

    let color = match matches.value_of("color").unwrap_or("never") {
        "auto" => ColorMode::Auto,
        "always" => ColorMode::Always,
        "never" => ColorMode::Never,
        other => return Err(PowersError::InvalidColorChoice(other.to_string())),
    };

    let pause = if matches.is_present("pause") {
        PauseMode::Always
    } else if matches.is_present("no-pause") {
        PauseMode::Never
    } else {
        PauseMode::Auto
    };

    Ok(AppArgs {
        base,
        exponent,
        separator,
        color,
        pause,
    })
}

fn parse_integer<T: FromStr>(name: &'static str, value: &str) -> Result<T, PowersError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| PowersError::InvalidInteger {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppArgs, PowersError> {
        let mut argv = vec!["yield-powers"];
        argv.extend_from_slice(args);
        let matches = app()
            .get_matches_from_safe(argv)
            .expect("arguments should be accepted by clap");
        args_from_matches(&matches)
    }

    #[test]
    fn test_defaults_match_reference_program() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.base, Base::I32(2));
        assert_eq!(args.exponent, 8);
        assert_eq!(args.separator, " ");
        assert_eq!(args.color, ColorMode::Never);
        assert_eq!(args.pause, PauseMode::Auto);
    }

    #[test]
    fn test_negative_values() {
        let args = parse(&["-b", "-1", "--exponent", "-3"]).unwrap();
        assert_eq!(args.base, Base::I32(-1));
        assert_eq!(args.exponent, -3);
    }

    #[test]
    fn test_wide_base() {
        let args = parse(&["--width", "64", "--base", "5000000000"]).unwrap();
        assert_eq!(args.base, Base::I64(5_000_000_000));
    }

    #[test]
    fn test_base_out_of_range_for_width() {
        let err = parse(&["--base", "5000000000"]).unwrap_err();
        assert_eq!(
            err,
            PowersError::InvalidInteger {
                name: "base",
                value: "5000000000".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_bad_width_and_color() {
        assert_eq!(
            parse(&["-w", "16"]).unwrap_err(),
            PowersError::UnsupportedWidth("16".to_string())
        );
        assert_eq!(
            parse(&["--color", "sometimes"]).unwrap_err(),
            PowersError::InvalidColorChoice("sometimes".to_string())
        );
    }

    #[test]
    fn test_pause_flags() {
        assert_eq!(parse(&["--pause"]).unwrap().pause, PauseMode::Always);
        assert_eq!(parse(&["--no-pause"]).unwrap().pause, PauseMode::Never);
        assert!(app()
            .get_matches_from_safe(vec!["yield-powers", "--pause", "--no-pause"])
            .is_err());
    }

    #[test]
    fn test_color_is_opt_in() {
        assert_eq!(parse(&["--color", "always"]).unwrap().color, ColorMode::Always);
        assert_eq!(parse(&["--color", "auto"]).unwrap().color, ColorMode::Auto);
    }

    #[test]
    fn test_custom_separator() {
        let args = parse(&["-s", ", "]).unwrap();
        assert_eq!(args.separator, ", ");
    }
}
