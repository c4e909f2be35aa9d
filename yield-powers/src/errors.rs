#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PowersError {
    InvalidInteger { name: &'static str, value: String },
    UnsupportedWidth(String),
    InvalidColorChoice(String),
}

impl std::error::Error for PowersError {}

impl std::fmt::Display for PowersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PowersError::InvalidInteger {
                name,
                ref value,
            } => write!(f, "`{}` is not a valid value for {}", value, name),
            PowersError::UnsupportedWidth(ref width) => write!(
                f,
                "unsupported integer width `{}` (expected 32 or 64)",
                width
            ),
            PowersError::InvalidColorChoice(ref choice) => write!(
                f,
                "invalid color choice `{}` (expected auto, always or never)",
                choice
            ),
        }
    }
}
