use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The color model does not match any accepted form.
    #[error("Syntax error in the specification of the color model: {0:?}.")]
    ModelSyntax(String),
    /// A color is not written as `#RRGGBB`.
    #[error("Invalid color {0:?}: expected #RRGGBB.")]
    InvalidColor(String),
    /// Too few colors were given for the color model.
    #[error("Color model {model} requires at least {required} colors, {given} given.")]
    MissingColors {
        model: &'static str,
        required: usize,
        given: usize,
    },
    /// Both components of the aspect ratio must be positive.
    #[error("Aspect ratio components must be positive, got {x}:{y}.")]
    NonPositiveRatio { x: u32, y: u32 },
    /// The number of cells given disagrees with the size of the grid.
    #[error("Mismatched dimensions: expected {expected} cells, {given} given.")]
    DimensionMismatch { expected: usize, given: usize },
    /// Ordinals run in `1..=total`.
    #[error("Generation ordinal {ordinal} is out of range 1..={total}.")]
    InvalidOrdinal { ordinal: usize, total: usize },
    /// The first generation of a simulation was built for another run length.
    #[error("Generation 0 is ordinal {ordinal} of {total}, expected 1 of {count}.")]
    OrdinalMismatch {
        ordinal: usize,
        total: usize,
        count: usize,
    },
    /// A simulation needs at least one generation.
    #[error("The number of generations must be positive.")]
    ZeroGenerations,
    /// The averaging window needs at least one frame.
    #[error("The averaging window must be positive.")]
    ZeroWindow,
    /// Frames were requested before every generation was computed.
    #[error("Only {computed} of {expected} generations have been computed.")]
    Incomplete { computed: usize, expected: usize },
    /// A command line flag carries a value that cannot be parsed.
    #[error("Invalid value {value:?} for --{flag}.")]
    InvalidArgument { flag: String, value: String },
    /// A command line flag that is not recognized.
    #[error("Unknown argument: {0}.")]
    UnknownArgument(String),
    #[error("GIF encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors detected before a simulation starts, i.e.
    /// those caused by caller-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Error::Incomplete { .. } | Error::Encoding(_) | Error::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
