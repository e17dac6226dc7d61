use crate::transform::params::Variant;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("{variant} pipeline expects {expected} parameters, got {actual}")]
    ParamCount {
        variant: Variant,
        expected: usize,
        actual: usize,
    },
    #[error("{width}x{height} image needs {expected} pixels, got {actual}")]
    PixelCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("expected 3 color channels, got {0}")]
    ChannelCount(usize),
    #[error("invalid pipeline constants: {0}")]
    Config(#[from] serde_json::Error),
    #[error("constant `{name}` out of range: {value}")]
    InvalidConstant { name: &'static str, value: f64 },
}
