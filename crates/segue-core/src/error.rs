use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SwitchError {
    #[error("segment index {index} is out of range for {count} segments")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("a segmented switch needs at least 2 segments, got {count}")]
    TooFewSegments { count: usize },
}
