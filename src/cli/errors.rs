use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No input table selected (pass --input <FILE>)")]
    NoInputTable,

    #[error("No background image selected (pass --background <FILE> or --solid-background)")]
    NoBackgroundImage,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] quizcard::Error),
}
