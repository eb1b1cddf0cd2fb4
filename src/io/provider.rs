//! Where the batch gets its input table and background image from when they
//! are not given on the command line.
use std::path::PathBuf;

#[cfg(feature = "dialogs")]
use tracing::info;

pub trait InputProvider {
    /// Ask for the quiz table; None when the user cancels
    fn pick_table(&self) -> Option<PathBuf>;

    /// Ask for the background image; None when the user cancels
    fn pick_background(&self) -> Option<PathBuf>;
}

/// Never prompts; every pick is a cancellation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl InputProvider for NoPrompt {
    fn pick_table(&self) -> Option<PathBuf> {
        None
    }

    fn pick_background(&self) -> Option<PathBuf> {
        None
    }
}

/// Native open-file dialogs
#[cfg(feature = "dialogs")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogProvider;

#[cfg(feature = "dialogs")]
impl InputProvider for DialogProvider {
    fn pick_table(&self) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title("Select quiz table")
            .add_filter("Spreadsheet", &["xlsx", "xlsm", "xls", "ods"])
            .pick_file()?;
        info!("Selected input table: {:?}", path);
        Some(path)
    }

    fn pick_background(&self) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title("Select background image")
            .add_filter("Background image", &["jpg", "jpeg", "png"])
            .pick_file()?;
        info!("Selected background image: {:?}", path);
        Some(path)
    }
}

/// Dialogs when built with them, otherwise no prompting
pub fn default_provider() -> Box<dyn InputProvider> {
    #[cfg(feature = "dialogs")]
    {
        Box::new(DialogProvider)
    }
    #[cfg(not(feature = "dialogs"))]
    {
        Box::new(NoPrompt)
    }
}
