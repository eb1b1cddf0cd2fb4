//! I/O layer: spreadsheet input, PNG writers, and the input-provider and
//! preview-sink seams that stand in for interactive dialogs and viewers.
pub mod preview;
pub mod provider;
pub mod table;
pub mod writers;

pub use preview::{FilePreview, PreviewSink, ViewerPreview};
pub use provider::{InputProvider, NoPrompt, default_provider};
pub use table::{Cell, Column, TableRow, read_table};
