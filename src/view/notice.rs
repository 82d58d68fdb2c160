//! User-facing notices

use std::fmt;

/// A blocking notification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Upload triggered with no file selected. Raised before any request.
    NoFileSelected,
    /// Anything went wrong between sending the file and reading the counts
    UploadOrAnalysisFailed,
}

impl Notice {
    /// Fixed message text
    pub const fn message(self) -> &'static str {
        match self {
            Notice::NoFileSelected => "Please upload a CSV file!",
            Notice::UploadOrAnalysisFailed => "Error uploading file. Please try again.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Channel the view raises notices on.
///
/// Implementations are expected to block until the user acknowledges, like a
/// browser `alert`.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
