use std::io::Write;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Not enough arguments; holds the rendered usage line.
    Usage(String),
    /// Any other argument problem, including `--help` and `--version`.
    Cli(clap::Error),
    /// The input path did not decode to an image.
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The window could not be opened or its event loop failed.
    Display(String),
    Io(std::io::Error),
    Image(image::ImageError),
    Json(serde_json::Error),
}

impl Error {
    /// Failures that are reported to the user and end the run normally.
    pub fn is_early_exit(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::ImageLoad { .. })
    }

    /// Process exit status: 0 for early exits, 1 for faults.
    pub fn exit_status(&self) -> u8 {
        if self.is_early_exit() {
            0
        } else {
            1
        }
    }

    /// Print the message the way the terminal user sees it and return the
    /// exit status. Early exits go to `out`, faults to `err_out`.
    pub fn report<O, E>(&self, out: &mut O, err_out: &mut E) -> u8
    where
        O: Write,
        E: Write,
    {
        let sink: &mut dyn Write = if self.is_early_exit() { out } else { err_out };
        // nothing sensible left to do if the terminal is gone
        let _ = writeln!(sink, "{}", self);
        self.exit_status()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Usage(usage) => write!(f, "{}", usage),
            Error::Cli(err) => write!(f, "{}", err),
            Error::ImageLoad { path, .. } => write!(f, "Failed to load {}", path.display()),
            Error::Display(msg) => write!(f, "Display error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Image(err) => write!(f, "Image error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ImageLoad { source, .. } => Some(source),
            Error::Cli(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Usage(_) | Error::Display(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<eframe::Error> for Error {
    fn from(err: eframe::Error) -> Self {
        Error::Display(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn not_found() -> image::ImageError {
        image::ImageError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    #[rstest]
    #[case(Error::Usage("Usage: select-roi <INPUT_IMAGE> <OUTPUT_JSON>".into()), 0, true)]
    #[case(Error::ImageLoad { path: PathBuf::from("cat.jpg"), source: not_found() }, 0, true)]
    #[case(Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)), 1, false)]
    #[case(Error::Display("no display".into()), 1, false)]
    #[case(Error::Image(not_found()), 1, false)]
    fn report_routes_message_and_status(
        #[case] err: Error,
        #[case] status: u8,
        #[case] to_stdout: bool,
    ) {
        let (mut out, mut err_out) = (Vec::new(), Vec::new());
        assert_eq!(err.report(&mut out, &mut err_out), status);
        assert_eq!(err.exit_status(), status);

        let expected = format!("{}\n", err);
        let (printed, silent) = if to_stdout { (out, err_out) } else { (err_out, out) };
        assert_eq!(String::from_utf8(printed).unwrap(), expected);
        assert!(silent.is_empty());
    }

    #[test]
    fn image_load_names_the_path() {
        let err = Error::ImageLoad {
            path: PathBuf::from("missing/cat.jpg"),
            source: image::ImageError::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )),
        };
        assert_eq!(err.to_string(), "Failed to load missing/cat.jpg");
        assert!(err.is_early_exit());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn write_failures_are_not_early_exits() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!err.is_early_exit());
        assert!(Error::Display("no display".into()).to_string().contains("no display"));
    }
}
