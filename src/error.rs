use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse configuration file {file:?}. Cause : {cause}")]
    SerdeTomlError { file: String, cause: String },
    #[error("error drawing segment. Cause : {0}")]
    DrawError(String),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError { file: _, cause: _ } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::DrawError(_) => {
            writeln!(output, "{}: {}", Red.paint("[render error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[statmark error]"), error).ok();
        }
    };
}
