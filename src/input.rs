// std imports
use std::{
    fmt,
    fs::{self, File},
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead>;

// ---

/// A reference to the source of candidate names.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Returns a description of the input reference suitable for messages.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path.display().to_string()),
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> Result<Input> {
        log::debug!("open {}", self.description());

        let stream: InputStream = match self {
            Self::Stdin => Box::new(stdin().lock()),
            Self::File(path) => {
                let meta = fs::metadata(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFound {
                        filename: path.to_string_lossy().into(),
                    },
                    _ => io::Error::new(
                        e.kind(),
                        format!("failed to get information on {}: {}", self.description(), e),
                    )
                    .into(),
                })?;
                if meta.is_dir() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} is a directory", self.description()),
                    )
                    .into());
                }
                let file = File::open(path).map_err(|e| {
                    io::Error::new(e.kind(), format!("failed to open {}: {}", self.description(), e))
                })?;
                Box::new(BufReader::new(file))
            }
        };

        Ok(Input {
            reference: self.clone(),
            stream,
        })
    }
}

impl From<PathBuf> for InputReference {
    /// Treats `-` as standard input and anything else as a file path.
    fn from(path: PathBuf) -> Self {
        if path.to_str() == Some("-") {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

// ---

/// An opened source of candidate names, one name per line.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}
