use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Error: The file '{}' was not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Error: Permission denied to read the file {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("An unexpected error occured {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TransformError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path,
            Self::Io { path, .. } => path,
        }
    }

    fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformSummary {
    pub output: PathBuf,
    pub word_count: usize,
}

impl TransformSummary {
    pub fn message(&self) -> String {
        format!(
            "Output message has been sent to : {} and contains {} words",
            self.output.display(),
            self.word_count
        )
    }
}

/// Uppercased text followed by the word count trailer.
pub fn render(contents: &str) -> (String, usize) {
    let word_count = contents.split_whitespace().count();
    let rendered = format!("{}\n\nWord count : {}\n", contents.to_uppercase(), word_count);
    (rendered, word_count)
}

/// Reads `input` completely before touching `output`, so a failed read
/// never leaves a partial output file behind.
pub fn transform_file(input: &Path, output: &Path) -> Result<TransformSummary, TransformError> {
    let contents = fs::read_to_string(input).map_err(|e| TransformError::from_read(input, e))?;
    let (rendered, word_count) = render(&contents);

    fs::write(output, rendered).map_err(|source| TransformError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "Transformed {} -> {} ({} words)",
        input.display(),
        output.display(),
        word_count
    );

    Ok(TransformSummary {
        output: output.to_path_buf(),
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uppercases_and_counts() {
        let (text, count) = render("hello rust\nworld  again");
        assert_eq!(count, 4);
        assert_eq!(text, "HELLO RUST\nWORLD  AGAIN\n\nWord count : 4\n");
    }

    #[test]
    fn transform_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "green and growing").unwrap();

        let summary = transform_file(&input, &output).unwrap();
        assert_eq!(summary.word_count, 3);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "GREEN AND GROWING\n\nWord count : 3\n"
        );
        assert!(summary.message().ends_with("and contains 3 words"));
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("output.txt");

        let err = transform_file(&input, &output).unwrap_err();
        assert!(matches!(err, TransformError::NotFound(_)));
        assert!(err.to_string().contains("was not found"));
        assert!(!output.exists());
    }

    #[test]
    fn permission_denied_is_reported_by_path() {
        let path = Path::new("secret.txt");
        let err = TransformError::from_read(path, io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, TransformError::PermissionDenied(_)));
        assert_eq!(err.path(), path);
        assert_eq!(
            err.to_string(),
            "Error: Permission denied to read the file secret.txt"
        );
    }

    #[test]
    fn directory_input_is_an_unexpected_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");

        let err = transform_file(dir.path(), &output).unwrap_err();
        assert!(err.to_string().starts_with("An unexpected error occured"));
        assert!(!output.exists());
    }
}
