use std::path::{Path, PathBuf};

/// Input file and the outputs derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePaths {
    pub uvtt: PathBuf,
    pub png: PathBuf,
    pub jpg: PathBuf,
    pub xml: PathBuf,
}

/// Derive output paths from the input's file name.
///
/// Outputs drop the input's directory; they land in `output_dir` when given,
/// otherwise they are bare relative file names.
pub fn compose_file_paths(input: &Path, output_dir: Option<&Path>) -> FilePaths {
    let output = |ext: &str| {
        let name = input.with_extension(ext);
        let name = name.file_name().map(PathBuf::from).unwrap_or_default();
        match output_dir {
            Some(dir) => dir.join(name),
            None => name,
        }
    };

    FilePaths {
        uvtt: input.to_path_buf(),
        png: output("png"),
        jpg: output("jpg"),
        xml: output("xml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_only() {
        let paths = compose_file_paths(Path::new("filename.dd2vtt"), None);
        assert_eq!(paths.uvtt, PathBuf::from("filename.dd2vtt"));
        assert_eq!(paths.png, PathBuf::from("filename.png"));
        assert_eq!(paths.jpg, PathBuf::from("filename.jpg"));
        assert_eq!(paths.xml, PathBuf::from("filename.xml"));
    }

    #[test]
    fn test_file_with_path() {
        let paths = compose_file_paths(Path::new("abc/filename.dd2vtt"), None);
        assert_eq!(paths.uvtt, PathBuf::from("abc/filename.dd2vtt"));
        assert_eq!(paths.png, PathBuf::from("filename.png"));
        assert_eq!(paths.jpg, PathBuf::from("filename.jpg"));
        assert_eq!(paths.xml, PathBuf::from("filename.xml"));
    }

    #[test]
    fn test_file_with_output_path() {
        let paths = compose_file_paths(Path::new("filename.dd2vtt"), Some(Path::new("xyz")));
        assert_eq!(paths.uvtt, PathBuf::from("filename.dd2vtt"));
        assert_eq!(paths.png, PathBuf::from("xyz/filename.png"));
        assert_eq!(paths.jpg, PathBuf::from("xyz/filename.jpg"));
        assert_eq!(paths.xml, PathBuf::from("xyz/filename.xml"));
    }

    #[test]
    fn test_file_with_path_and_output_path() {
        let paths = compose_file_paths(Path::new("abc/filename.dd2vtt"), Some(Path::new("xyz")));
        assert_eq!(paths.uvtt, PathBuf::from("abc/filename.dd2vtt"));
        assert_eq!(paths.png, PathBuf::from("xyz/filename.png"));
        assert_eq!(paths.jpg, PathBuf::from("xyz/filename.jpg"));
        assert_eq!(paths.xml, PathBuf::from("xyz/filename.xml"));
    }

    #[test]
    fn test_uvtt_extension() {
        let paths = compose_file_paths(Path::new("maps/cave.v2.uvtt"), None);
        assert_eq!(paths.xml, PathBuf::from("cave.v2.xml"));
    }
}
