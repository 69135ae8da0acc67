/// Filesystem adapters for certificate input and artifact output
mod artifact_writer;
mod certificate_reader;
mod file_writer;

pub use artifact_writer::FileSystemArtifactWriter;
pub use certificate_reader::FileSystemCertificateSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
