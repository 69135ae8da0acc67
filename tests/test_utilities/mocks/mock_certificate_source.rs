use fips_compliance::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock CertificateSource returning a fixed record
///
/// Behaves like the filesystem source: no path, or a path that was not
/// registered with [`MockCertificateSource::with_record`], yields the
/// built-in fallback record.
#[derive(Default, Clone)]
pub struct MockCertificateSource {
    record: Option<CertificateRecord>,
    pub requested: Arc<Mutex<Vec<Option<std::path::PathBuf>>>>,
}

#[allow(dead_code)]
impl MockCertificateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: CertificateRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn load_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl CertificateSource for MockCertificateSource {
    fn load_certificate(&self, path: Option<&Path>) -> Result<LoadedCertificate> {
        self.requested
            .lock()
            .unwrap()
            .push(path.map(Path::to_path_buf));

        match (path, &self.record) {
            (Some(path), Some(record)) => Ok(LoadedCertificate::new(
                record.clone(),
                CertificateOrigin::File(path.to_path_buf()),
            )),
            (requested, _) => Ok(LoadedCertificate::new(
                CertificateRecord::fallback(),
                CertificateOrigin::Fallback {
                    requested: requested.map(Path::to_path_buf),
                },
            )),
        }
    }
}
