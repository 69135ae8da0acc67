use fips_compliance::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock IntegrityChecker with a configurable verdict
#[derive(Default, Clone)]
pub struct MockIntegrityChecker {
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockIntegrityChecker {
    pub fn passing() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IntegrityChecker for MockIntegrityChecker {
    fn check_integrity(&self, _module: &ModuleDescriptor) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => anyhow::bail!("{}", reason),
            None => Ok(()),
        }
    }
}
