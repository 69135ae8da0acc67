mod formatter_factory;
mod integrity_checker_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use integrity_checker_factory::IntegrityCheckerFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
