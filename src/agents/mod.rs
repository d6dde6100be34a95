pub mod candidates;
pub mod catalog_file;
pub mod project_scanner;

pub use candidates::CandidateLoader;
pub use catalog_file::CatalogFile;
pub use project_scanner::ProjectScannerAgent;
