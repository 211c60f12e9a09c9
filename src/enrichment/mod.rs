//! Music video identification - resolves metadata from external databases.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`imvdb/dto.rs`, `audiodb/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Selection / reconcile** - Candidate ranking and the folder/artist gate
//! - **Service** - High-level orchestration of the identification flow
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use enrichment::{IdentificationService, IdentifyConfig};
//!
//! let config = IdentifyConfig {
//!     imvdb_api_key: "your-api-key".to_string(),
//!     ..Default::default()
//! };
//! let service = IdentificationService::new(config);
//!
//! let file = VideoFile::from_path(Path::new("Daft Punk/Daft Punk - One More Time.mp4"))?;
//! let result = service.identify(&file).await?;
//! println!("Title: {}, Year: {}", result.record.title, result.record.year);
//! ```

pub mod audiodb;
pub mod domain;
pub mod imvdb;
pub mod reconcile;
pub mod service;
pub mod traits;

pub use domain::{EnrichmentError, IdentifyError, LookupOutcome, ParsedFileName, VideoFile};
pub use reconcile::{Verdict, reconcile};
pub use service::{IdentificationService, Identification, IdentifyConfig};
