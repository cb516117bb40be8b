//! High-level loading of the launch records table.
//!
//! This module combines the CSV/JSON parsers with format detection and
//! dataset checksumming, producing the record set the Record Store is built
//! from. Load failures are fatal by design: the dashboard never starts with
//! a partially loaded table.
//!
//! # Example
//!
//! ```no_run
//! use launchdash_rust::io::loaders::RecordLoader;
//! use std::path::Path;
//!
//! let result = RecordLoader::load_from_file(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} launch records", result.num_records);
//! ```

pub mod loaders;


pub use loaders::{RecordLoadResult, RecordLoader, RecordSourceType};
