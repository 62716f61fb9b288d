mod domain;
pub use domain::{Item, MAX_NUM_OF_SPLITS, Matcher, NumOfSplits};

mod config;
pub use config::{Config, GolangConfig, SolidityConfig, SolidityDir};

mod record;
pub use record::{GolangSplit, SoliditySplit};

mod error;
pub use error::ModelError;
