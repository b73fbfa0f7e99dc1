use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> i64;
    fn version(&self) -> i64;
}

// Configuration abstracts startup options for the circulation desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub seed_sample_data: bool,
    pub trace_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            seed_sample_data: true,
            trace_level: "WARN".to_string(),
        }
    }

    // Recognizes --verbose, --no-seed and --branch <id>; anything else is ignored.
    pub fn from_args<I: IntoIterator<Item=String>>(args: I) -> Self {
        let mut config = Configuration::new("main");
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--verbose" => config.trace_level = "DEBUG".to_string(),
                "--no-seed" => config.seed_sample_data = false,
                "--branch" => {
                    if let Some(branch) = iter.next() {
                        config.branch_id = branch;
                    }
                }
                _ => {}
            }
        }
        config
    }

    pub fn max_level(&self) -> tracing::Level {
        self.trace_level.parse().unwrap_or(tracing::Level::WARN)
    }
}
