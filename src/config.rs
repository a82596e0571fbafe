use std::env;

pub const DEFAULT_DATABASE_NAME: &str = "IoT-DB";
pub const DEFAULT_TABLE_NAME: &str = "Batch-Sensors";

/// Upper bound on records in a single WriteRecords request, imposed by Timestream.
pub const MAX_RECORDS_PER_WRITE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_name: String,
    pub table_name: String,
    pub read_timeout_secs: u64,
    pub max_attempts: u32,
    pub records_per_write: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            read_timeout_secs: 20,
            max_attempts: 10,
            records_per_write: MAX_RECORDS_PER_WRITE,
        }
    }
}

impl Config {
    pub fn load_from_env() -> Result<Config, String> {
        let defaults = Config::default();

        let conf = Config {
            database_name: env::var("DATABASE_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.database_name),
            table_name: env::var("TABLE_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.table_name),
            read_timeout_secs: env::var("READ_TIMEOUT_SECS")
                .unwrap_or(defaults.read_timeout_secs.to_string())
                .parse::<u64>()
                .map_err(|e| format!("Error parsing READ_TIMEOUT_SECS to u64 - {}", e))?,
            max_attempts: env::var("MAX_ATTEMPTS")
                .unwrap_or(defaults.max_attempts.to_string())
                .parse::<u32>()
                .map_err(|e| format!("Error parsing MAX_ATTEMPTS to u32 - {}", e))?,
            records_per_write: env::var("RECORDS_PER_WRITE")
                .unwrap_or(defaults.records_per_write.to_string())
                .parse::<usize>()
                .map_err(|e| format!("Error parsing RECORDS_PER_WRITE to usize - {}", e))?,
        };

        if conf.max_attempts == 0 {
            return Err("MAX_ATTEMPTS must be at least 1".to_string());
        }
        if !(1..=MAX_RECORDS_PER_WRITE).contains(&conf.records_per_write) {
            return Err(format!(
                "RECORDS_PER_WRITE must be between 1 and {}, got {}",
                MAX_RECORDS_PER_WRITE, conf.records_per_write
            ));
        }

        Ok(conf)
    }
}
