use std::env;
use std::fs;
use std::path::Path;

/// Variables the app reads through `option_env!`.
const FORWARDED_KEYS: &[&str] = &["API_URL", "PAGE_SIZE", "SEARCH_DEBOUNCE_MS", "ENABLE_LOGGING"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using compiled-in defaults (API_URL=http://localhost:5000).");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // Real environment wins over .env
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
