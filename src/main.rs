//! Desktop entrypoint.

use codex::config::{
    ENV_CARET_BLINK_SECS, ENV_FONT_SIZE, ENV_KEY_REPEAT_DELAY, ENV_KEY_REPEAT_INTERVAL,
    ENV_LINE_HEIGHT, ENV_TEXT_PADDING,
};
use codex::{ConfigError, EditorConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    if args.iter().any(|arg| arg == "--check-config") {
        match check_config(|key| std::env::var(key).ok()) {
            Ok(config) => println!("{:#?}", config),
            Err(err) => {
                eprintln!("invalid configuration: {}", err);
                std::process::exit(2);
            }
        }
        return;
    }

    if let Err(err) = codex::run() {
        eprintln!("codex error: {}", err);
        std::process::exit(1);
    }
}

fn check_config<F>(lookup: F) -> Result<EditorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    EditorConfig::try_from_lookup(lookup)
}

fn print_help() {
    println!("Codex\n");
    println!("Usage: codex [OPTIONS]\n");
    println!("Options:");
    println!("  --check-config    Validate environment configuration and print it");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  {:<26}Text size in points (default: 16)", ENV_FONT_SIZE);
    println!("  {:<26}Wrapped row height in pixels (default: 18)", ENV_LINE_HEIGHT);
    println!("  {:<26}Inset between field border and text (default: 8)", ENV_TEXT_PADDING);
    println!("  {:<26}Caret blink half-period in seconds (default: 0.5)", ENV_CARET_BLINK_SECS);
    println!("  {:<26}Frames before a held key repeats (default: 25)", ENV_KEY_REPEAT_DELAY);
    println!("  {:<26}Frames between repeats (default: 2)", ENV_KEY_REPEAT_INTERVAL);
    println!("  {:<26}Log filter (default: codex=warn,codex_core=info,codex_gui=info)", "RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_config_reports_bad_values() {
        let err = check_config(|key| (key == ENV_FONT_SIZE).then(|| "huge".to_string()))
            .expect_err("font size should be rejected");
        assert!(matches!(err, ConfigError::InvalidNumber { key, .. } if key == ENV_FONT_SIZE));
    }

    #[test]
    fn check_config_accepts_empty_environment() {
        assert_eq!(check_config(|_| None), Ok(EditorConfig::default()));
    }
}
