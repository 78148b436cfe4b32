//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "state_path": {
//!     "value": "game_state.json",
//!     "source": "default"
//!   },
//!   "player": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "state_path": {
            "value": config.state_path,
            "source": sources.state_path,
        },
        "player": {
            "value": config.player,
            "source": sources.player,
        },
        "round": {
            "value": config.round,
            "source": sources.round,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        for key in ["state_path", "player", "round"] {
            assert!(json[key]["value"] != serde_json::Value::Null, "{key} value");
            assert!(json[key]["source"].is_string(), "{key} source");
        }
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_environment() {
        // SAFETY: serialized with every other environment-dependent test
        unsafe { std::env::set_var("LOSTCITIES_PLAYER", "0") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("LOSTCITIES_PLAYER") };

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().starts_with("Error: Invalid configuration"));
        assert!(out.is_empty());
    }
}
