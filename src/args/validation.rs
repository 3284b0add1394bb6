use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a player roster
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_roster_format(&json)?;
    Ok(json)
}

/// Validate the roster file format
/// format we expect is this:
/// [{ "id": <int>, "full_name": "Firstname Lastname" }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_roster_format(json: &Value) -> Result<(), String> {
    let Some(players) = json.as_array() else {
        return Err(
            "The player roster is not in the correct format. Expected an array.".to_string(),
        );
    };

    for (i, player) in players.iter().enumerate() {
        if !player.get("id").is_some_and(Value::is_i64) {
            return Err(format!(
                "Player {i} in the roster has no integer id."
            ));
        }
        if !player.get("full_name").is_some_and(Value::is_string) {
            return Err(format!("Player {i} in the roster has no full_name string."));
        }
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the path is not a directory
pub fn check_directory(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("The static directory '{dir}' does not exist."))
    }
}

/// Seasons look like `2022-23`: a start year and the last two digits of the next year.
///
/// # Errors
///
/// Will return `Err` if the season is not in that form
pub fn check_season(season: &str) -> Result<String, String> {
    let invalid = || format!("The season '{season}' should look like 2022-23.");
    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }
    let start: u32 = start.parse().map_err(|_| invalid())?;
    let end: u32 = end.parse().map_err(|_| invalid())?;
    if (start + 1) % 100 != end {
        return Err(invalid());
    }
    Ok(season.to_string())
}
