use std::path::PathBuf;

/// App data directory (~/.gemini-chat)
pub fn app_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir())
        .join(".gemini-chat")
}

/// config.json path
pub fn config_json_path() -> PathBuf {
    app_data_dir().join("config.json")
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> std::io::Result<PathBuf> {
    let dir = app_data_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
