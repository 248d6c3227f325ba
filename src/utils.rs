use std::env;
use std::path::Path;
use std::process::Command;

/// Ensures the parent directory of a file exists, creating it if necessary
pub fn ensure_parent_exists(path: &Path) -> Result<(), std::io::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

/// Opens the specified URL in the default browser using native commands
pub fn open_browser(url: &str) -> Result<(), std::io::Error> {
    let os = env::consts::OS;
    match os {
        "macos" => {
            Command::new("open").arg(url).spawn()?;
        }
        "windows" => {
            Command::new("cmd").args(["/C", "start", url]).spawn()?;
        }
        "linux" => {
            Command::new("xdg-open").arg(url).spawn()?;
        }
        _ => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!("Unsupported OS: {}", os),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_of_bare_filename() {
        assert!(ensure_parent_exists(Path::new("quakes.html")).is_ok());
    }

    #[test]
    fn test_ensure_parent_creates_directories() {
        let dir = env::temp_dir().join(format!("quakemap-utils-{}", std::process::id()));
        let file = dir.join("nested").join("quakes.html");

        ensure_parent_exists(&file).unwrap();
        assert!(file.parent().unwrap().is_dir());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
