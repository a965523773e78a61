use std::path::PathBuf;

/// Secondary sound directory used when the primary one does not exist.
pub(crate) fn system_sounds_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/System/Library/Sounds")
    }
    #[cfg(target_os = "windows")]
    {
        PathBuf::from(r"C:\Windows\Media")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from("/usr/share/sounds/freedesktop/stereo")
    }
}
