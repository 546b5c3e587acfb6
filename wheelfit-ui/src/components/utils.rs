//! Utility functions for UI components

/// Format file size in human-readable form
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bytes() {
        assert_eq!(format_file_size(512), "512 B");
    }

    #[test]
    fn formats_kilobytes() {
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn formats_megabytes() {
        assert_eq!(format_file_size(10 * 1024 * 1024), "10.0 MB");
    }
}
