use tracing::info;

/// Coarse byte progress for a single upload, labeled with the file name.
///
/// The pipeline reads the whole file before transferring it, so the indicator
/// moves in one jump rather than incrementally. It never advances past its
/// total.
pub struct UploadProgress {
    label: String,
    total_bytes: u64,
    transferred_bytes: u64,
}

impl UploadProgress {
    #[must_use]
    pub fn new(label: &str, total_bytes: u64) -> Self {
        Self {
            label: label.to_owned(),
            total_bytes,
            transferred_bytes: 0,
        }
    }

    /// Advances the indicator, clamped to the total.
    pub fn advance(&mut self, bytes: u64) {
        self.transferred_bytes = self
            .transferred_bytes
            .saturating_add(bytes)
            .min(self.total_bytes);
        info!(
            "⬆️ {}: {} / {}",
            self.label,
            human_bytes(self.transferred_bytes),
            human_bytes(self.total_bytes)
        );
    }

    /// Closes the indicator after a successful transfer.
    pub fn finish(self) {
        info!(
            "✅ {}: upload complete ({})",
            self.label,
            human_bytes(self.total_bytes)
        );
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    #[must_use]
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes
    }
}

/// Formats a byte count with binary units.
#[must_use]
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
