//! Receipt text and file output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use shopcheck_core::DomainResult;
use shopcheck_inventory::Assortment;

use crate::config::ReceiptConfig;

const LINE_SEPARATOR: &str = "----------------------";

/// What happened to a receipt after validation passed.
///
/// A failed write is an outcome, not an error: it has already been logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptOutcome {
    Written(PathBuf),
    WriteFailed { path: PathBuf, reason: String },
}

impl ReceiptOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::WriteFailed { path, .. } => path,
        }
    }
}

/// Receipt body for `selected`:
///
/// ```text
/// <order number>
///
/// <name>
/// <qty> x <price>
/// ----------------------
/// Total: <total>
/// ```
pub fn render_receipt(
    selected: &Assortment,
    order_number: &str,
    config: &ReceiptConfig,
) -> DomainResult<String> {
    let total = selected.total()?;

    let mut text = format!("{order_number}\n\n");
    for (product, quantity) in selected.iter() {
        text.push_str(&format!(
            "{}\n{} x {}\n{}\n",
            product.name(),
            quantity,
            product.price(),
            LINE_SEPARATOR
        ));
    }
    text.push_str(&format!(
        "{}{}\n",
        config.total_label,
        total.format_fixed(config.decimal_separator)
    ));
    Ok(text)
}

/// Write `text` to `path`, creating the parent directory if needed.
///
/// Never returns an error: failures are logged and reported in the outcome.
pub(crate) fn write_receipt(path: PathBuf, text: &str) -> ReceiptOutcome {
    match try_write(&path, text) {
        Ok(()) => {
            info!(path = %path.display(), "receipt written");
            ReceiptOutcome::Written(path)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "error writing receipt");
            ReceiptOutcome::WriteFailed {
                path,
                reason: e.to_string(),
            }
        }
    }
}

fn try_write(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcheck_products::Product;
    use std::sync::{Arc, Mutex};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the level of every event it sees.
    #[derive(Clone, Default)]
    struct EventLevels(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for EventLevels {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    fn levels_during<T>(f: impl FnOnce() -> T) -> (T, Vec<Level>) {
        let levels = EventLevels::default();
        let subscriber = tracing_subscriber::registry().with(levels.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        let captured = levels.0.lock().unwrap().clone();
        (result, captured)
    }

    fn order() -> Assortment {
        let mut selected = Assortment::new();
        selected.add(Product::new(1, "T-shirt", 15.99).unwrap(), 3).unwrap();
        selected.add(Product::new(2, "Jeans", 45.00).unwrap(), 2).unwrap();
        selected
    }

    #[test]
    fn renders_exact_layout() {
        let text = render_receipt(&order(), "20241127", &ReceiptConfig::default()).unwrap();

        assert_eq!(
            text,
            "20241127\n\
             \n\
             T-shirt\n\
             3 x 15.99\n\
             ----------------------\n\
             Jeans\n\
             2 x 45.0\n\
             ----------------------\n\
             Total: 137,97\n"
        );
    }

    #[test]
    fn total_label_comes_from_config() {
        let config = ReceiptConfig {
            total_label: "Sum: ".to_string(),
            decimal_separator: '.',
            ..ReceiptConfig::default()
        };
        let text = render_receipt(&order(), "1", &config).unwrap();
        assert!(text.ends_with("Sum: 137.97\n"));
    }

    #[test]
    fn write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("7.txt");

        let outcome = write_receipt(path.clone(), "7\n");

        assert_eq!(outcome, ReceiptOutcome::Written(path.clone()));
        assert_eq!(fs::read_to_string(path).unwrap(), "7\n");
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        // A regular file cannot act as a directory.
        let path = blocker.path().join("7.txt");

        let outcome = write_receipt(path.clone(), "7\n");

        assert!(!outcome.is_written());
        assert_eq!(outcome.path(), path.as_path());
    }

    #[test]
    fn write_failure_is_logged_as_error() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("7.txt");

        let (outcome, levels) = levels_during(|| write_receipt(path, "7\n"));

        assert!(!outcome.is_written());
        assert_eq!(levels, vec![Level::ERROR]);
    }

    #[test]
    fn successful_write_is_logged_as_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("7.txt");

        let (outcome, levels) = levels_during(|| write_receipt(path, "7\n"));

        assert!(outcome.is_written());
        assert_eq!(levels, vec![Level::INFO]);
    }
}
