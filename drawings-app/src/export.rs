//! "Export as Image": save dialog, offscreen render, then open in the system
//! viewer. Failures are logged only.

use std::io;
use std::path::Path;

use tracing::{error, info};

use crate::app::DrawingsApp;
use crate::app_dir;

impl DrawingsApp {
    pub(crate) fn export_image(&self) {
        let dialog = rfd::FileDialog::new()
            .set_directory(app_dir::home_directory())
            .set_file_name(&self.preferences.export_file_name)
            .add_filter("PNG image", &["png"]);
        let Some(path) = dialog.save_file() else {
            return;
        };

        let [canvas_width, canvas_height] = self.canvas_size;
        if let Err(e) = self
            .controller
            .request_export(&path, canvas_width, canvas_height)
        {
            error!("Export to {} failed: {e}", path.display());
            return;
        }

        if self.preferences.open_after_export {
            if let Err(e) = open_in_default_app(&path) {
                error!("Failed to open {}: {e}", path.display());
            } else {
                info!("Opened {} in the default viewer", path.display());
            }
        }
    }
}

/// Hand `path` to the platform's default handler.
fn open_in_default_app(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
            .map(drop)
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn().map(drop)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map(drop)
    }

    #[cfg(not(any(target_os = "windows", unix)))]
    {
        let _ = path;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no default viewer on this platform",
        ))
    }
}
