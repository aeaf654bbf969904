use clap::Parser;
use eframe::egui;

use pixelpad::app::PixelPadApp;
use pixelpad::canvas::BACKGROUND;
use pixelpad::cli::CliArgs;
use pixelpad::config::AppSettings;
use pixelpad::session::PaintSession;
use pixelpad::{log_err, log_info, logger};

fn main() -> Result<(), eframe::Error> {
    let args = CliArgs::parse();
    if let Err(msg) = args.validate() {
        eprintln!("pixelpad: {}", msg);
        std::process::exit(2);
    }

    // Initialize session log (overwrites the previous session's log)
    logger::init();
    log_info!(
        "starting: {}×{} canvas, {} history snapshots, exports to {}",
        args.width,
        args.height,
        args.history,
        args.export_dir.display()
    );

    let settings = AppSettings::load();

    // The canvas allocation is the one failure that aborts startup; every
    // later allocation failure (history snapshots) only skips an entry.
    let session = match PaintSession::new(args.width, args.height, args.history, BACKGROUND) {
        Ok(session) => session,
        Err(e) => {
            log_err!("canvas allocation failed: {}", e);
            eprintln!("pixelpad: canvas allocation failed: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.width as f32, args.height as f32 + 72.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PixelPad",
        options,
        Box::new(move |_cc| Box::new(PixelPadApp::new(session, &args, settings))),
    )
}
