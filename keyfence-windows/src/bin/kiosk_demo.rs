//! Kiosk-mode demo: suppresses the configured key combinations
//! system-wide until Escape is pressed.
//!
//! Run with `--block LWIN --block RWIN` (the default) to disable the OS
//! meta keys while the process is alive. Normal behavior returns on exit.

#[cfg(windows)]
use clap::Parser;

#[cfg(windows)]
#[derive(Parser, Debug)]
#[command(author, version, about = "System-wide key suppression demo", long_about = None)]
struct Args {
    /// Key combinations to block (e.g. "LWIN", "CTRL+ESC"); may repeat
    #[arg(short, long, default_values_t = [String::from("LWIN"), String::from("RWIN")])]
    block: Vec<String>,

    /// Leave the accessibility shortcuts (sticky/toggle/filter keys) alone
    #[arg(long)]
    keep_accessibility_shortcuts: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use keyfence_core::{KeyCombo, KeyEvent, KeyEventKind, KeyStateTable, VirtualKey};
    use keyfence_windows::{AccessibilityFeatures, AccessibilityGuard};
    use log::info;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, GetMessageW, PostQuitMessage, TranslateMessage, MSG,
    };

    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let engine = keyfence_windows::new_engine();
    for combo_str in &args.block {
        let combo = KeyCombo::parse(combo_str)?;
        engine.add_interceptor(combo.codes())?;
        info!("blocking {combo_str}");
    }

    // Escape ends the session; the keystroke itself passes through.
    engine.add_custom_interceptor(|event: &KeyEvent, _keys: &KeyStateTable| {
        if event.kind == KeyEventKind::KeyDown && event.vk_code == VirtualKey::Escape.code() {
            unsafe { PostQuitMessage(0) };
        }
        false
    });

    let mut guard = AccessibilityGuard::new();
    if !args.keep_accessibility_shortcuts {
        guard.disable(AccessibilityFeatures::ALL)?;
    }

    engine.hook()?;
    engine.start();
    info!("hook installed; press Esc to exit");

    // The low-level hook is serviced by this thread's message queue.
    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    engine.unhook()?;
    if !args.keep_accessibility_shortcuts {
        guard.restore(AccessibilityFeatures::ALL)?;
    }
    info!("hook removed, exiting");
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("kiosk_demo only runs on Windows");
    std::process::exit(1);
}
