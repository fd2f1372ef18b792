use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::{operations::Modification, plan::WatermarkKind, settings::Settings};

/// The tool is purely interactive, so the only arguments it understands are requests for help.
/// Anything else prints the usage and exits with an error.
pub fn maybe_print_help_and_exit(bin_name: &str) {
    if let Some(arg) = std::env::args_os().nth(1) {
        let arg = arg.as_os_str();
        if arg == OsStr::new("--help") || arg == OsStr::new("-h") {
            print_help(bin_name);
            std::process::exit(0);
        } else if arg == OsStr::new("--version") || arg == OsStr::new("-V") {
            println!("{}", version_string());
            std::process::exit(0);
        } else {
            eprintln!("unrecognized argument `{}'", arg.to_string_lossy());
            print_help(bin_name);
            std::process::exit(1);
        }
    }
}

fn print_help(bin_name: &str) {
    let settings = Settings::default();
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name}");
    println!();
    println!(
        "Put your pictures and watermark images into `{}`, run {bin_name} and answer the questions.",
        settings.input_dir.display()
    );
    println!(
        "Watermarked pictures are written to `{}`.",
        settings.output_dir.display()
    );
    println!();
    println!("Watermarks:");
    for kind in WatermarkKind::VARIANTS {
        println!("  {}", kind.label());
    }
    println!();
    println!("Modifications:");
    for modification in Modification::VARIANTS {
        println!("  {}", modification.label());
    }
    println!();
    println!("Set RUST_LOG=debug to see what went wrong when a pass fails.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    format!(
        "{} {} {cpu}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
