//! Prints the SVG avatar for a name and writes a PNG next to it.
//!
//! Run with:
//! ```
//! cargo run -p usericon --example avatar -- jane-doe avatar.png
//! ```
//!
//! Set `RUST_LOG=usericon=debug` to see the generator's log output.

use usericon::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "jane-doe".to_string());
    let png_path = args.next().unwrap_or_else(|| "avatar.png".to_string());

    let icon = IconGenerator::new().generate(&name)?;
    println!("{}", icon.to_svg_string_pretty()?);

    icon.save_png(&png_path, 96, 96)?;
    eprintln!(
        "initials '{}', color {}, wrote {}",
        icon.initials(),
        icon.color().map(|c| c.to_hex()).unwrap_or_else(|| "none".into()),
        png_path
    );

    Ok(())
}
