use favicon_builder::{IconBuilder, IconSizes};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args_os().skip(1);
    let source = args
        .next()
        .ok_or("usage: cargo run --example favicon <image> [output]")?;
    let output = args.next().unwrap_or_else(|| "app-icon.ico".into());

    IconBuilder::default()
        .sizes(IconSizes::MINIMAL)
        .source_file(source)
        .build_file(&output)?;
    Ok(())
}
