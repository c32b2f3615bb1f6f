//! CLI entry point: generate one or more faces and write them out.

use anyhow::Result;
use clap::Parser;
use log::info;

use scrawl::core::cli::CliArgs;
use scrawl::core::errors::ScrawlContext;
use scrawl::utils::logger::init_custom_logger;
use scrawl::{generate_avatar, render_svg, EntropyRng};

fn main() -> Result<()> {
    init_custom_logger();
    let args = CliArgs::parse();

    let mut rng = match args.seed {
        Some(seed) => EntropyRng::seeded(seed),
        None => EntropyRng::from_entropy(),
    };

    for index in 0..args.count {
        let face = generate_avatar(&mut rng)?;
        let path = args.output_path(index);

        if args.json {
            let file = std::fs::File::create(&path)
                .with_file_context("create", &path)?;
            serde_json::to_writer_pretty(file, &face)
                .with_file_context("write", &path)?;
        } else {
            let document = render_svg(&face, &mut rng);
            svg::save(&path, &document)
                .with_file_context("write", &path)?;
        }

        info!(
            "generated face {} ({} hair strands, mouth {:?}) -> {}",
            index + 1,
            face.hair.len(),
            face.mouth_variant,
            path.display()
        );
    }

    Ok(())
}
