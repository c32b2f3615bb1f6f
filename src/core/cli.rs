//! Command line arguments for the face generator binary

use clap::Parser;
use std::path::PathBuf;

/// command line arguments for seeding and output selection
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// seed for reproducible generation; fresh entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// output path for the rendered SVG (or JSON with --json)
    #[arg(long = "out", default_value = "face.svg")]
    pub out: PathBuf,

    /// how many faces to generate; extra faces get a numeric suffix
    #[arg(long, default_value_t = 1)]
    pub count: u32,

    /// dump the generated geometry as JSON instead of rendering SVG
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl CliArgs {
    /// Output path for face `index`, suffixing the stem when count > 1.
    pub fn output_path(&self, index: u32) -> PathBuf {
        if self.count <= 1 {
            return self.out.clone();
        }
        let stem = self
            .out
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("face");
        let ext = self
            .out
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or(if self.json { "json" } else { "svg" });
        self.out.with_file_name(format!("{stem}-{index}.{ext}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_output_keeps_the_given_path() {
        let args = CliArgs::parse_from(["scrawl", "--out", "mug.svg"]);
        assert_eq!(args.output_path(0), PathBuf::from("mug.svg"));
    }

    #[test]
    fn multiple_outputs_get_suffixes() {
        let args =
            CliArgs::parse_from(["scrawl", "--out", "mug.svg", "--count", "3"]);
        assert_eq!(args.output_path(2), PathBuf::from("mug-2.svg"));
    }
}
