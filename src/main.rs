use clap::Parser;
use std::process::ExitCode;
use uvtt_fgu::raster::ImageCodec;
use uvtt_fgu::{Cli, ConvertConfig, convert_batch, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.files.is_empty() {
        eprintln!("No input files given; see --help");
        return ExitCode::from(1);
    }

    let config = ConvertConfig::from(&cli);
    let report = match convert_batch(&cli.files, cli.output.as_deref(), &config, &ImageCodec) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    for file in &report.files {
        match &file.result {
            Ok(written) => println!(
                "Converted '{}' ({} files written)",
                file.input.display(),
                written.len()
            ),
            Err(e) => eprintln!("Failed '{}': {}", file.input.display(), e),
        }
    }

    if report.failed() > 0 {
        ExitCode::from(3)
    } else {
        ExitCode::SUCCESS
    }
}
