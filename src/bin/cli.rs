use std::path::PathBuf;

use clap::Parser;
use struct_decoders_codegen::generate;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "Struct Decoders Code Generator")]
#[clap(
    about = "CLI to generate decoded struct wrapper declarations from an API metadata snapshot.",
    version,
    author
)]
#[clap(arg_required_else_help(true))]
struct Args {
    #[clap(name = "debug", short, long, help = "Enable debug logging")]
    debug: bool,

    #[clap(
        name = "metadata-file",
        long,
        help = "The API metadata snapshot to use."
    )]
    metadata_file: PathBuf,
    #[clap(
        name = "output-file",
        long,
        help = "The file to write generated declarations to."
    )]
    output_file: PathBuf,
    #[clap(
        name = "prefix-file",
        long,
        help = "Optional file scaffolding to insert before the declarations."
    )]
    prefix_file: Option<PathBuf>,
    #[clap(
        name = "suffix-file",
        long,
        help = "Optional file scaffolding to insert after the declarations."
    )]
    suffix_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    let default_level = if args.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let prefix = args
        .prefix_file
        .as_ref()
        .map(std::fs::read_to_string)
        .transpose()?;
    let suffix = args
        .suffix_file
        .as_ref()
        .map(std::fs::read_to_string)
        .transpose()?;

    generate(
        &args.metadata_file,
        &args.output_file,
        prefix.as_deref(),
        suffix.as_deref(),
    )?;

    Ok(())
}
