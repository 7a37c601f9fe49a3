use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(
        short,
        long,
        help = "Format selector: \"HH:mm\", \"yyyy-MM-dd EEEE\", \"M月d日 EEEE\" or \"m月d日 EEEE\""
    )]
    pub format: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated timestamps (RFC 3339, 'YYYY-MM-DD HH:MM[:SS]', 'YYYY-MM-DD' or Unix milliseconds). Defaults to now"
    )]
    pub at: Vec<String>,

    #[arg(long, help = "Path to a settings.json file")]
    pub settings: Option<String>,

    #[arg(long, help = "Fail on an unknown format instead of printing an ISO timestamp")]
    pub strict: bool,

    #[arg(long = "list-formats", help = "Print the supported format selectors and exit")]
    pub list_formats: bool,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} timestamp(s) from --at", args.at.len());
        if let Some(format) = &args.format {
            info!("Using format from --format: '{}'", format);
        }

        args
    }
}
