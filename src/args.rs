use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "figma-tree",
    setting = AppSettings::UnifiedHelpMessage,
    setting = AppSettings::DeriveDisplayOrder,
    setting = AppSettings::DontCollapseArgsInUsage
)]
/// Display the canvas, frame and component hierarchy of a Figma file
pub struct Args {
    #[structopt(long = "file-key", value_name = "KEY")]
    /// Key of the Figma file to fetch
    pub file_key: String,
    #[structopt(long = "deep")]
    /// List nested frames and components at every depth
    pub deep: bool,
    #[structopt(long = "write-json", value_name = "PATH", parse(from_os_str))]
    /// Write the raw file JSON to this path
    pub write_json: Option<PathBuf>,
    #[structopt(
        long = "api-base",
        value_name = "URL",
        env = "FIGMA_API_BASE",
        default_value = "https://api.figma.com"
    )]
    /// Base URL of the Figma REST API
    pub api_base: String,
}
