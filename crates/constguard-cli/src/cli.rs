use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use constguard_core::config::{CliOverrides, ReportFormat};

#[derive(Parser, Debug)]
#[command(
    name = "constguard",
    version,
    about = "Check that compiled constants match their Enforce*Value annotations for a build variant"
)]
pub struct Cli {
    /// Class-model dumps to check (JSON).
    #[arg(required = true, value_name = "ARTIFACT")]
    pub artifacts: Vec<PathBuf>,

    #[arg(long, help = "Product flavor to check")]
    pub flavor: Option<String>,

    #[arg(long, alias = "buildType", help = "Build type to check")]
    pub build_type: Option<String>,

    #[arg(long, help = "Package holding the Enforce*Value annotations")]
    pub annotation_package: Option<String>,

    #[arg(long, help = "Config file to use instead of ./constguard.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Report format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Shorthand for --format json")]
    pub json: bool,

    #[arg(long, short, help = "Do not list passing fields or progress")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let report_format = if self.json {
            Some(ReportFormat::Json)
        } else {
            self.format.map(|f| match f {
                OutputFormat::Text => ReportFormat::Text,
                OutputFormat::Json => ReportFormat::Json,
            })
        };
        CliOverrides {
            flavor: self.flavor.clone(),
            build_type: self.build_type.clone(),
            annotation_package: self.annotation_package.clone(),
            report_format,
            show_passes: self.quiet.then_some(false),
        }
    }
}
