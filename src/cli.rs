use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use html_grader::domain::constants::{CHECKSFILE_DEFAULT, DOWNLOAD_DEFAULT, HTMLFILE_DEFAULT};
use html_grader::services::validate::assert_file_exists;
use html_grader::{Config, GradeError, Mode};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML document for the presence of CSS selectors"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "check_file",
        env = "HTML_GRADER_CHECKS",
        default_value = CHECKSFILE_DEFAULT,
        help = "Path to checks.json"
    )]
    pub checks: PathBuf,
    #[arg(
        short,
        long,
        value_name = "html_file",
        env = "HTML_GRADER_FILE",
        default_value = HTMLFILE_DEFAULT,
        help = "Path to index.html"
    )]
    pub file: PathBuf,
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "HTML_GRADER_URL",
        help = "Fetch and grade this URL instead of --file"
    )]
    pub url: Option<String>,
    #[arg(
        long,
        value_name = "PATH",
        env = "HTML_GRADER_DOWNLOAD",
        default_value = DOWNLOAD_DEFAULT,
        help = "Where the fetched document is written"
    )]
    pub download: PathBuf,
    #[arg(
        long,
        value_name = "MS",
        env = "HTML_GRADER_TIMEOUT_MS",
        help = "Request timeout in milliseconds (default: none)"
    )]
    pub timeout_ms: Option<u64>,
    #[arg(short, long, action = ArgAction::Count, help = "Log more to stderr (-v, -vv, -vvv)")]
    pub verbose: u8,
    /// Set when `--file` came from the command line or the environment rather
    /// than the default.
    #[arg(skip)]
    pub file_explicit: bool,
}

impl Cli {
    /// Parses `std::env::args`, exiting with clap's usage status on error.
    pub fn parse_args() -> Self {
        Self::from_matches(&Self::command().get_matches()).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_matches(&Self::command().try_get_matches_from(args)?)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut cli = Self::from_arg_matches(matches)?;
        cli.file_explicit = matches!(
            matches.value_source("file"),
            Some(ValueSource::CommandLine | ValueSource::EnvVariable)
        );
        Ok(cli)
    }

    /// Checks input paths and settles the run mode. In remote mode `--file` is
    /// unused, so only a user-supplied value is required to exist.
    pub fn into_config(self) -> Result<Config, GradeError> {
        assert_file_exists(&self.checks)?;
        let mode = match self.url {
            Some(url) => {
                if self.file_explicit {
                    assert_file_exists(&self.file)?;
                }
                Mode::Remote {
                    url,
                    download: self.download,
                }
            }
            None => {
                assert_file_exists(&self.file)?;
                Mode::Local { html: self.file }
            }
        };
        Ok(Config {
            checks: self.checks,
            mode,
            timeout: self.timeout_ms.map(Duration::from_millis),
        })
    }
}
