use std::ffi::OsString;

pub use clap::Parser;
use clap::ValueEnum;

use crate::config::Profile;
use crate::repl::events::Action;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name to read from the profile file. Default is 'default'.
    /// A profile that is not configured falls back to the built-in defaults.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(short = 'v', long, help = "enable debug logging")]
    verbose: bool,

    #[clap(long, help = "backend base URL, overrides the profile")]
    base_url: Option<String>,

    #[clap(long, help = "initial product category")]
    category: Option<String>,

    #[clap(long, help = "initial target platform")]
    platform: Option<String>,

    /// Run a single request and print the result instead of starting the REPL
    #[clap(long, value_enum, help = "run once and exit")]
    action: Option<ActionArg>,

    #[clap(long, help = "write the results page as HTML after a one-shot run")]
    export: Option<String>,

    #[clap(long, help = "disable ANSI colours")]
    no_color: bool,

    #[clap(long, help = "language of generated keywords")]
    language: Option<String>,

    #[clap(long, help = "maximum number of keywords per group")]
    max_keywords: Option<u32>,

    #[clap(long = "difficulty", help = "keyword difficulty level")]
    difficulty_level: Option<String>,

    #[clap(long, help = "target report length in words")]
    report_length: Option<u32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ActionArg {
    Keywords,
    Report,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Keywords => Action::GenerateKeywords,
            ActionArg::Report => Action::GenerateReport,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    base_url: Option<String>,
    category: Option<String>,
    platform: Option<String>,
    action: Option<Action>,
    export: Option<String>,
    no_color: bool,
    language: Option<String>,
    max_keywords: Option<u32>,
    difficulty_level: Option<String>,
    report_length: Option<u32>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            base_url: args.base_url,
            category: args.category,
            platform: args.platform,
            action: args.action.map(Action::from),
            export: args.export,
            no_color: args.no_color,
            language: args.language,
            max_keywords: args.max_keywords,
            difficulty_level: args.difficulty_level,
            report_length: args.report_length,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Requested one-shot action, if any
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn export(&self) -> Option<&str> {
        self.export.as_deref()
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    /// Overlay command line values onto a loaded profile
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(base_url) = &self.base_url {
            profile.base_url = base_url.clone();
        }
        if let Some(language) = &self.language {
            profile.options.language = Some(language.clone());
        }
        if let Some(max_keywords) = self.max_keywords {
            profile.options.max_keywords = Some(max_keywords);
        }
        if let Some(difficulty_level) = &self.difficulty_level {
            profile.options.difficulty_level = Some(difficulty_level.clone());
        }
        if let Some(report_length) = self.report_length {
            profile.options.report_length = Some(report_length);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_profile_only() {
        let args = CommandLineArgs::parse_from(["program", "--profile", "test"]);
        assert_eq!(args.profile(), "test");
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-p", "dev", "-v"]);
        assert_eq!(args.profile(), "dev");
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert!(!args.verbose());
        assert!(!args.no_color());
        assert_eq!(args.action(), None);
        assert_eq!(args.category(), None);
    }

    #[test]
    fn test_parse_one_shot_action() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--action",
            "report",
            "--category",
            "yoga mats",
            "--platform",
            "etsy",
            "--export",
            "out.html",
        ]);
        assert_eq!(args.action(), Some(Action::GenerateReport));
        assert_eq!(args.category(), Some("yoga mats"));
        assert_eq!(args.platform(), Some("etsy"));
        assert_eq!(args.export(), Some("out.html"));
    }

    #[test]
    fn test_apply_to_overrides_profile() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--base-url",
            "http://api.test",
            "--language",
            "German",
            "--max-keywords",
            "12",
            "--difficulty",
            "easy",
        ]);
        let mut profile = Profile::blank("default");
        profile.options.report_length = Some(500);

        args.apply_to(&mut profile);

        assert_eq!(profile.base_url, "http://api.test");
        assert_eq!(profile.options.language.as_deref(), Some("German"));
        assert_eq!(profile.options.max_keywords, Some(12));
        assert_eq!(profile.options.difficulty_level.as_deref(), Some("easy"));
        assert_eq!(profile.options.report_length, Some(500));
    }
}
