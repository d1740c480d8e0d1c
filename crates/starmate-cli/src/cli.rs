//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use starmate_model::{InterestsInput, ProfileInput};
use starmate_transform::parse_birthday;

#[derive(Parser)]
#[command(
    name = "starmate",
    version,
    about = "Profile validation with zodiac, horoscope and age derivation",
    long_about = "Validate profile forms, derive zodiac sign, horoscope and age from a \
                  birthday, and manage a profile on the remote profile API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names, emails, birthdays and tokens in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: starmate.toml in the platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print zodiac sign, horoscope and age for a birthday.
    Zodiac(ZodiacArgs),

    /// Validate one profile form.
    Validate(ValidateArgs),

    /// Validate every row of a CSV file.
    Batch(BatchArgs),

    /// Create an account.
    Register(RegisterArgs),

    /// Log in and store the session.
    Login(LoginArgs),

    /// Forget the stored session.
    Logout,

    /// Show or edit the stored profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Fetch and print the profile.
    Show(TodayArgs),

    /// Validate the about form and save it.
    ///
    /// Omitted fields keep the value currently stored.
    Update(UpdateArgs),

    /// Add or remove interest tags and save them.
    Interests(InterestsArgs),
}

#[derive(Args)]
pub struct ZodiacArgs {
    /// Birthday as "DD MM YYYY".
    #[arg(value_name = "BIRTHDAY")]
    pub birthday: String,

    #[command(flatten)]
    pub today: TodayArgs,
}

#[derive(Args)]
pub struct TodayArgs {
    /// Reference date for age calculation as "DD MM YYYY" (default: today).
    #[arg(long = "today", value_name = "DATE", value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: ProfileFields,

    /// Read the form from a JSON file; field flags override its values.
    #[arg(long = "file", value_name = "JSON")]
    pub file: Option<PathBuf>,

    /// Print the validated record as JSON.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub today: TodayArgs,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub today: TodayArgs,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub fields: ProfileFields,

    #[command(flatten)]
    pub today: TodayArgs,
}

/// Profile form fields as flags.
#[derive(Args, Default)]
pub struct ProfileFields {
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Birthday as "DD MM YYYY".
    #[arg(long = "birthday")]
    pub birthday: Option<String>,

    /// Height in centimeters.
    #[arg(long = "height")]
    pub height: Option<String>,

    /// Weight in kilograms.
    #[arg(long = "weight")]
    pub weight: Option<String>,

    /// Comma-separated interests.
    #[arg(long = "interests")]
    pub interests: Option<String>,

    /// male or female.
    #[arg(long = "gender")]
    pub gender: Option<String>,
}

impl ProfileFields {
    /// Overlay the given flags onto `base`.
    pub fn apply_to(self, base: ProfileInput) -> ProfileInput {
        ProfileInput {
            name: self.name.unwrap_or(base.name),
            birthday: self.birthday.unwrap_or(base.birthday),
            height: self.height.unwrap_or(base.height),
            weight: self.weight.unwrap_or(base.weight),
            interests: self.interests.map_or(base.interests, InterestsInput::Text),
            gender: self.gender.unwrap_or(base.gender),
        }
    }
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long = "email")]
    pub email: String,

    #[arg(long = "password")]
    pub password: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long = "email")]
    pub email: String,

    #[arg(long = "username")]
    pub username: String,

    #[arg(long = "password")]
    pub password: String,

    #[arg(long = "confirm-password")]
    pub confirm_password: String,
}

#[derive(Args)]
pub struct InterestsArgs {
    /// Tag to add (repeatable).
    #[arg(long = "add", value_name = "TAG")]
    pub add: Vec<String>,

    /// Tag to remove (repeatable).
    #[arg(long = "remove", value_name = "TAG")]
    pub remove: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_birthday(value)
        .date()
        .ok_or_else(|| format!("expected a date as \"DD MM YYYY\", got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fields_overlay() {
        let base = ProfileInput {
            name: "Jane".to_string(),
            height: "165".to_string(),
            ..ProfileInput::default()
        };
        let fields = ProfileFields {
            height: Some("170".to_string()),
            interests: Some("music".to_string()),
            ..ProfileFields::default()
        };
        let input = fields.apply_to(base);
        assert_eq!(input.name, "Jane");
        assert_eq!(input.height, "170");
        assert_eq!(input.interests, InterestsInput::Text("music".to_string()));
    }

    #[test]
    fn test_today_flag() {
        let cli = Cli::try_parse_from(["starmate", "zodiac", "15 08 2000", "--today", "15 06 2024"])
            .unwrap();
        let Command::Zodiac(args) = cli.command else {
            panic!("expected zodiac command");
        };
        assert_eq!(args.today.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(Cli::try_parse_from(["starmate", "zodiac", "x", "--today", "2024-06-15"]).is_err());
    }
}
