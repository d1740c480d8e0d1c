use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use starmate_client::{ApiClient, ProfilePayload, RemoteProfile, Session};
use starmate_model::{InterestsInput, LoginInput, MonthDay, ProfileInput, RegisterInput};
use starmate_transform::{InterestTags, derive_zodiac_and_age};
use starmate_validate::fields::validate_birthday;
use starmate_validate::{
    ValidationOptions, validate_interests_form, validate_login, validate_profile,
    validate_register,
};

use starmate_cli::batch::validate_csv;
use starmate_cli::logging::redact_value;
use starmate_cli::settings::{Settings, clear_session, load_session, save_session};
use starmate_cli::summary::{
    apply_table_style, print_batch_summary, print_errors, print_record, print_remote_profile,
};

use crate::cli::{
    BatchArgs, InterestsArgs, LoginArgs, RegisterArgs, TodayArgs, UpdateArgs, ValidateArgs,
    ZodiacArgs,
};

/// Every command returns `Ok(false)` when the input was rejected.
pub type Outcome = Result<bool>;

pub fn run_zodiac(args: &ZodiacArgs) -> Outcome {
    let today = resolve_today(&args.today);
    let birthday = validate_birthday(&args.birthday, today).map_err(|message| anyhow!(message))?;
    let (sign, age) = derive_zodiac_and_age(birthday, today);
    let (start, end) = sign.date_range();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Zodiac"), Cell::new(sign)]);
    table.add_row(vec![
        Cell::new("Range"),
        Cell::new(format!("{} - {}", month_day_label(start), month_day_label(end))),
    ]);
    table.add_row(vec![Cell::new("Horoscope"), Cell::new(sign.horoscope())]);
    table.add_row(vec![Cell::new("Age"), Cell::new(age)]);
    println!("{table}");
    Ok(true)
}

pub fn run_validate(args: ValidateArgs, settings: &Settings) -> Outcome {
    let base = match &args.file {
        Some(path) => read_profile_file(path)?,
        None => ProfileInput::default(),
    };
    let input = args.fields.apply_to(base);
    let options = validation_options(settings, &args.today);
    match validate_profile(&input, &options) {
        Ok(record) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&record).context("serialize record")?
                );
            } else {
                print_record(&record);
            }
            Ok(true)
        }
        Err(errors) => {
            print_errors(&errors);
            Ok(false)
        }
    }
}

pub fn run_batch(args: &BatchArgs, settings: &Settings) -> Outcome {
    let options = validation_options(settings, &args.today);
    let report = validate_csv(&args.csv, &options)?;
    print_batch_summary(&report);
    Ok(!report.has_errors())
}

pub fn run_register(args: RegisterArgs, settings: &Settings) -> Outcome {
    let input = RegisterInput {
        email: args.email,
        username: args.username,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    let registration = match validate_register(&input, &settings.validation_options()) {
        Ok(registration) => registration,
        Err(errors) => {
            print_errors(&errors);
            return Ok(false);
        }
    };
    let span = info_span!("register", email = redact_value(&registration.email));
    let _guard = span.enter();
    let client = ApiClient::new(settings.client_config())?;
    let message = client.register(&registration)?;
    println!("{message}");
    Ok(true)
}

pub fn run_login(args: LoginArgs, settings: &Settings) -> Outcome {
    let input = LoginInput {
        email: args.email,
        password: args.password,
    };
    let credentials = match validate_login(&input, &settings.validation_options()) {
        Ok(credentials) => credentials,
        Err(errors) => {
            print_errors(&errors);
            return Ok(false);
        }
    };
    let span = info_span!("login", email = redact_value(&credentials.email));
    let _guard = span.enter();
    let session_path = settings.session_path()?;
    let mut session = load_session(&session_path)?;
    let client = ApiClient::new(settings.client_config())?;
    let outcome = client.login(&mut session, &credentials)?;
    save_session(&session_path, &session)?;
    println!("{}", outcome.message);
    if let Some(expires) = session.expires_at() {
        println!("Session valid until {}", expires.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(true)
}

pub fn run_logout(settings: &Settings) -> Outcome {
    let session_path = settings.session_path()?;
    clear_session(&session_path)?;
    info!(path = %session_path.display(), "session cleared");
    println!("Logged out.");
    Ok(true)
}

pub fn run_profile_show(args: &TodayArgs, settings: &Settings) -> Outcome {
    let (client, mut session, session_path) = open_session(settings)?;
    let profile = client.get_profile(&mut session)?;
    save_session(&session_path, &session)?;
    print_remote_profile(&profile, resolve_today(args));
    Ok(true)
}

pub fn run_profile_update(args: UpdateArgs, settings: &Settings) -> Outcome {
    let (client, mut session, session_path) = open_session(settings)?;
    let stored = client.get_profile(&mut session)?;
    let input = args.fields.apply_to(stored.to_input());
    let options = validation_options(settings, &args.today);
    let record = match validate_profile(&input, &options) {
        Ok(record) => record,
        Err(errors) => {
            print_errors(&errors);
            return Ok(false);
        }
    };
    let message = save_profile(&client, &session, &stored, &ProfilePayload::from(&record))?;
    let refreshed = client.get_profile(&mut session)?;
    save_session(&session_path, &session)?;
    println!("{message}");
    print_remote_profile(&refreshed, options.today());
    Ok(true)
}

pub fn run_profile_interests(args: InterestsArgs, settings: &Settings) -> Outcome {
    let (client, mut session, session_path) = open_session(settings)?;
    let stored = client.get_profile(&mut session)?;
    let mut tags = InterestTags::from_tags(&stored.interests);
    let mut changed = false;
    for tag in &args.remove {
        changed |= tags.remove(tag);
    }
    for tag in &args.add {
        changed |= tags.add(tag);
    }
    if !changed {
        println!("Interests unchanged: {}", tags.as_slice().join(", "));
        return Ok(true);
    }
    let interests = match validate_interests_form(&InterestsInput::from(tags)) {
        Ok(interests) => interests,
        Err(errors) => {
            print_errors(&errors);
            return Ok(false);
        }
    };
    let summary = interests.join(", ");
    let payload = ProfilePayload::interests_only(interests);
    let message = save_profile(&client, &session, &stored, &payload)?;
    client.get_profile(&mut session)?;
    save_session(&session_path, &session)?;
    println!("{message}");
    println!("Interests: {summary}");
    Ok(true)
}

/// Profiles that were never saved have no name; they are created instead of updated.
fn save_profile(
    client: &ApiClient,
    session: &Session,
    stored: &RemoteProfile,
    payload: &ProfilePayload,
) -> Result<String> {
    let exists = stored
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    let message = if exists {
        client.update_profile(session, payload)?
    } else {
        client.create_profile(session, payload)?
    };
    Ok(message)
}

fn open_session(settings: &Settings) -> Result<(ApiClient, Session, std::path::PathBuf)> {
    let session_path = settings.session_path()?;
    let session = load_session(&session_path)?;
    let client = ApiClient::new(settings.client_config())?;
    Ok((client, session, session_path))
}

fn read_profile_file(path: &Path) -> Result<ProfileInput> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

fn validation_options(settings: &Settings, today: &TodayArgs) -> ValidationOptions {
    let options = settings.validation_options();
    match today.today {
        Some(date) => options.with_today(date),
        None => options,
    }
}

fn resolve_today(args: &TodayArgs) -> NaiveDate {
    args.today.unwrap_or_else(|| Local::now().date_naive())
}

fn month_day_label((month, day): MonthDay) -> String {
    // 2000 is a leap year, so Feb 29 stays representable.
    NaiveDate::from_ymd_opt(2000, month, day)
        .map_or_else(|| format!("{month:02}/{day:02}"), |date| date.format("%b %-d").to_string())
}
