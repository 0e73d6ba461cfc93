use clap::Parser;
use moodlog::application::{
    edit_entry, init::init, month_view, mood_stats, show_day, summary, write_entry,
    ConfigService, FileDiaryStore, SaveOutcome,
};
use moodlog::cli::{
    format_entries_json, format_entry, format_month_calendar, format_month_list, format_streak,
    format_summary, Cli, Commands,
};
use moodlog::domain::WeekStart;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

/// Tell the user when a change only lives in memory
fn report_unsaved(outcome: &SaveOutcome) {
    if let Some(err) = outcome.warning() {
        eprintln!("Warning: change could not be saved: {}", err);
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    let Some(command) = cli.command else {
        println!("moodlog - Terminal mood journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, week_start } => {
            let week_start = WeekStart::from_str(&week_start).map_err(MoodlogError::Config)?;
            init(&path, week_start)
        }
        Commands::Write {
            content,
            mood,
            date,
        } => {
            let repo = FileSystemRepository::discover()?;
            let (mut store, _) = FileDiaryStore::open(&repo)?;

            let report = write_entry(&mut store, &content, mood, date.as_deref())?;
            let verb = if report.created { "Recorded" } else { "Updated" };
            println!("{} entry for {}", verb, report.date.format("%Y-%m-%d"));
            if let Some(entry) = store.get_entry_by_date(report.date) {
                print!("{}", format_entry(entry));
            }
            report_unsaved(&report.outcome);
            Ok(())
        }
        Commands::Edit {
            date,
            content,
            mood,
        } => {
            let repo = FileSystemRepository::discover()?;
            let (mut store, _) = FileDiaryStore::open(&repo)?;

            let (date, outcome) = edit_entry(&mut store, &date, &content, mood)?;
            println!("Updated entry for {}", date.format("%Y-%m-%d"));
            report_unsaved(&outcome);
            Ok(())
        }
        Commands::Show { date } => {
            let repo = FileSystemRepository::discover()?;
            let (store, _) = FileDiaryStore::open(&repo)?;

            match show_day(&store, date.as_deref())? {
                (_, Some(entry)) => print!("{}", format_entry(entry)),
                (date, None) => println!("No entry for {}", date.format("%Y-%m-%d")),
            }
            Ok(())
        }
        Commands::Month {
            month,
            calendar,
            json,
        } => {
            let repo = FileSystemRepository::discover()?;
            let (store, config) = FileDiaryStore::open(&repo)?;

            let view = month_view(&store, month.as_deref())?;
            if json {
                println!("{}", format_entries_json(&view.entries)?);
            } else if calendar {
                print!(
                    "{}",
                    format_month_calendar(
                        view.year,
                        view.month0,
                        &view.entries,
                        config.get_week_start()
                    )
                );
            } else {
                println!("{}", format_month_list(&view.entries).trim_end());
            }
            Ok(())
        }
        Commands::Streak => {
            let repo = FileSystemRepository::discover()?;
            let (store, _) = FileDiaryStore::open(&repo)?;

            println!("{}", format_streak(store.get_streak()));
            Ok(())
        }
        Commands::Stats { json } => {
            let repo = FileSystemRepository::discover()?;
            let (store, config) = FileDiaryStore::open(&repo)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&mood_stats(&store))?);
            } else {
                print!("{}", format_summary(&summary(&store, config.get_week_start())));
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("week_start = {}", config.week_start);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, week_start");
                Ok(())
            }
        }
    }
}
