use chrono::{Local, NaiveDate};
use clap::Parser;
use momo::application::{backup, init, CaptionService, ConfigService, EditorService, EntryDraft};
use momo::cli::{output, Cli, Commands};
use momo::domain::{calendar, EntryFilter, Mood, MonthGrid};
use momo::error::MomoError;
use momo::infrastructure::{imaging, EntryRepository, GeminiClient};
use std::str::FromStr;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MomoError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Add {
            text,
            image,
            date,
            location,
            mood,
            tags,
            suggest,
        } => {
            let mut repository = EntryRepository::discover_and_open()?;

            let image = image
                .map(|path| imaging::encode_image_file(&path))
                .transpose()?;

            let mut draft = EntryDraft {
                date: date.map(|s| parse_date(&s)).transpose()?,
                text: text.unwrap_or_default(),
                image,
                location,
                mood: mood.map(|s| parse_mood(&s)).transpose()?,
                tags,
            };

            // The suggestion can never fail the save: it always resolves to
            // some string, degraded or not.
            if suggest {
                draft.text = suggest_caption(&repository, draft.image.as_deref());
                println!("{}", draft.text);
            }

            let mut editor = EditorService::new(&mut repository);
            let entry = editor.create(draft)?;
            println!("Saved entry {} ({})", entry.id, entry.date);
            Ok(())
        }

        Commands::Edit {
            id,
            text,
            image,
            remove_image,
            date,
            location,
            mood,
            tags,
        } => {
            let mut repository = EntryRepository::discover_and_open()?;
            let existing = repository
                .get(id)
                .cloned()
                .ok_or(MomoError::EntryNotFound(id))?;

            let image = if remove_image {
                None
            } else if let Some(path) = image {
                Some(imaging::encode_image_file(&path)?)
            } else {
                existing.image
            };

            let draft = EntryDraft {
                date: Some(match date {
                    Some(s) => parse_date(&s)?,
                    None => existing.date,
                }),
                text: text.unwrap_or(existing.text),
                image,
                location: Some(location.unwrap_or(existing.location)),
                mood: Some(match mood {
                    Some(s) => parse_mood(&s)?,
                    None => existing.mood,
                }),
                tags: if tags.is_empty() { existing.tags } else { tags },
            };

            let mut editor = EditorService::new(&mut repository);
            let entry = editor.update(id, draft)?;
            println!("Updated entry {} ({})", entry.id, entry.date);
            Ok(())
        }

        Commands::Delete { id } => {
            let mut repository = EntryRepository::discover_and_open()?;
            let existed = repository.get(id).is_some();
            repository.remove(id)?;
            if existed {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry {}; nothing to delete", id);
            }
            Ok(())
        }

        Commands::List { search, date } => {
            let repository = EntryRepository::discover_and_open()?;
            let filter = EntryFilter {
                date: date.map(|s| parse_date(&s)).transpose()?,
                search,
            };
            println!("{}", output::format_entry_list(&filter.apply(repository.entries())));
            Ok(())
        }

        Commands::Calendar { month, select } => {
            let repository = EntryRepository::discover_and_open()?;

            let selected = select.map(|s| parse_date(&s)).transpose()?;
            let month_start = match month {
                Some(s) => calendar::parse_month(&s).ok_or_else(|| {
                    MomoError::Config(format!("Invalid month: '{}'. Expected YYYY-MM", s))
                })?,
                None => calendar::month_start(Local::now().date_naive()),
            };

            let grid = MonthGrid::new(month_start, repository.entries());
            println!("{}", output::format_calendar(&grid, selected));

            match selected {
                Some(date) => {
                    let list = EntryFilter::for_date(date).apply(repository.entries());
                    println!("{}", output::format_day_entries(date, &list));
                }
                None => {
                    let list = EntryFilter::none().apply(repository.entries());
                    println!("{}", output::format_entry_list(&list));
                }
            }
            Ok(())
        }

        Commands::Gallery => {
            let repository = EntryRepository::discover_and_open()?;
            println!("{}", output::format_gallery(repository.entries()));
            Ok(())
        }

        Commands::Moods => {
            println!("{}", output::format_moods());
            Ok(())
        }

        Commands::Export { file } => {
            let repository = EntryRepository::discover_and_open()?;
            let document = backup::export_entries(&repository)?;
            match file {
                Some(path) => {
                    std::fs::write(&path, &document)?;
                    println!(
                        "Exported {} entries to {}",
                        repository.entries().len(),
                        path.display()
                    );
                }
                None => println!("{}", document),
            }
            Ok(())
        }

        Commands::Import { file, yes } => {
            let mut repository = EntryRepository::discover_and_open()?;
            let document = std::fs::read_to_string(&file)?;

            if !yes {
                println!("Importing replaces every entry in this journal.");
                println!("Refusing to run without --yes. Re-run with --yes to apply the import.");
                return Ok(());
            }

            let outcome = backup::import_entries(&mut repository, &document)?;
            if outcome.failed > 0 {
                println!(
                    "Imported {} entries ({} failed to write)",
                    outcome.written, outcome.failed
                );
            } else {
                println!("Imported {} entries", outcome.written);
            }
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let repository = EntryRepository::discover_and_open()?;
            let service = ConfigService::new(repository.store().clone());

            if list {
                let config = service.list()?;
                println!("model = {}", config.model);
                println!("endpoint = {}", config.endpoint);
                println!("created = {}", config.created.to_rfc3339());
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
                println!("Usage: momo config [--list | <key> [<value>]]");
                println!("Valid keys: model, endpoint, created");
                Ok(())
            }
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, MomoError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| MomoError::Config(format!("Invalid date: '{}'", s)))
}

fn parse_mood(s: &str) -> Result<Mood, MomoError> {
    Mood::from_str(s).map_err(MomoError::Config)
}

fn suggest_caption(repository: &EntryRepository, image: Option<&str>) -> String {
    let config = repository
        .store()
        .load_config()
        .unwrap_or_default();
    let api_key = config.api_key().unwrap_or_default();
    let client = GeminiClient::new(&config, api_key);
    CaptionService::new(client).suggest(image)
}
