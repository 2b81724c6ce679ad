use crate::cli::commands::calendar::print_view;
use crate::cli::commands::course::lookup_and_print;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::group;
use crate::core::session::{HELP, Interaction, apply};
use crate::errors::AppResult;
use crate::ingest::{WorkbookCache, load_file};
use crate::models::ViewState;
use crate::ui::messages::{info, warning};
use crate::utils::date::today;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Browse { file } = cmd {
        let stdin = io::stdin();
        run_session(Path::new(file), cfg, stdin.lock())?;
    }
    Ok(())
}

/// Interactive loop: each line is one interaction, each view change re-renders
/// from the cached tables.
pub fn run_session<R: BufRead>(path: &Path, cfg: &Config, input: R) -> AppResult<()> {
    let mut cache = WorkbookCache::new(cfg.cache_capacity, cfg.course_layout.clone());
    let mut loaded = load_file(path, &cfg.university, &mut cache)?;
    let mut grouped = group(&loaded.tables);
    let mut state = ViewState::at(today());

    print_view(&state, &grouped, cfg, &loaded.university)?;
    prompt();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt();
            continue;
        }

        let interaction = match Interaction::parse(&line) {
            Ok(i) => i,
            Err(e) => {
                warning(format!("{e} (type 'help')"));
                prompt();
                continue;
            }
        };

        match &interaction {
            Interaction::Quit => break,
            Interaction::Help => println!("{HELP}"),
            Interaction::Search(term) => {
                if let Err(e) = lookup_and_print(&loaded.tables.courses, &cfg.course_layout, term) {
                    warning(e);
                }
            }
            Interaction::Reload => match load_file(path, &cfg.university, &mut cache) {
                Ok(fresh) => {
                    loaded = fresh;
                    grouped = group(&loaded.tables);
                    info(format!(
                        "Workbook reloaded (cache: {} hit(s), {} miss(es))",
                        cache.hits(),
                        cache.misses()
                    ));
                }
                Err(e) => warning(format!("Reload failed, keeping the current data: {e}")),
            },
            _ => {}
        }

        if interaction.changes_view() {
            match apply(state, &interaction, today(), cfg) {
                Ok(next) => {
                    state = next;
                    print_view(&state, &grouped, cfg, &loaded.university)?;
                }
                Err(e) => warning(e),
            }
        }

        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
