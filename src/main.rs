mod app;
mod cli;
mod completions;
mod domain;
mod listing;
mod logging;
mod store;
mod ui;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<(), app::AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn run() -> Result<(), app::AppError> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    let store = store::TodoStore::new(cli.file);
    tracing::debug!(file = %store.path().display(), command = ?cli.command, "dispatching");
    dispatch(cli.command, store, &ui::Palette::auto())
}

fn dispatch(
    command: cli::Commands,
    store: store::TodoStore,
    palette: &ui::Palette,
) -> Result<(), app::AppError> {
    use cli::Commands;

    let app = app::App::new(store);
    match command {
        Commands::Add(args) => {
            let added = app.add(&args.text)?;
            println!("{}", ui::added_line(&added, palette));
        }
        Commands::List(args) => {
            let listing = app.list(args.all)?;
            if args.json {
                print_json(&listing)?;
            } else {
                ui::print_lines(&ui::list_lines(&listing, palette));
            }
        }
        Commands::Done(args) => {
            let done = app.done(&args.rank)?;
            println!("{}", ui::completed_line(&done, palette));
        }
        Commands::Remove(args) => {
            let removed = app.remove(&args.rank)?;
            println!("{}", ui::removed_line(&removed, palette));
        }
        Commands::Clean(args) => match args.rank.as_deref() {
            Some(rank) => {
                let removed = app.clean_rank(rank)?;
                println!("{}", ui::removed_completed_line(&removed, palette));
            }
            None => {
                let outcome = app.clean()?;
                println!("{}", ui::clean_line(outcome, palette));
            }
        },
        Commands::Show => {
            if let Some(listing) = app.show() {
                ui::print_lines(&ui::show_lines(&listing, palette));
            }
        }
        Commands::Completions(args) => {
            completions::run_completions_command(args.shell, args.install)?;
        }
    }

    Ok(())
}
