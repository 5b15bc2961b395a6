use anyhow::{Context, Result, bail};
use markweave_config::{Config, IdMode};
use markweave_engine::{
    ast::format_outline,
    editing::{ListCommand, apply_list_command},
    parsing::parse_document,
};
use std::{env, path::PathBuf, process};
use xi_rope::Rope;

const USAGE: &str = "[--command tab|stab|enter] [--fixed-ids] [--show-ids] <file>";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    file: PathBuf,
    command: Option<ListCommand>,
    fixed_ids: bool,
    show_ids: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut file = None;
    let mut command = None;
    let mut fixed_ids = false;
    let mut show_ids = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--command" | "-c" => {
                let name = iter.next().context("--command needs a value")?;
                command = Some(name.parse::<ListCommand>()?);
            }
            "--fixed-ids" => fixed_ids = true,
            "--show-ids" => show_ids = true,
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            path => {
                if file.replace(PathBuf::from(path)).is_some() {
                    bail!("only one input file is supported");
                }
            }
        }
    }

    Ok(Args {
        file: file.context("no input file given")?,
        command,
        fixed_ids,
        show_ids,
    })
}

fn run(args: Args) -> Result<()> {
    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("loading {}", config_path.display()))?
        .unwrap_or_default();
    log::debug!("Config: {config:?}");

    let mode = if args.fixed_ids {
        IdMode::Fixed
    } else {
        config.ids.mode
    };
    let mut ids = mode.generator();

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let mut tree = parse_document(&Rope::from(text.as_str()), &config.parse.options(), ids.as_mut());

    if let Some(command) = args.command {
        let patch = apply_list_command(&mut tree, command, ids.as_mut())
            .with_context(|| format!("applying {command} to {}", args.file.display()))?;
        log::info!(
            "{command}: {:?}, changed lists {:?}",
            patch.status,
            patch
                .changed_lists
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
        );
        tree.compact();
    }

    print!("{}", format_outline(&tree, args.show_ids));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("markweave-cli");
    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    run(args)
}
