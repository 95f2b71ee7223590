use std::error;
use std::io::{self, Write};

use clap::{ArgAction, Parser};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use circular_list::{CircularList, GhostToken, ListCursor, SimpleList};

type Error = Box<dyn error::Error>;

/// Exercises a `CircularList` through its cursors and prints the list after
/// each step.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Expt {
    #[arg(
        value_parser = clap::value_parser!(u8).range(1..=4),
        help = "Experiments to run (default: all)"
    )]
    experiments: Vec<u8>,

    #[arg(long, default_value_t = 3, help = "Number of elements in experiment 4")]
    count: usize,

    #[arg(
        long,
        short = 'v',
        action = ArgAction::Count,
        help = "Make tracing output more verbose"
    )]
    verbose: u8,
    #[arg(long, action = ArgAction::Count, help = "Make tracing output less verbose")]
    silent: u8,
}

impl Expt {
    fn init_tracing(&self) {
        let layer = fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(io::stderr)
            .with_filter(
                EnvFilter::builder()
                    .with_default_directive(self.level_filter().into())
                    .from_env_lossy(),
            );
        tracing_subscriber::registry().with(layer).init();
    }

    fn level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.silent) {
            level if level <= -3 => LevelFilter::OFF,
            -2 => LevelFilter::ERROR,
            -1 => LevelFilter::WARN,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn run(&self, out: &mut impl Write) -> Result<(), Error> {
        let experiments = if self.experiments.is_empty() {
            vec![1, 2, 3, 4]
        } else {
            self.experiments.clone()
        };
        for experiment in experiments {
            writeln!(out, "experiment {experiment}")?;
            GhostToken::new(|mut token| {
                let list = CircularList::<String>::new();
                match experiment {
                    1 => append(&list, out, &mut token),
                    2 => prepend(&list, out, &mut token),
                    3 => rewrite(&list, out, &mut token),
                    _ => fail_fast(&list, self.count, out, &mut token),
                }
            })?;
        }
        Ok(())
    }
}

fn show<'brand, L>(
    list: &L,
    out: &mut impl Write,
    token: &GhostToken<'brand>,
) -> Result<(), Error>
where
    L: SimpleList<'brand, Item = String>,
{
    let mut cursor = list.list_cursor(token);
    let mut values = Vec::with_capacity(list.len(token));
    while cursor.has_next(token)? {
        values.push(cursor.next(token)?.as_str());
    }
    writeln!(out, "  [{}] (len {})", values.join(", "), list.len(token))?;
    Ok(())
}

/// Appends with a single cursor that stays at the back of the list.
fn append<'brand, L>(
    list: &L,
    out: &mut impl Write,
    token: &mut GhostToken<'brand>,
) -> Result<(), Error>
where
    L: SimpleList<'brand, Item = String>,
{
    let mut cursor = list.list_cursor(token);
    for word in ["alpha", "beta", "gamma"] {
        cursor.add(word.to_owned(), token)?;
        show(list, out, token)?;
    }
    Ok(())
}

/// Inserts at the front, with a fresh cursor for every insertion.
fn prepend<'brand, L>(
    list: &L,
    out: &mut impl Write,
    token: &mut GhostToken<'brand>,
) -> Result<(), Error>
where
    L: SimpleList<'brand, Item = String>,
{
    for word in ["alpha", "beta", "gamma"] {
        list.list_cursor(token).add(word.to_owned(), token)?;
        show(list, out, token)?;
    }
    Ok(())
}

/// Upper-cases every element, then walks back and removes every other one.
fn rewrite<'brand, L>(
    list: &L,
    out: &mut impl Write,
    token: &mut GhostToken<'brand>,
) -> Result<(), Error>
where
    L: SimpleList<'brand, Item = String>,
{
    let mut cursor = list.list_cursor(token);
    for word in ["one", "two", "three", "four", "five"] {
        cursor.add(word.to_owned(), token)?;
    }
    show(list, out, token)?;

    let mut cursor = list.list_cursor(token);
    while cursor.has_next(token)? {
        let upper = cursor.next(token)?.to_uppercase();
        cursor.set(upper, token)?;
    }
    show(list, out, token)?;

    let mut keep = true;
    while cursor.has_previous(token)? {
        cursor.previous(token)?;
        if !keep {
            let removed = cursor.remove(token)?;
            writeln!(out, "  removed {removed}")?;
        }
        keep = !keep;
    }
    show(list, out, token)
}

/// Shows that a second cursor fails once the first one changes the list.
fn fail_fast<'brand, L>(
    list: &L,
    count: usize,
    out: &mut impl Write,
    token: &mut GhostToken<'brand>,
) -> Result<(), Error>
where
    L: SimpleList<'brand, Item = String>,
{
    let mut cursor = list.list_cursor(token);
    for i in 0..count {
        cursor.add(i.to_string(), token)?;
    }
    show(list, out, token)?;

    let mut first = list.list_cursor(token);
    let mut second = list.list_cursor(token);
    if let Ok(value) = second.next(token) {
        writeln!(out, "  second cursor read {value}")?;
    }
    if first.has_next(token)? {
        first.next(token)?;
        let removed = first.remove(token)?;
        writeln!(out, "  first cursor removed {removed}")?;
    } else {
        first.add("x".to_owned(), token)?;
        writeln!(out, "  first cursor added x")?;
    }
    match second.next(token) {
        Ok(value) => writeln!(out, "  second cursor read {value}")?,
        Err(error) => writeln!(out, "  second cursor failed: {error}")?,
    }
    writeln!(out, "  first cursor has next: {}", first.has_next(token)?)?;
    show(list, out, token)
}

fn main() -> Result<(), Error> {
    let expt = Expt::parse();
    expt.init_tracing();
    expt.run(&mut io::stdout().lock())
}
