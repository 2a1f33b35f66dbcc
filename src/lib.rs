#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use thiserror::Error;

use std::fs::File;
use std::io;

use searcher::SearchOptions;

pub mod table;

use table::{Algorithm, GraphTable};

type Error = anyhow::Error;

pub fn solver() -> Result<(), Error> {
    let matches = App::new("Best-first search")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find the cheapest path through a weighted graph table")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .possible_values(&["ucs", "astar", "both"])
                .default_value("both")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after this many frontier pops")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Graph table to search, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .get_matches();

    let algorithms = match matches.value_of("algorithm") {
        Some("both") | None => vec![Algorithm::UniformCost, Algorithm::AStar],
        Some(name) => vec![name.parse()?],
    };

    let options = SearchOptions {
        limit: if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        },
    };

    let reader = get_input_reader(matches.value_of("input"))?;
    let table = GraphTable::read(reader)?;

    for algorithm in algorithms {
        let (found, stats) = table.solve(algorithm, options)?;
        tracing::info!(%algorithm, ?stats, "search finished");
        match found {
            Some((cost, goal)) => println!("{} Result: ({}, {})", algorithm, cost, goal),
            None => println!("{} Result: None", algorithm),
        }
    }

    Ok(())
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f = File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
        None => get_default_input()?,
    };
    Ok(reader)
}

pub fn get_default_input() -> Result<BoxedRead, CliError> {
    let mut p = ::std::path::PathBuf::from("graphs");
    p.push("sample.txt");

    let f = File::open(&p).map_err(CliError::DefaultInputNotFound)?;

    Ok(Box::new(f))
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input not found: graphs/sample.txt")]
    DefaultInputNotFound(#[source] io::Error),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_input() {
        match get_input_reader(Some("no/such/graph.txt")) {
            Ok(_) => panic!("Opened a file which does not exist"),
            Err(e) => assert_eq!(e.to_string(), "Input not found: no/such/graph.txt"),
        }
    }

    #[test]
    fn sample_input() {
        let reader = match get_default_input() {
            Ok(reader) => reader,
            Err(e) => panic!("{}", e),
        };
        let table = GraphTable::read(reader).unwrap();
        assert_eq!(table.start(), "S");

        for algorithm in [Algorithm::UniformCost, Algorithm::AStar].iter() {
            let (found, _) = table.solve(*algorithm, SearchOptions::default()).unwrap();
            assert_eq!(found, Some((6.0, "Z".to_string())));
        }
    }
}
