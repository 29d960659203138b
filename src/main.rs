use std::fs::File;
use std::process;

use clap::{Arg, Command};
use hetero_collections::collections::hetero::{HeteroContainer, ReadError, Traversal};

fn main() {
    let matches = Command::new("hetero-dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Loads a heterogeneous container from its text form and prints it")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the container file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("traversal")
                .long("traversal")
                .short('t')
                .help("Print the elements in merged order or backend by backend, instead of the text form")
                .value_parser(["depth", "breadth", "sorted"]),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is a required argument");
    let mut container = match load(path) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("Error: failed to load {path}: {e}");
            process::exit(1);
        },
    };

    let elements: Vec<String> = match matches.get_one::<String>("traversal").map(String::as_str) {
        None => {
            println!("{container}");
            return;
        },
        Some("sorted") => {
            container.sort();
            container.iter().map(i64::to_string).collect()
        },
        Some("breadth") => container
            .specific_iter(Traversal::Breadth)
            .map(i64::to_string)
            .collect(),
        Some(_) => container
            .specific_iter(Traversal::Depth)
            .map(i64::to_string)
            .collect(),
    };

    println!("{}", elements.join(" "));
}

fn load(path: &str) -> Result<HeteroContainer<i64>, ReadError> {
    HeteroContainer::read_from(File::open(path)?)
}
