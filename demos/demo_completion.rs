use argot::{Command, CommandParser, Flag, Opt};
use std::env;

const BRANCHES: [&str; 3] = ["main", "maintenance", "feature"];

fn branches(partial: &str) -> Vec<String> {
    BRANCHES
        .iter()
        .filter(|branch| branch.starts_with(partial))
        .map(|branch| branch.to_string())
        .collect()
}

fn main() {
    let parser = CommandParser::new("vcs")
        .add("quiet", Flag::new().short('q').long("quiet"))
        .subcommand(
            Command::new("checkout")
                .about("Switch branches")
                .add(
                    "branch",
                    Opt::<String>::new("BRANCH")
                        .short('b')
                        .long("branch")
                        .suggest_with(branches),
                )
                .action(|_| ()),
        )
        .subcommand(Command::new("commit").about("Record changes").action(|_| ()))
        .build();

    // The final argument is the word being completed.
    let mut args: Vec<String> = env::args().skip(1).collect();
    let partial = args.pop().unwrap_or_default();

    for suggestion in parser.suggest(&args, &partial) {
        println!("{suggestion}");
    }
}
