use argot::{Command, CommandParser, Flag, Positional};

fn main() {
    let parser = CommandParser::new("remote")
        .about("Manages a list of remotes.")
        .add(
            "verbose",
            Flag::new()
                .short('v')
                .long("verbose")
                .description("Explain what is being done"),
        )
        .subcommand(
            Command::new("add")
                .about("Add a remote")
                .add("name", Positional::<String>::new("NAME"))
                .add("url", Positional::<String>::new("URL"))
                .action(|mut values| {
                    let verbose: bool = values.take("verbose").unwrap();
                    let name: String = values.take("name").unwrap();
                    let url: String = values.take("url").unwrap();

                    if verbose {
                        println!("Adding remote '{name}'.");
                    }

                    format!("{name}\t{url}")
                }),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename a remote")
                .add("old", Positional::<String>::new("OLD"))
                .add("new", Positional::<String>::new("NEW"))
                .action(|mut values| {
                    let old: String = values.take("old").unwrap();
                    let new: String = values.take("new").unwrap();
                    format!("{old} -> {new}")
                }),
        )
        .subcommand(
            Command::new("show").about("Show remotes").subcommand(
                Command::new("all")
                    .add("urls", Flag::new().short('u').description("Include the urls"))
                    .action(|mut values| {
                        let urls: bool = values.take("urls").unwrap();
                        if urls {
                            "origin\thttps://example.com/origin.git".to_string()
                        } else {
                            "origin".to_string()
                        }
                    }),
            ),
        )
        .build();

    println!("{}", parser.parse());
}
