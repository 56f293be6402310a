use argot::{CommandParser, CountFlag, Flag, Opt, Optional, Positional};

fn main() {
    let parser = CommandParser::new("demo_flags")
        .about("Repeats a word.")
        .add(
            "verbose",
            CountFlag::new()
                .short('v')
                .long("verbose")
                .description("Increase the logging level"),
        )
        .add(
            "times",
            Opt::<u32>::new("TIMES")
                .short('t')
                .long("times")
                .default(1)
                .description("How many times to repeat"),
        )
        .add(
            "separator",
            Optional::<String>::new("SEP")
                .short('s')
                .description("The separator between repetitions"),
        )
        .add(
            "dry_run",
            Flag::new().long("dry-run").description("Print nothing"),
        )
        .add(
            "word",
            Positional::<String>::new("WORD").description("The word to repeat"),
        )
        .action(|mut values| {
            let verbose: usize = values.take("verbose").unwrap();
            let times: u32 = values.take("times").unwrap();
            let separator: Option<String> = values.take("separator").unwrap();
            let dry_run: bool = values.take("dry_run").unwrap();
            let word: String = values.take("word").unwrap();

            if verbose > 0 {
                println!("Repeating '{word}' {times} time(s).");
            }

            if !dry_run {
                let words = vec![word; times as usize];
                println!("{}", words.join(separator.as_deref().unwrap_or(" ")));
            }
        })
        .build();

    parser.parse();
}
