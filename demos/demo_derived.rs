use argot::derive::FromValues;
use argot::{CommandParser, Flag, MultiPositional, Opt, ValueError};

#[derive(Debug, FromValues)]
struct Summer {
    #[argot(field = "item")]
    items: Vec<u32>,
    scale: u32,
    verbose: bool,
    #[argot(default)]
    offset: u32,
}

fn main() {
    let parser = CommandParser::new("summer")
        .about("Sums some numbers.")
        .add("verbose", Flag::new().short('v').description("Show the items"))
        .add(
            "scale",
            Opt::<u32>::new("SCALE")
                .short('s')
                .long("scale")
                .default(1)
                .description("Multiply the sum"),
        )
        .add(
            "item",
            MultiPositional::<u32>::new("ITEM").description("The items to sum"),
        )
        .action(Summer::from_values)
        .build();

    let summer: Result<Summer, ValueError> = parser.parse();

    match summer {
        Ok(summer) => {
            if summer.verbose {
                println!("Items: {:?}", summer.items);
            }

            let sum: u32 = summer.items.iter().sum();
            println!("Sum: {}", sum * summer.scale + summer.offset);
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
