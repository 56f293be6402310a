use argot::derive::FromValues;
use argot::{
    CliError, Command, CommandParser, CountFlag, Dispatch, Failure, Flag, MultiOpt, Opt, Optional,
    Positional, ValueError, Values,
};

#[test]
fn builder_compiles() {
    CommandParser::<()>::new("organization");
}

#[derive(Debug, PartialEq, FromValues)]
struct Remote {
    verbose: usize,
    #[argot(field = "remote-name")]
    name: String,
    url: Option<String>,
    tags: Vec<String>,
    #[argot(default)]
    force: bool,
}

fn remote_parser() -> argot::GeneralParser<'static, Result<Remote, ValueError>> {
    CommandParser::new("remote")
        .add("verbose", CountFlag::new().short('v'))
        .subcommand(
            Command::new("add")
                .add("remote-name", Positional::<String>::new("NAME"))
                .add("url", Optional::<String>::new("URL").short('u').long("url"))
                .add("tags", MultiOpt::<String>::new("TAG").short('t'))
                .add("force", Flag::new().short('f'))
                .action(Remote::from_values),
        )
        .subcommand(
            Command::new("show")
                .add("remote-name", Positional::<String>::new("NAME"))
                .add("url", Optional::<String>::new("URL").short('u'))
                .add("tags", MultiOpt::<String>::new("TAG").short('t'))
                .action(Remote::from_values),
        )
        .build_parser()
        .unwrap()
}

#[test]
fn derive_from_values() {
    // Setup
    let parser = remote_parser();

    // Execute
    let remote = parser
        .parse_tokens(&["-vv", "add", "origin", "--url=https://example.com", "-t", "a", "-t", "b"])
        .unwrap()
        .unwrap();

    // Verify
    assert_eq!(
        remote,
        Remote {
            verbose: 2,
            name: "origin".to_string(),
            url: Some("https://example.com".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
            force: false,
        }
    );
}

#[test]
fn derive_from_values_default() {
    // Setup
    let parser = remote_parser();

    // Execute
    let remote = parser.parse_tokens(&["show", "origin"]).unwrap().unwrap();

    // Verify
    assert_eq!(
        remote,
        Remote {
            verbose: 0,
            name: "origin".to_string(),
            url: None,
            tags: Vec::default(),
            force: false,
        }
    );
}

#[derive(Debug, FromValues)]
struct Mismatched {
    #[allow(dead_code)]
    count: String,
}

#[test]
fn derive_from_values_wrong_type() {
    // Setup
    let parser = CommandParser::new("program")
        .add("count", Opt::<u32>::new("COUNT").short('c').default(0))
        .action(Mismatched::from_values)
        .build_parser()
        .unwrap();

    // Execute
    let result = parser.parse_tokens(&["-c", "1"]).unwrap();

    // Verify
    assert_eq!(
        result.unwrap_err(),
        ValueError::WrongType {
            name: "count".to_string(),
            type_name: std::any::type_name::<String>(),
        }
    );
}

#[test]
fn execute_help() {
    // Setup
    let parser = remote_parser();

    // Execute
    let dispatch = parser.execute(&["-v", "add", "origin", "--help"]).unwrap();

    // Verify
    match dispatch {
        Dispatch::Help(context) => {
            assert_eq!(context.program(), "remote add");
            assert!(context
                .render()
                .starts_with("usage: remote add [-h] NAME [-u URL] [-t TAG]* [-f]"));
        }
        Dispatch::Action(_) => panic!("the action must not run"),
    }
}

#[test]
fn execute_failure() {
    // Setup
    let parser = remote_parser();

    // Execute
    let failure = parser.execute(&["-v", "remove", "origin"]).unwrap_err();

    // Verify
    let Failure { error, context } = failure;
    assert_eq!(error, CliError::UnknownSubcommand("remove".to_string()));
    assert_eq!(context.program(), "remote");
}

#[test]
fn suggest() {
    // Setup
    let parser = remote_parser();

    // Execute & verify
    assert_eq!(parser.suggest(&["add"], "--"), vec!["--url", "--help"]);
    assert_eq!(parser.suggest(&[] as &[&str], "s"), vec!["show"]);
    assert_eq!(parser.suggest(&["remove"], ""), Vec::<String>::default());
}

#[test]
fn values_action() {
    // Setup
    let parser = CommandParser::new("program")
        .add("name", Positional::<String>::new("NAME"))
        .action(|values: Values| values.names().map(str::to_string).collect::<Vec<_>>())
        .build_parser()
        .unwrap();

    // Execute
    let names = parser.parse_tokens(&["world"]).unwrap();

    // Verify
    assert_eq!(names, vec!["name".to_string()]);
}
