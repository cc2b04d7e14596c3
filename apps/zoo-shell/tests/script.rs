//! End-to-end: a config file and a script driven through the shell library.

use std::io::Write;

use zoo_shell::config::{OutputFormat, ShellConfig};
use zoo_shell::interactive::Shell;
use zoo_shell::state::ZooState;

const CONFIG: &str = r#"
short_change = "refund"

[fee]
pounds = 17
pence = 50

[cash]
"10" = 1
"2" = 1

[[areas]]
kind = "enclosure"
capacity = 2

[[areas]]
kind = "aquarium"
capacity = 3

[[areas]]
kind = "picnic"

[[connections]]
from = 0
to = 1

[[connections]]
from = 1
to = 2

[[connections]]
from = 2
to = 0
"#;

const SCRIPT: &str = "\
# residents
add-animal 1 zebra Marty
add-animal 1 lion Leo
add-animal 2 shark Bruce
add-animal 3 seal Sam

# layout
unreachable
path 0 2
visit 0 1 2 0

# tickets
pay 20=1
supply
pay 10=1 5=1 2=1 50p=1
quit
fee
";

fn shell_from(config_text: &str, output: OutputFormat) -> Shell {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config_text.as_bytes()).unwrap();

    let mut config = ShellConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    config.output = output;

    Shell::new(ZooState::from_config(&config).unwrap(), output)
}

fn run(shell: &Shell, script: &str) -> Vec<String> {
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out, false).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_a_day_at_the_zoo() {
    let shell = shell_from(CONFIG, OutputFormat::Text);
    let lines = run(&shell, SCRIPT);

    assert_eq!(
        lines,
        vec![
            "Marty the zebra: animal added (code 0)",
            "Leo the lion: incompatible with current inhabitants (code 4)",
            "Bruce the shark: animal added (code 0)",
            "Sam the seal: area is not a habitat (code 1)",
            "Unreachable areas: 3",
            "Path 0 → 2 is not allowed",
            "Seen: Marty, Bruce",
            "Refunded (change unavailable): 1 x £20",
            "Stock: 1 x £10, 1 x £2 (2 pieces, total £12.00)",
            "Paid £17.50 exactly. No change.",
            "Goodbye",
        ]
    );

    let till = shell
        .state()
        .with_zoo(|zoo| zoo.cash_supply().total_value().pence());
    assert_eq!(till, 1200 + 1750);
}

#[test]
fn test_json_script_is_one_object_per_line() {
    let shell = shell_from(CONFIG, OutputFormat::Json);
    let lines = run(&shell, "pay 20=1\nvisit 2 1\nfee\n");

    let values: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["type"], "payment");
    assert_eq!(values[0]["status"]["kind"], "refunded");
    assert_eq!(values[0]["status"]["reason"], "change_unavailable");
    assert_eq!(values[1]["error"]["code"], "REJECTED");
    assert_eq!(values[2]["fee"], 1750);
}

#[test]
fn test_accepting_short_change() {
    let config = CONFIG.replace("\"refund\"", "\"accept_shortfall\"");
    let shell = shell_from(&config, OutputFormat::Text);
    let lines = run(&shell, "pay 20=1\nsupply\n");

    assert_eq!(
        lines,
        vec![
            "Paid £20.00. Change £2.00: 1 x £2 (short by £0.50)",
            "Stock: 1 x £20, 1 x £10 (2 pieces, total £30.00)",
        ]
    );
}
