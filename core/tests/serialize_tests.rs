use optschema_core::OptionSchema;
use serde_json::json;

fn schema() -> OptionSchema {
    OptionSchema::new()
        .add("verbose", Some('v'), "Be verbose")
        .unwrap()
        .add_required_with_action("file", None, "FILE", "Specify input file", |_| Ok(()))
        .unwrap()
}

#[test]
fn test_schema_serializes_specs_in_declaration_order() {
    let value = serde_json::to_value(schema()).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "kind": "flag",
                "name": "verbose",
                "short_name": "v",
                "description": "Be verbose",
            },
            {
                "kind": "required_argument",
                "name": "file",
                "argument_name": "FILE",
                "description": "Specify input file",
            },
        ])
    );
}

#[test]
fn test_setting_serializes_occurrences_and_arguments() {
    let setting = schema()
        .parse(["-v", "--fi=a.txt", "--file", "b.txt", "rest"])
        .unwrap();
    let value = serde_json::to_value(&setting).unwrap();

    assert_eq!(
        value,
        json!({
            "arguments": ["rest"],
            "options": [
                { "name": "verbose", "short_name": "v", "token": "-v" },
                {
                    "name": "file",
                    "token": "--fi=a.txt",
                    "argument_value": "a.txt",
                    "argument_values": ["a.txt"],
                },
                {
                    "name": "file",
                    "token": "--file",
                    "argument_value": "b.txt",
                    "argument_values": ["a.txt", "b.txt"],
                },
            ],
        })
    );
}
