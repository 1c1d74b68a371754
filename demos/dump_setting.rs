//! Prints a schema description and a parse result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optschema-demos --example dump_setting -- -vI include --def=X main.c
//! ```

use optschema_core::OptionSchema;
use optschema_demos::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let schema = OptionSchema::new()
        .add("verbose", Some('v'), "Be verbose")?
        .add("version", None, "Print the version")?
        .add_required("include", Some('I'), "DIR", "Add DIR to the include path")?
        .add_required("define", Some('D'), "NAME", "Define NAME")?;

    println!("{}", serde_json::to_string_pretty(&schema)?);

    let setting = schema.parse(std::env::args().skip(1))?;
    println!("{}", serde_json::to_string_pretty(&setting)?);
    Ok(())
}
