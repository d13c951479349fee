//! Print the table definition the server expects.

use favstore_server::db::SCHEMA;

pub fn run_schema() {
    print!("{SCHEMA}");
}
