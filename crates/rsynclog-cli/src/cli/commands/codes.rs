//! `rsynclog codes` – print the exit code table.

use rsynclog_core::exit_codes::ExitCodeTable;

pub fn run_codes() {
    let table = ExitCodeTable::rsync();
    println!("{:<6} {}", "CODE", "MEANING");
    for (code, message) in table.iter() {
        println!("{:<6} {}", code, message);
    }
}
