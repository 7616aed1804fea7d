//! ReadPane desktop binary entry point.

fn main() {
    let exit_code = report(readpane_gui::run());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn report<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("readpane: {}", err);
            1
        }
    }
}
