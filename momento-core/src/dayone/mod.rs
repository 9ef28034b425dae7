mod command_args;

pub use command_args::{DayOneOptions, build_new_entry_args};
