mod generate;

pub use generate::handle_generate_command;
