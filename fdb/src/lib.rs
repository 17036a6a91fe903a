pub mod bootstrap;
pub mod subcommand;
pub mod table;
