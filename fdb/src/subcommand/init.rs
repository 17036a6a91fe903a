use std::error::Error;
use std::io::Write;

use crate::bootstrap::{self, BootstrapConfig};

pub fn run(config: &BootstrapConfig, writer: impl Write) -> Result<(), Box<dyn Error>> {
    bootstrap::run(config, writer)
}
